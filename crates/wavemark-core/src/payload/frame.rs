use byteorder::{BigEndian, WriteBytesExt};

use super::{repeat, to_bits};
use crate::error::WatermarkError;
use crate::result::Result;

/// Size of the length header in bits
pub const HEADER_BITS: usize = 32;

/// `[32-bit big-endian byte length][payload bytes]` as a bit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bits: Vec<bool>,
}

impl Frame {
    pub fn new(payload: &[u8]) -> Result<Self> {
        let len = u32::try_from(payload.len()).map_err(|_| {
            WatermarkError::Framing(format!(
                "payload of {} bytes does not fit a 32-bit length header",
                payload.len()
            ))
        })?;

        let mut buffer = Vec::with_capacity(payload.len() + 4);
        buffer.write_u32::<BigEndian>(len)?;
        buffer.extend_from_slice(payload);

        Ok(Self {
            bits: to_bits(&buffer),
        })
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The frame as it is written to the slots, every bit repeated `reps` times
    pub fn repeated(&self, reps: usize) -> Vec<bool> {
        repeat(&self.bits, reps)
    }
}

/// Slots occupied by a repetition coded frame carrying `byte_len` bytes,
/// `None` if that does not even fit into `usize`
pub fn required_slots(byte_len: usize, reps: usize) -> Option<usize> {
    byte_len
        .checked_mul(8)?
        .checked_add(HEADER_BITS)?
        .checked_mul(reps)
}
