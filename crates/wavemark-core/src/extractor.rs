//! Reading a watermark back

use std::ops::Range;

use log::{debug, warn};

use crate::domain::{Domain, EmbeddingDomain};
use crate::media::image::{crop_even, decode, read_channel};
use crate::media::WatermarkOptions;
use crate::payload::{bits_to_u32, from_bits, majority, required_slots, HEADER_BITS};
use crate::permutation::Permutation;
use crate::result::Result;
use crate::transform::{haar, Plane};
use crate::WatermarkError;

/// The recovered text and how it was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Decoded lossy, broken sequences show up as `U+FFFD`
    pub text: String,
    /// Payload length from the header
    pub byte_len: usize,
    /// Slots the locator could not place, read as `0`
    pub skipped_slots: usize,
}

/// Extracts the text embedded in the even part of `plane`
pub fn extract_plane(plane: &Plane, options: &WatermarkOptions) -> Result<ExtractReport> {
    options.validate()?;

    let domain = Domain::new(haar::forward(&plane.cropped_to_even()), options)?;
    read_frame(&domain, options)
}

/// Extracts the text embedded in image bytes
pub fn extract(image: &[u8], options: &WatermarkOptions) -> Result<String> {
    extract_with_report(image, options).map(|report| report.text)
}

pub fn extract_with_report(image: &[u8], options: &WatermarkOptions) -> Result<ExtractReport> {
    options.validate()?;

    let carrier = crop_even(decode(image)?)?;
    extract_plane(&read_channel(&carrier, options.channel), options)
}

/// Reads bits along the permutation, counting slots the domain cannot place.
///
/// The permutation spans exactly the domain's capacity, so with consistent
/// options the count stays 0.
struct SlotReader<'a> {
    domain: &'a Domain,
    permutation: Permutation,
    q: f64,
    skipped: usize,
}

impl SlotReader<'_> {
    fn read(&mut self, positions: Range<usize>) -> Vec<bool> {
        positions
            .map(|position| {
                let slot = self.permutation.slot(position);
                self.domain.extract_bit(slot, self.q).unwrap_or_else(|| {
                    self.skipped += 1;
                    warn!(
                        "slot {slot} lies outside the coefficient grid, read as 0 ({} so far)",
                        self.skipped
                    );
                    false
                })
            })
            .collect()
    }
}

fn read_frame(domain: &Domain, options: &WatermarkOptions) -> Result<ExtractReport> {
    let capacity = domain.capacity();
    let reps = options.reps;
    let mut reader = SlotReader {
        domain,
        permutation: Permutation::new(capacity, options.seed),
        q: options.q,
        skipped: 0,
    };

    let header_slots = required_slots(0, reps).unwrap_or(usize::MAX);
    if header_slots > capacity {
        return Err(WatermarkError::LengthValidation {
            byte_len: 0,
            required: header_slots,
            capacity,
        });
    }
    let mut bits = reader.read(0..header_slots);
    let declared = bits_to_u32(&majority(&bits, reps))?;
    debug!("header declares {declared} bytes, {capacity} slots available");

    let byte_len = declared as usize;
    let required = match required_slots(byte_len, reps) {
        Some(required) if byte_len != 0 && required <= capacity => required,
        required => {
            return Err(WatermarkError::LengthValidation {
                byte_len: declared,
                required: required.unwrap_or(usize::MAX),
                capacity,
            })
        }
    };

    bits.extend(reader.read(header_slots..required));
    let decoded = majority(&bits, reps);
    let payload_bits = decoded
        .get(HEADER_BITS..HEADER_BITS + byte_len * 8)
        .unwrap_or_default();
    let bytes = from_bits(payload_bits, true)?;

    if bytes.len() != byte_len {
        return Err(WatermarkError::Reconstruction {
            expected: byte_len,
            actual: bytes.len(),
        });
    }

    Ok(ExtractReport {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        byte_len,
        skipped_slots: reader.skipped,
    })
}
