//! Payload framing.
//!
//! A watermark travels as a frame: a 32-bit big-endian byte length followed
//! by the UTF-8 bytes of the text, MSB first. Every frame bit is then
//! repeated `reps` times and voted back by majority on extraction.

mod bits;
mod frame;
mod repetition;

pub use bits::{bits_to_u32, from_bits, to_bits, u32_to_bits};
pub use frame::{required_slots, Frame, HEADER_BITS};
pub use repetition::{majority, repeat};
