use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{BigEndian as Be, ByteOrder};

use crate::error::WatermarkError;
use crate::result::Result;

/// Expands bytes into bits, most significant bit first
pub fn to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    std::iter::from_fn(|| reader.read_bit().ok()).collect()
}

/// Packs bits back into bytes, most significant bit first.
///
/// A tail of less than 8 bits is dropped, unless `strict` is set, then it is an error.
pub fn from_bits(bits: &[bool], strict: bool) -> Result<Vec<u8>> {
    let tail = bits.len() % 8;
    if strict && tail != 0 {
        return Err(WatermarkError::Framing(format!(
            "{} bits are not a multiple of 8",
            bits.len()
        )));
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8), BigEndian);
    for &bit in &bits[..bits.len() - tail] {
        writer.write_bit(bit)?;
    }

    Ok(writer.into_writer())
}

pub fn u32_to_bits(n: u32) -> Vec<bool> {
    let mut buf = [0; 4];
    Be::write_u32(&mut buf, n);
    to_bits(&buf)
}

/// Reads a big-endian `u32` from the first 32 bits
pub fn bits_to_u32(bits: &[bool]) -> Result<u32> {
    if bits.len() < 32 {
        return Err(WatermarkError::Framing(format!(
            "32 bits needed for a length header, only {} available",
            bits.len()
        )));
    }

    let bytes = from_bits(&bits[..32], true)?;
    Ok(Be::read_u32(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().filter(|c| !c.is_whitespace()).map(|c| c == '1').collect()
    }

    #[test]
    fn should_expand_msb_first() {
        assert_eq!(to_bits(b"H"), bits("0100 1000"));
        assert_eq!(to_bits(&[0x80, 0x01]), bits("1000 0000 0000 0001"));
    }

    #[test]
    fn should_pack_msb_first() {
        assert_eq!(from_bits(&bits("0100 1000 0100 1001"), true).unwrap(), b"HI");
    }

    #[test]
    fn should_drop_stray_tail_bits() {
        assert_eq!(from_bits(&bits("0100 1000 101"), false).unwrap(), b"H");
        assert!(from_bits(&bits("101"), false).unwrap().is_empty());
    }

    #[test]
    fn should_fail_on_stray_tail_bits_when_strict() {
        assert!(matches!(
            from_bits(&bits("0100 1000 101"), true),
            Err(WatermarkError::Framing(_))
        ));
    }

    #[test]
    fn should_handle_multibyte_utf8() {
        let text = "héllo 🌍";
        let packed = from_bits(&to_bits(text.as_bytes()), true).unwrap();

        assert_eq!(String::from_utf8(packed).unwrap(), text);
    }

    #[test]
    fn should_write_length_headers_big_endian() {
        let header = u32_to_bits(2);

        assert_eq!(header.len(), 32);
        assert_eq!(&header[30..], &[true, false]);
        assert!(header[..30].iter().all(|b| !b));
        assert_eq!(bits_to_u32(&u32_to_bits(0xDEAD_BEEF)).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn should_read_header_from_a_longer_stream() {
        let mut stream = u32_to_bits(7);
        stream.extend(to_bits(b"payload"));

        assert_eq!(bits_to_u32(&stream).unwrap(), 7);
    }

    #[test]
    fn should_fail_on_short_header() {
        assert!(matches!(
            bits_to_u32(&[true; 31]),
            Err(WatermarkError::Framing(_))
        ));
    }
}
