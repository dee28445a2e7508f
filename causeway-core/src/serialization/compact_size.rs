//! Variable-length integer encoding for wire structures.
//!
//! Values below 0xFD occupy a single byte; larger values are tagged with
//! 0xFD/0xFE/0xFF and carried as little-endian u16/u32/u64. Reads reject
//! non-minimal encodings so every value has exactly one wire form.

use crate::error::SerializationError;

/// Largest length a variable-length byte vector may declare.
pub const MAX_VEC_SIZE: usize = 0x0200_0000;

/// Append a compact-size integer to `out`.
pub fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    if value < 0xFD {
        out.push(value as u8);
    } else if value <= 0xFFFF {
        out.push(0xFD);
        out.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xFFFF_FFFF {
        out.push(0xFE);
        out.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        out.push(0xFF);
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Read a compact-size integer, advancing `input` past it.
///
/// Rejects encodings that are longer than the value requires.
pub fn read_compact_size(input: &mut &[u8]) -> Result<u64, SerializationError> {
    let tag = take(input, 1)?[0];
    match tag {
        0xFD => {
            let bytes = take(input, 2)?;
            let mut buf = [0u8; 2];
            buf.copy_from_slice(bytes);
            let value = u16::from_le_bytes(buf) as u64;
            if value < 0xFD {
                return Err(SerializationError::NonCanonicalCompactSize);
            }
            Ok(value)
        }
        0xFE => {
            let bytes = take(input, 4)?;
            let mut buf = [0u8; 4];
            buf.copy_from_slice(bytes);
            let value = u32::from_le_bytes(buf) as u64;
            if value <= 0xFFFF {
                return Err(SerializationError::NonCanonicalCompactSize);
            }
            Ok(value)
        }
        0xFF => {
            let bytes = take(input, 8)?;
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            let value = u64::from_le_bytes(buf);
            if value <= 0xFFFF_FFFF {
                return Err(SerializationError::NonCanonicalCompactSize);
            }
            Ok(value)
        }
        value => Ok(value as u64),
    }
}

/// Append a length-prefixed byte string to `out`.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

/// Read a length-prefixed byte string, advancing `input` past it.
pub fn read_var_bytes(input: &mut &[u8]) -> Result<Vec<u8>, SerializationError> {
    let length = read_compact_size(input)?;
    if length > MAX_VEC_SIZE as u64 {
        return Err(SerializationError::OversizedLength(length));
    }
    let bytes = take(input, length as usize)?;
    Ok(bytes.to_vec())
}

/// Append a length-prefixed UTF-8 string to `out`.
pub fn write_var_str(out: &mut Vec<u8>, value: &str) {
    write_var_bytes(out, value.as_bytes());
}

fn take<'a>(input: &mut &'a [u8], count: usize) -> Result<&'a [u8], SerializationError> {
    if input.len() < count {
        return Err(SerializationError::UnexpectedEnd);
    }
    let (head, tail) = input.split_at(count);
    *input = tail;
    Ok(head)
}
