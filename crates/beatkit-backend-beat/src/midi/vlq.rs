//! Variable-length quantities.
//!
//! Seven bits per byte, most significant group first; every byte except the
//! last has its high bit set. Four bytes cover `0..=0x0FFF_FFFF`.

use super::MidiError;

/// Largest value a 4-byte quantity can hold.
pub const MAX_VLQ: u32 = 0x0FFF_FFFF;

/// Appends `value` to `out` as a variable-length quantity.
pub fn encode_vlq(value: u32, out: &mut Vec<u8>) -> Result<(), MidiError> {
    if value > MAX_VLQ {
        return Err(MidiError::DeltaOutOfRange(value));
    }

    let mut groups = [0u8; 4];
    let mut len = 0;
    let mut rest = value;
    loop {
        groups[len] = (rest & 0x7F) as u8;
        len += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }

    for (i, &group) in groups[..len].iter().enumerate().rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(group | continuation);
    }
    Ok(())
}

/// Reads a variable-length quantity from the start of `data`.
///
/// Returns the value and the number of bytes consumed, or `None` if the data
/// ends mid-quantity or the quantity is longer than four bytes.
pub fn decode_vlq(data: &[u8]) -> Option<(u32, usize)> {
    let mut value = 0u32;
    for (i, &byte) in data.iter().take(4).enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}
