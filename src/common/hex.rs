// src/common/hex.rs
//
// ASCII-hex digit codec for the serial transport and the big-endian
// split/join convention shared by every two-register quantity.

/// Encodes a byte as two uppercase ASCII-hex characters, high nibble first.
pub fn encode_hex_byte(value: u8) -> [u8; 2] {
    [
        encode_hex_digit(value >> 4),
        encode_hex_digit(value & 0x0F),
    ]
}

/// Encodes a single nibble (`0..=15`) as its ASCII-hex character.
///
/// Digits map to `'0'..='9'`, values 10–15 map to `'A'..='F'`.
pub fn encode_hex_digit(digit: u8) -> u8 {
    debug_assert!(digit <= 0x0F);
    if digit < 10 {
        digit + b'0'
    } else {
        digit - 10 + b'A'
    }
}

/// Decodes an ASCII-hex character back to its nibble value.
///
/// Only `'0'..='9'` and `'A'..='F'` are valid; the sensor never emits
/// lowercase digits, so anything else is a corrupted response.
pub fn decode_hex_digit(ascii: u8) -> Option<u8> {
    match ascii {
        b'0'..=b'9' => Some(ascii - b'0'),
        b'A'..=b'F' => Some(10 + ascii - b'A'),
        _ => None,
    }
}

/// Splits a 16-bit value into `[high, low]` register bytes.
pub fn split_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Reassembles a 16-bit value from `[high, low]` register bytes.
pub fn join_u16(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}
