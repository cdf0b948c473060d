/// Bitcoin base-58 alphabet (no 0, O, I or l)
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes bytes as base-58 using the Bitcoin alphabet
///
/// The input is read as one big-endian unsigned integer and written out in
/// base 58, most significant digit first. Each leading zero byte becomes a
/// leading `1`, so the encoding is exactly invertible by a standard decoder.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base-58 digits, least significant first
    let mut digits: Vec<u8> = Vec::with_capacity((input.len() - zeros) * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    encoded.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    encoded
}

/// Encodes the UTF-8 bytes of a string
pub fn encode_str(input: &str) -> String {
    encode(input.as_bytes())
}
