//! Reflected binary (Gray) code helpers
//!
//! Adjacent sectors on the dial carry codes that differ in exactly one bit,
//! so a sensor sitting on a sector boundary can only ever be off by one.

/// Gray code of `n`
pub fn encode(n: u32) -> u32 {
    n ^ (n >> 1)
}

/// Binary value of Gray code `gray`
pub fn decode(gray: u32) -> u32 {
    let mut binary = gray;
    let mut mask = gray >> 1;
    while mask != 0 {
        binary ^= mask;
        mask >>= 1;
    }
    binary
}

/// Zero-padded, most-significant-first binary string of at least `bits` digits
///
/// Values wider than `bits` are printed in full rather than truncated.
pub fn to_bit_string(value: u32, bits: usize) -> String {
    format!("{:0width$b}", value, width = bits)
}

/// Whether bit `index` (0 = least significant) is set
pub fn bit(value: u32, index: usize) -> bool {
    index < u32::BITS as usize && (value >> index) & 1 == 1
}

/// Whether two codes differ in exactly one bit
pub fn is_adjacent(a: u32, b: u32) -> bool {
    (a ^ b).count_ones() == 1
}

/// Number of binary digits needed to write `value` (at least 1)
pub fn width(value: u32) -> usize {
    (u32::BITS - value.leading_zeros()).max(1) as usize
}
