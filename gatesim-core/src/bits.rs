//! Little-endian bit/word helpers shared by composites, demos, and tests.

/// Little-endian bit decomposition: bit 0 is the LSB and maps to input 0.
pub fn u64_to_bits_le(value: u64, bit_width: usize) -> Vec<bool> {
    (0..bit_width).map(|idx| (value >> idx) & 1 == 1).collect()
}

/// Recomposes a little-endian bit slice into a word.
pub fn bits_to_u64(bits: &[bool]) -> u64 {
    bits.iter()
        .enumerate()
        .fold(0u64, |acc, (idx, bit)| acc | ((*bit as u64) << idx))
}

/// Four-bit LSB-first decomposition used by the ALU interface.
pub fn u8_to_bits4(value: u8) -> [bool; 4] {
    std::array::from_fn(|idx| (value >> idx) & 1 == 1)
}

/// Recomposes four LSB-first bits into a value in `0..16`.
pub fn bits4_to_u8(bits: [bool; 4]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (idx, bit)| acc | ((*bit as u8) << idx))
}
