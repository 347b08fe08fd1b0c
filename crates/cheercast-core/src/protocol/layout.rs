pub const OPCODE_OFFSET: usize = 0;
pub const COLOUR_RANGE: std::ops::Range<usize> = 1..4;
pub const LENGTH_OFFSET: usize = 4;

/// Smallest well-formed message: opcode, colour, one varint byte.
pub const MIN_LEN: usize = 5;

pub const OPCODE: u8 = 1;

pub const CONTINUATION_BIT: u8 = 0x80;
pub const PAYLOAD_MASK: u8 = 0x7F;
pub const PAYLOAD_BITS: u32 = 7;
