use super::error::DecodeError;
use super::layout;
use crate::colour::Colour;

pub struct MessageReader<'a> {
    payload: &'a [u8],
}

impl<'a> MessageReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_colour(&self) -> Result<Colour, DecodeError> {
        let bytes = self
            .payload
            .get(layout::COLOUR_RANGE)
            .ok_or(DecodeError::TooShort {
                needed: layout::COLOUR_RANGE.end,
                actual: self.payload.len(),
            })?;
        Ok(Colour::from_rgb(bytes[0], bytes[1], bytes[2]))
    }

    /// Reads an LSB-first base-128 varint starting at `offset`.
    ///
    /// Returns the decoded value and the number of bytes consumed. Running
    /// off the end of the buffer with the continuation bit still set is a
    /// `TruncatedLength`. Non-minimal encodings are accepted on decode; bits
    /// beyond a `usize` are discarded, which can only produce a value that
    /// later fails the length check.
    pub fn read_varint(&self, offset: usize) -> Result<(usize, usize), DecodeError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        let mut upto = offset;

        loop {
            let byte = self
                .payload
                .get(upto)
                .copied()
                .ok_or(DecodeError::TruncatedLength { offset: upto })?;
            if shift < u64::BITS {
                value |= u64::from(byte & layout::PAYLOAD_MASK) << shift;
            }
            upto += 1;
            if byte & layout::CONTINUATION_BIT == 0 {
                break;
            }
            shift += layout::PAYLOAD_BITS;
        }

        Ok((value as usize, upto - offset))
    }

    /// Everything from `offset` to the end of the buffer.
    pub fn tail(&self, offset: usize) -> &'a [u8] {
        self.payload.get(offset..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::MessageReader;
    use crate::protocol::error::DecodeError;

    #[test]
    fn varint_single_byte() {
        let reader = MessageReader::new(&[0x7F]);
        assert_eq!(reader.read_varint(0).unwrap(), (127, 1));
    }

    #[test]
    fn varint_two_bytes() {
        // 128 = 0x80 | 0x00, then 0x01.
        let reader = MessageReader::new(&[0x80, 0x01]);
        assert_eq!(reader.read_varint(0).unwrap(), (128, 2));
    }

    #[test]
    fn varint_is_lsb_first() {
        // 0x82 0x01 must decode as 2 + (1 << 7) = 130, not 0x101.
        let reader = MessageReader::new(&[0x82, 0x01]);
        assert_eq!(reader.read_varint(0).unwrap(), (130, 2));
    }

    #[test]
    fn varint_truncated() {
        let reader = MessageReader::new(&[0x80]);
        let err = reader.read_varint(0).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedLength { offset: 1 });
    }

    #[test]
    fn varint_accepts_non_minimal_zero() {
        let reader = MessageReader::new(&[0x80, 0x00]);
        assert_eq!(reader.read_varint(0).unwrap(), (0, 2));
    }
}
