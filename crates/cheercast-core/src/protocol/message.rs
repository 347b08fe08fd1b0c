use std::fmt;

use thiserror::Error;

use super::error::DecodeError;
use super::layout;
use super::reader::MessageReader;
use crate::colour::{self, Colour};

/// The caption contained no recognized colour name.
///
/// This is an ingestion outcome rather than a protocol failure: the caller
/// simply produces no message for that input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no known colour in {text:?}")]
pub struct NoColourFound {
    pub text: String,
}

/// One colour event in its wire form.
///
/// The blob is the canonical encoding and never changes after construction;
/// [`CheerMessage::from_bytes`] keeps the received bytes rather than
/// re-encoding, so a relayed message is byte-identical to the original.
///
/// # Examples
/// ```
/// use cheercast_core::colour::Colour;
/// use cheercast_core::protocol::CheerMessage;
///
/// let sent = CheerMessage::new(Colour::new(0x00FF00).unwrap(), "go green now");
/// let received = CheerMessage::from_bytes(sent.blob())?;
/// assert_eq!(received.colour(), sent.colour());
/// assert_eq!(received.text(), "go green now");
/// # Ok::<(), cheercast_core::protocol::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheerMessage {
    colour: Colour,
    text: String,
    blob: Vec<u8>,
}

impl CheerMessage {
    /// Encodes a colour and caption into a new message.
    ///
    /// The caption length is written as an LSB-first base-128 varint using
    /// the minimal number of bytes.
    pub fn new(colour: Colour, text: &str) -> Self {
        let coded = text.as_bytes();
        let mut blob = Vec::with_capacity(layout::MIN_LEN + coded.len());

        blob.push(layout::OPCODE);
        blob.push(colour.r());
        blob.push(colour.g());
        blob.push(colour.b());

        let mut left = coded.len();
        loop {
            let low = (left as u8) & layout::PAYLOAD_MASK;
            left >>= layout::PAYLOAD_BITS;
            if left == 0 {
                blob.push(low);
                break;
            }
            blob.push(low | layout::CONTINUATION_BIT);
        }

        blob.extend_from_slice(coded);

        Self {
            colour,
            text: text.to_string(),
            blob,
        }
    }

    /// Resolves the first colour name in `text` and encodes the message.
    pub fn from_text(text: &str) -> Result<Self, NoColourFound> {
        let colour = colour::find_in_text(text).ok_or_else(|| NoColourFound {
            text: text.to_string(),
        })?;
        Ok(Self::new(colour, text))
    }

    /// Decodes a received datagram.
    ///
    /// Malformed UTF-8 in the caption never rejects a datagram; invalid
    /// sequences are replaced with U+FFFD. The structural checks are strict:
    /// the buffer must be exactly opcode + colour + varint + caption.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let reader = MessageReader::new(data);
        reader.require_len(layout::MIN_LEN)?;

        let opcode = reader.read_u8(layout::OPCODE_OFFSET)?;
        if opcode != layout::OPCODE {
            return Err(DecodeError::BadOpcode {
                expected: layout::OPCODE,
                actual: opcode,
            });
        }

        let colour = reader.read_colour()?;
        let (declared, varint_len) = reader.read_varint(layout::LENGTH_OFFSET)?;
        let caption = reader.tail(layout::LENGTH_OFFSET + varint_len);
        if caption.len() != declared {
            return Err(DecodeError::LengthMismatch {
                declared,
                actual: caption.len(),
            });
        }

        Ok(Self {
            colour,
            text: String::from_utf8_lossy(caption).into_owned(),
            blob: data.to_vec(),
        })
    }

    /// The colour carried by this message.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The caption text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The canonical wire form.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }
}

impl fmt::Display for CheerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.colour, self.text)
    }
}
