use cheercast_core::{CheerMessage, Colour, DecodeError};

fn colour(packed: u32) -> Colour {
    Colour::new(packed).unwrap()
}

#[test]
fn round_trip_matrix() {
    let colours = [0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF];
    let captions: Vec<String> = vec![
        String::new(),
        "a".to_string(),
        "a".repeat(127),
        "a".repeat(128),
        // UTF-8 encoding crosses the 16384-byte varint boundary.
        "é".repeat(9000),
        "çà et là, 色は匂へど 🎨".to_string(),
    ];

    for &packed in &colours {
        for caption in &captions {
            let sent = CheerMessage::new(colour(packed), caption);
            let received = CheerMessage::from_bytes(sent.blob()).unwrap();
            assert_eq!(received.colour().packed(), packed);
            assert_eq!(received.text(), caption);
            assert_eq!(received.blob(), sent.blob());
        }
    }
}

#[test]
fn long_caption_uses_multi_byte_varint() {
    let caption = "é".repeat(9000); // 18000 bytes encoded
    let message = CheerMessage::new(Colour::BLACK, &caption);
    // 4 header bytes + 3 varint bytes (18000 needs 15 bits) + the caption.
    assert_eq!(message.blob().len(), 4 + 3 + 18000);
}

#[test]
fn rejects_four_byte_buffer() {
    assert_eq!(
        CheerMessage::from_bytes(&[1, 0, 0, 0]).unwrap_err(),
        DecodeError::TooShort {
            needed: 5,
            actual: 4
        }
    );
}

#[test]
fn rejects_foreign_opcode() {
    assert_eq!(
        CheerMessage::from_bytes(&[2, 0, 0, 0, 0]).unwrap_err(),
        DecodeError::BadOpcode {
            expected: 1,
            actual: 2
        }
    );
}

#[test]
fn rejects_unterminated_varint() {
    assert_eq!(
        CheerMessage::from_bytes(&[1, 0, 0, 0, 0x85, 0x90]).unwrap_err(),
        DecodeError::TruncatedLength { offset: 6 }
    );
}

#[test]
fn rejects_declared_length_beyond_buffer() {
    assert_eq!(
        CheerMessage::from_bytes(&[1, 0, 0, 0, 3, b'a']).unwrap_err(),
        DecodeError::LengthMismatch {
            declared: 3,
            actual: 1
        }
    );
}

#[test]
fn rejects_trailing_garbage() {
    // Declared 1 byte, two present: same strict length check.
    assert_eq!(
        CheerMessage::from_bytes(&[1, 0, 0, 0, 1, b'a', b'b']).unwrap_err(),
        DecodeError::LengthMismatch {
            declared: 1,
            actual: 2
        }
    );
}
