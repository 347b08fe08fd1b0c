//! Cheer message wire format.
//!
//! A message is a fixed header (opcode `1`, 24-bit big-endian colour)
//! followed by the caption length as an LSB-first base-128 varint and the
//! caption bytes as UTF-8. Encoding always emits the minimal varint; decode
//! rejects short buffers, foreign opcodes, unterminated varints and bodies
//! whose length does not match the declared count.
//!
//! Byte offsets live in `layout`, bounds-checked access conventions in
//! `reader`, so `message` stays minimal.
//!
//! Version française (résumé):
//! Trame binaire : opcode 1, couleur 24 bits grand-boutiste, longueur du
//! texte en varint base 128 (bits de poids faible d'abord), texte UTF-8.
//! Les positions sont dans `layout`, les conventions d'accès dans `reader`.

pub mod error;
pub mod layout;
pub mod message;
pub mod reader;

pub use error::DecodeError;
pub use message::{CheerMessage, NoColourFound};
