//! Colour model and the CheerLights named-colour table.
//!
//! A [`Colour`] is a 24-bit RGB value packed as `0x00RRGGBB`; the constructor
//! enforces the range so downstream code never checks it again. The table of
//! named colours is process-wide immutable state (a const slice), so lookups
//! need no initialization or locking.
//!
//! Version française (résumé):
//! Une [`Colour`] est une valeur RVB 24 bits validée à la construction. La
//! table des couleurs nommées est constante : aucune initialisation
//! paresseuse, aucun verrou.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest packed value a 24-bit colour can take.
pub const MAX_PACKED: u32 = 0x00FF_FFFF;

/// The CheerLights colour set, from the API documentation. `warmwhite` and
/// `oldlace` share a value.
pub const NAMED_COLOURS: &[(&str, u32)] = &[
    ("red", 0xFF0000),
    ("green", 0x008000),
    ("blue", 0x0000FF),
    ("cyan", 0x00FFFF),
    ("white", 0xFFFFFF),
    ("oldlace", 0xFDF5E6),
    ("warmwhite", 0xFDF5E6),
    ("purple", 0x800080),
    ("magenta", 0xFF00FF),
    ("yellow", 0xFFFF00),
    ("orange", 0xFFA500),
    ("pink", 0xFFC0CB),
];

/// A 24-bit RGB colour packed as `0x00RRGGBB`.
///
/// # Examples
/// ```
/// use cheercast_core::colour::Colour;
///
/// let colour = Colour::new(0xFF8000).unwrap();
/// assert_eq!(colour.r(), 0xFF);
/// assert_eq!(colour.g(), 0x80);
/// assert_eq!(colour.b(), 0x00);
/// assert!(Colour::new(0x1_000_000).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Colour(u32);

impl Colour {
    /// All channels off.
    pub const BLACK: Colour = Colour(0);

    /// Builds a colour from a packed `0x00RRGGBB` value.
    pub fn new(packed: u32) -> Option<Self> {
        (packed <= MAX_PACKED).then_some(Self(packed))
    }

    /// Builds a colour from individual channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    /// The packed `0x00RRGGBB` value.
    pub fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Packed value outside `0..=0xFFFFFF`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("colour out of range: {0:#x}")]
pub struct ColourRangeError(pub u32);

impl TryFrom<u32> for Colour {
    type Error = ColourRangeError;

    fn try_from(packed: u32) -> Result<Self, Self::Error> {
        Colour::new(packed).ok_or(ColourRangeError(packed))
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

/// Looks up a single colour name, case-insensitively.
///
/// # Examples
/// ```
/// use cheercast_core::colour::lookup;
///
/// assert_eq!(lookup("Red").unwrap().packed(), 0xFF0000);
/// assert!(lookup("mauve").is_none());
/// ```
pub fn lookup(name: &str) -> Option<Colour> {
    NAMED_COLOURS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, packed)| Colour(packed))
}

/// Scans whitespace-separated words and returns the first recognized colour.
///
/// Returning `None` is the "no colour found" outcome: the caller simply
/// produces no message for that input.
///
/// # Examples
/// ```
/// use cheercast_core::colour::find_in_text;
///
/// let colour = find_in_text("paint it RED please").unwrap();
/// assert_eq!(colour.packed(), 0xFF0000);
/// assert!(find_in_text("nothing to see here").is_none());
/// ```
pub fn find_in_text(text: &str) -> Option<Colour> {
    text.split_whitespace().find_map(lookup)
}
