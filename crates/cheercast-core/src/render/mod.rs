//! Crossfade rendering of colour events.
//!
//! Every device kind shares one state machine: build a target buffer from
//! the current one plus the new colour, then emit 100 linearly interpolated
//! frames with a fixed per-device pause between them. Only the buffer shape
//! and the colour-to-target mapping differ: [`StripRenderer`] treats a
//! linear strip as a shift register of colour history, [`PiglowRenderer`]
//! spreads intensity over three rings of six legs. Hardware access goes
//! through the [`PixelSink`] / [`LegSink`] traits; this crate contains no
//! GPIO code.
//!
//! An update is synchronous and blocking: it returns only after all 100
//! frames reached the sink. Transitions on one target never overlap; when
//! several event sources feed one device, wrap it in a [`SharedTarget`].
//!
//! Version française (résumé):
//! Fondu en 100 trames interpolées linéairement, avec pause fixe entre
//! trames. Seule change la forme du tampon (bande linéaire ou anneaux).
//! `update` est bloquant et jamais entrelacé sur une même cible.

mod fade;
pub mod piglow;
pub mod strip;

pub use piglow::{COLOUR_INTENSITY, LEGS, LegFrame, PiglowRenderer, RINGS, leg_pattern};
pub use strip::StripRenderer;

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::colour::Colour;

/// Frames per transition, for every device kind.
pub const FADE_STEPS: u32 = 100;

/// Rendering failure. Sink errors indicate a broken physical device and are
/// surfaced loudly; the in-memory state is only committed after a fully
/// successful transition.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("LED sink I/O error: {0}")]
    Sink(#[from] io::Error),
}

/// One rendering target fed by colour events.
pub trait CheerTarget {
    /// Animates from the current state to `colour`.
    ///
    /// Blocks until the full transition has been pushed to the sink. A
    /// second event always starts from whatever state the previous
    /// transition left behind; there is no merging or skipping.
    fn update(&mut self, colour: Colour) -> Result<(), RenderError>;
}

/// Pixel-addressable sink for strip-style devices.
///
/// `set_pixel` stages one pixel; `show` pushes the staged frame to the
/// hardware. The renderer never reads back.
pub trait PixelSink {
    fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> io::Result<()>;
    fn show(&mut self) -> io::Result<()>;
}

/// Leg-addressable sink for ring-style devices (e.g. a PiGlow board).
pub trait LegSink {
    fn set_legs(&mut self, legs: &LegFrame) -> io::Result<()>;
    fn show(&mut self) -> io::Result<()>;
}

/// Serializes updates from several event sources onto one target.
///
/// Cloning shares the underlying target; every `update` takes the lock for
/// the whole transition, so frames from concurrent events never interleave.
pub struct SharedTarget<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> SharedTarget<T> {
    pub fn new(target: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(target)),
        }
    }
}

impl<T> Clone for SharedTarget<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: CheerTarget> CheerTarget for SharedTarget<T> {
    fn update(&mut self, colour: Colour) -> Result<(), RenderError> {
        // A poisoned lock means a previous update panicked mid-transition;
        // the state is still a valid buffer, so rendering continues from it.
        let mut target = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        target.update(colour)
    }
}
