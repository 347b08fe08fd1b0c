use std::thread;
use std::time::Duration;

use log::info;

use super::fade::blend;
use super::{CheerTarget, FADE_STEPS, LegSink, RenderError};
use crate::colour::Colour;

/// Concentric rings of colour history, newest first.
pub const RINGS: usize = 3;
/// Radial LED groups per ring.
pub const LEGS: usize = 6;
/// Total intensity a recognized colour adds to ring 0.
pub const COLOUR_INTENSITY: u8 = 32;
/// Default inter-frame pause for ring devices (a full fade takes ~10 s).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// The dropped outermost ring re-enters ring 0 as a ghost at this fraction.
const GHOST_DIVISOR: u8 = 4;

/// One full intensity frame: `[ring][leg]`.
pub type LegFrame = [[u8; LEGS]; RINGS];

/// Leg contributions of the named colours.
///
/// Each pattern sums to exactly [`COLOUR_INTENSITY`], split evenly when a
/// colour maps to two legs. Raw colour values outside the table contribute
/// nothing.
pub fn leg_pattern(colour: Colour) -> Option<[u8; LEGS]> {
    const MAX: u8 = COLOUR_INTENSITY;
    const HALF: u8 = COLOUR_INTENSITY / 2;

    let mut legs = [0u8; LEGS];
    match colour.packed() {
        0xFF0000 => legs[5] = MAX, // red
        0x008000 => legs[2] = MAX, // green
        0x0000FF => legs[1] = MAX, // blue
        0x00FFFF => {
            // cyan
            legs[2] = HALF;
            legs[1] = HALF;
        }
        0xFFFFFF => legs[0] = MAX, // white
        0xFDF5E6 => {
            // warmwhite / oldlace
            legs[0] = HALF;
            legs[5] = HALF;
        }
        0x800080 => {
            // purple
            legs[5] = HALF;
            legs[1] = HALF;
        }
        0xFF00FF => {
            // magenta
            legs[5] = HALF;
            legs[1] = HALF;
        }
        0xFFFF00 => legs[3] = MAX, // yellow
        0xFFA500 => legs[4] = MAX, // orange
        0xFFC0CB => {
            // pink
            legs[5] = HALF;
            legs[0] = HALF;
        }
        _ => return None,
    }
    Some(legs)
}

/// Crossfade renderer for ring/leg devices such as the PiGlow.
///
/// Colour history lives in three rings: each event shifts the rings outward,
/// brings the dropped outermost ring back onto ring 0 at quarter intensity,
/// and adds the new colour's leg pattern on top. The blend loop is the same
/// 100-step interpolation as the strip renderer, applied per leg per ring.
pub struct PiglowRenderer<S> {
    sink: S,
    current: LegFrame,
    frame_interval: Duration,
}

impl<S: LegSink> PiglowRenderer<S> {
    /// All legs dark.
    pub fn new(sink: S) -> Self {
        Self::with_frame_interval(sink, DEFAULT_FRAME_INTERVAL)
    }

    /// Same, with an explicit inter-frame pause.
    pub fn with_frame_interval(sink: S, frame_interval: Duration) -> Self {
        Self {
            sink,
            current: [[0; LEGS]; RINGS],
            frame_interval,
        }
    }

    /// The settled intensity of every leg once idle.
    pub fn legs(&self) -> &LegFrame {
        &self.current
    }

    /// Releases the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LegSink> CheerTarget for PiglowRenderer<S> {
    fn update(&mut self, colour: Colour) -> Result<(), RenderError> {
        info!("piglow fading to {colour}");

        let mut next: LegFrame = [[0; LEGS]; RINGS];
        for ring in 0..RINGS - 1 {
            next[ring + 1] = self.current[ring];
        }
        for leg in 0..LEGS {
            next[0][leg] = self.current[RINGS - 1][leg] / GHOST_DIVISOR;
        }
        if let Some(pattern) = leg_pattern(colour) {
            for leg in 0..LEGS {
                next[0][leg] = next[0][leg].saturating_add(pattern[leg]);
            }
        }

        let mut mix: LegFrame = [[0; LEGS]; RINGS];
        for step in 1..=FADE_STEPS {
            for ring in 0..RINGS {
                for leg in 0..LEGS {
                    mix[ring][leg] = blend(step, self.current[ring][leg], next[ring][leg]);
                }
            }
            self.sink.set_legs(&mix)?;
            self.sink.show()?;
            if !self.frame_interval.is_zero() {
                thread::sleep(self.frame_interval);
            }
        }

        self.current = next;
        Ok(())
    }
}
