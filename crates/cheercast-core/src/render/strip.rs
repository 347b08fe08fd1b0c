use std::thread;
use std::time::Duration;

use log::info;

use super::fade::blend_colour;
use super::{CheerTarget, FADE_STEPS, PixelSink, RenderError};
use crate::colour::Colour;

/// Default inter-frame pause for strip devices (a full fade takes ~1 s).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Crossfade renderer for linear LED strips.
///
/// The strip acts as a shift register of colour history: each event pushes
/// the previous colours one pixel down and places the new colour at pixel 0,
/// then the whole strip fades from the old frame to the new one.
///
/// # Examples
/// ```no_run
/// use cheercast_core::colour::Colour;
/// use cheercast_core::render::{CheerTarget, PixelSink, StripRenderer};
///
/// fn demo<S: PixelSink>(sink: S) -> Result<(), cheercast_core::render::RenderError> {
///     let mut strip = StripRenderer::new(sink, 8);
///     strip.update(Colour::new(0xFF0000).unwrap())
/// }
/// ```
pub struct StripRenderer<S> {
    sink: S,
    current: Vec<Colour>,
    frame_interval: Duration,
}

impl<S: PixelSink> StripRenderer<S> {
    /// A strip of `width` pixels, all starting black.
    pub fn new(sink: S, width: usize) -> Self {
        Self::with_frame_interval(sink, width, DEFAULT_FRAME_INTERVAL)
    }

    /// Same, with an explicit inter-frame pause. Tests pass zero to render
    /// transitions instantly.
    pub fn with_frame_interval(sink: S, width: usize, frame_interval: Duration) -> Self {
        Self {
            sink,
            current: vec![Colour::BLACK; width],
            frame_interval,
        }
    }

    /// The settled colour of every pixel (the last fully rendered frame
    /// once idle).
    pub fn pixels(&self) -> &[Colour] {
        &self.current
    }

    /// Releases the sink, e.g. to blank the hardware on shutdown.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: PixelSink> CheerTarget for StripRenderer<S> {
    fn update(&mut self, colour: Colour) -> Result<(), RenderError> {
        info!("strip fading to {colour}");

        let mut next = vec![Colour::BLACK; self.current.len()];
        for (i, slot) in next.iter_mut().enumerate().skip(1) {
            *slot = self.current[i - 1];
        }
        if let Some(head) = next.first_mut() {
            *head = colour;
        }

        for step in 1..=FADE_STEPS {
            for (i, (&from, &to)) in self.current.iter().zip(&next).enumerate() {
                let (r, g, b) = blend_colour(step, from, to);
                self.sink.set_pixel(i, r, g, b)?;
            }
            self.sink.show()?;
            if !self.frame_interval.is_zero() {
                thread::sleep(self.frame_interval);
            }
        }

        // Committed only after all 100 frames were pushed: a sink failure
        // above leaves `current` at the pre-update state.
        self.current = next;
        Ok(())
    }
}
