use super::FADE_STEPS;
use crate::colour::Colour;

/// Linear interpolation of one channel at `step` of [`FADE_STEPS`].
///
/// Integer floor division, recomputed from the endpoints at every step, so
/// repeated rounding never accumulates: step 100 is exactly `next`.
pub(super) fn blend(step: u32, current: u8, next: u8) -> u8 {
    let left = FADE_STEPS - step;
    ((step * u32::from(next) + left * u32::from(current)) / FADE_STEPS) as u8
}

/// Per-channel blend of two packed colours.
pub(super) fn blend_colour(step: u32, current: Colour, next: Colour) -> (u8, u8, u8) {
    (
        blend(step, current.r(), next.r()),
        blend(step, current.g(), next.g()),
        blend(step, current.b(), next.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::{FADE_STEPS, blend, blend_colour};
    use crate::colour::Colour;

    #[test]
    fn blend_endpoints_are_exact() {
        assert_eq!(blend(FADE_STEPS, 0x00, 0xFF), 0xFF);
        assert_eq!(blend(1, 0xFF, 0xFF), 0xFF);
        assert_eq!(blend(FADE_STEPS, 0x13, 0x00), 0x00);
    }

    #[test]
    fn blend_midpoint_floors() {
        // (50 * 255 + 50 * 0) / 100 = 127 under floor division.
        assert_eq!(blend(50, 0x00, 0xFF), 0x7F);
    }

    #[test]
    fn blend_is_monotonic_per_channel() {
        let mut previous = 0;
        for step in 1..=FADE_STEPS {
            let value = blend(step, 0, 200);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn blend_colour_handles_channels_independently() {
        let from = Colour::from_rgb(0, 100, 255);
        let to = Colour::from_rgb(255, 100, 0);
        assert_eq!(blend_colour(50, from, to), (127, 100, 127));
        assert_eq!(blend_colour(FADE_STEPS, from, to), (255, 100, 0));
    }
}
