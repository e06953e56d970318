//! Steady ember glow
//!
//! The second switch position: every pixel holds the color the palette
//! produces for a fixed mid-scale heat. The color is sampled once at
//! construction; rendering is a constant fill.

use embassy_time::Instant;

use super::Effect;
use crate::color::{Gradient, Rgb};

/// Heat value the steady mode renders at.
pub const EMBER_HEAT: u8 = 0x80;

/// Uniform ember-colored fill.
#[derive(Debug, Clone)]
pub struct EmberEffect {
    color: Rgb,
}

impl EmberEffect {
    pub fn new(palette: &Gradient) -> Self {
        Self {
            color: palette.color_at(EMBER_HEAT),
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for EmberEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        for led in leds {
            *led = self.color;
        }
    }
}
