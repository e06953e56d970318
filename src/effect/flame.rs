//! Rising-flame effect
//!
//! Advances the heat-field simulation one step per rendered frame and
//! maps every cell's heat through the palette gradient. The frame
//! scheduler's cadence is what gates the simulation rate.

use embassy_time::Instant;

use super::Effect;
use crate::color::{BLACK_BODY, Gradient, Rgb};
use crate::engine::{FlameConfig, FlameEngine, FlameVariant};
use crate::math8::Rand8;

/// Fire simulation mapped through a color gradient.
#[derive(Debug, Clone)]
pub struct FlameEffect<const N: usize> {
    engine: FlameEngine<N>,
    palette: &'static Gradient,
}

impl<const N: usize> FlameEffect<N> {
    /// Create a flame with the given preset's constants.
    ///
    /// The PRNG starts from a zeroed seed register, matching a cold
    /// power-on; the flicker sequence is deterministic per boot.
    pub fn new(variant: FlameVariant) -> Self {
        Self::with_config(FlameConfig::for_variant(variant), Rand8::new(0))
    }

    /// Create a flame from an explicit config and generator.
    pub fn with_config(config: FlameConfig, rng: Rand8) -> Self {
        Self {
            engine: FlameEngine::new(config, rng),
            palette: &BLACK_BODY,
        }
    }

    /// Select an alternative palette.
    #[must_use]
    pub fn with_palette(mut self, palette: &'static Gradient) -> Self {
        self.palette = palette;
        self
    }

    pub const fn engine(&self) -> &FlameEngine<N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut FlameEngine<N> {
        &mut self.engine
    }
}

impl<const N: usize> Default for FlameEffect<N> {
    fn default() -> Self {
        Self::new(FlameVariant::Torch)
    }
}

impl<const N: usize> Effect for FlameEffect<N> {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        self.engine.step();

        let cells = self.engine.field().cells();
        for (led, heat) in leds.iter_mut().zip(cells.iter()) {
            *led = self.palette.color_at(*heat);
        }
    }

    fn reset(&mut self) {
        let seed = self.engine.config().base_seed_heat;
        let field = self.engine.field_mut();
        field.clear();
        field.seed_base(seed);
    }
}
