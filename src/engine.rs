//! Heat-field update engine.
//!
//! Once per frame the engine runs a configured pipeline of operations
//! over the heat field: random ignition at the base, ambient cooling,
//! upward heat transfer between levels and lateral smoothing within a
//! level, then a floor on the base levels so the fire never goes out.
//!
//! Two hardware builds of the lamp shipped with different constants and
//! step orders. Rather than two code paths, both live here as preset
//! configurations of one parameterized engine: [`FlameVariant::Torch`]
//! and [`FlameVariant::Lantern`].
//!
//! Every operation is total over the 8-bit domain — saturating
//! arithmetic and row-wrapped indexing leave nothing to fail.

use crate::field::{BASE_LEVELS, HeatField};
use crate::math8::{Rand8, qadd8, qsub8};

/// One operation of the per-frame update pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameStep {
    /// Inject a random amount of heat into a random base-level cell.
    Ignite,
    /// Subtract the cooling rate from every cell.
    Cool,
    /// Propagate heat upward between levels.
    Rise,
    /// Blur laterally within each level.
    Smear,
}

/// Named preset configurations of the update pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameVariant {
    /// The wide build: 8-pixel levels, gentle cooling, hot ignition,
    /// diagonal heat transfer attenuated by a spread factor.
    Torch,
    /// The narrow build: 7-pixel levels, faster cooling, softer
    /// ignition, straight-up heat transfer with an extra smear pass.
    Lantern,
}

/// Pipeline of the wide build: rise after cooling, one smear at the end.
pub const TORCH_STEPS: [FlameStep; 4] = [
    FlameStep::Ignite,
    FlameStep::Cool,
    FlameStep::Rise,
    FlameStep::Smear,
];

/// Pipeline of the narrow build: an extra smear ahead of the rise.
pub const LANTERN_STEPS: [FlameStep; 5] = [
    FlameStep::Ignite,
    FlameStep::Cool,
    FlameStep::Smear,
    FlameStep::Rise,
    FlameStep::Smear,
];

/// Tunable parameters of the update engine.
///
/// All of these are compile-time choices on the lamp hardware; the
/// presets below are the two configurations that shipped.
#[derive(Debug, Clone)]
pub struct FlameConfig {
    /// Pixels per level (row) of the strip.
    pub level_width: usize,
    /// Heat subtracted from every cell, every frame.
    pub cooling: u8,
    /// Lower bound of the heat injected per ignition, inclusive.
    pub ignition_min: u8,
    /// Upper bound of the heat injected per ignition, exclusive.
    pub ignition_limit: u8,
    /// Floor applied to the base levels after every update.
    pub base_min_heat: u8,
    /// Baseline heat the base levels are pre-seeded with at startup.
    pub base_seed_heat: u8,
    /// Rise attenuation factor, applied as `(sum * spread) >> 8`.
    /// `None` disables attenuation.
    pub heat_spread: Option<u8>,
    /// Whether the rise step samples the two diagonal-below neighbors.
    pub rise_diagonals: bool,
    /// The pipeline, in execution order. The base floor always runs
    /// after the last step.
    pub steps: &'static [FlameStep],
    /// An extra ignition pulse fires every this-many frames.
    pub reignite_period: u8,
}

impl FlameConfig {
    /// Constants of the wide (8-pixel-level) build.
    pub const fn torch() -> Self {
        Self {
            level_width: 8,
            cooling: 2,
            ignition_min: 0x40,
            ignition_limit: 0xE0,
            base_min_heat: 0x10,
            base_seed_heat: 0x20,
            heat_spread: Some(0x80),
            rise_diagonals: true,
            steps: &TORCH_STEPS,
            reignite_period: 6,
        }
    }

    /// Constants of the narrow (7-pixel-level) build.
    pub const fn lantern() -> Self {
        Self {
            level_width: 7,
            cooling: 3,
            ignition_min: 0x20,
            ignition_limit: 0x90,
            base_min_heat: 0x10,
            base_seed_heat: 0x20,
            heat_spread: None,
            rise_diagonals: false,
            steps: &LANTERN_STEPS,
            reignite_period: 6,
        }
    }

    pub const fn for_variant(variant: FlameVariant) -> Self {
        match variant {
            FlameVariant::Torch => Self::torch(),
            FlameVariant::Lantern => Self::lantern(),
        }
    }
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self::torch()
    }
}

/// The fire simulation: a heat field plus the machinery to update it.
///
/// Owns its field, PRNG and scratch buffer outright; nothing here is
/// process-wide state.
#[derive(Debug, Clone)]
pub struct FlameEngine<const N: usize> {
    field: HeatField<N>,
    scratch: [u8; N],
    rng: Rand8,
    config: FlameConfig,
    /// Rolling frame counter driving the periodic extra ignition.
    frames: u8,
}

impl<const N: usize> FlameEngine<N> {
    /// Create an engine with a freshly seeded field.
    pub fn new(config: FlameConfig, rng: Rand8) -> Self {
        let mut field = HeatField::new(config.level_width);
        field.seed_base(config.base_seed_heat);
        Self {
            field,
            scratch: [0; N],
            rng,
            config,
            frames: 0,
        }
    }

    pub const fn config(&self) -> &FlameConfig {
        &self.config
    }

    pub const fn field(&self) -> &HeatField<N> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut HeatField<N> {
        &mut self.field
    }

    /// Run one full update cycle: the configured pipeline, then the
    /// base-level floor.
    pub fn step(&mut self) {
        for step in self.config.steps {
            match step {
                FlameStep::Ignite => self.ignite(),
                FlameStep::Cool => self.cool(),
                FlameStep::Rise => self.rise(),
                FlameStep::Smear => self.smear(),
            }
        }
        self.field.floor_base(self.config.base_min_heat);
    }

    /// Add a random amount of heat to a random base-level cell, with a
    /// second pulse every `reignite_period`th frame.
    pub fn ignite(&mut self) {
        self.inject();
        self.frames += 1;
        if self.frames >= self.config.reignite_period {
            self.frames = 0;
            self.inject();
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inject(&mut self) {
        let base_cells = (BASE_LEVELS * self.config.level_width) as u8;
        let cell = usize::from(self.rng.below(base_cells));
        let amount = self
            .rng
            .in_range(self.config.ignition_min, self.config.ignition_limit);
        let cells = self.field.cells_mut();
        cells[cell] = qadd8(cells[cell], amount);
    }

    /// Ambient heat loss: every cell fades by the cooling rate.
    pub fn cool(&mut self) {
        for cell in self.field.cells_mut() {
            *cell = qsub8(*cell, self.config.cooling);
        }
    }

    /// Upward heat transfer.
    ///
    /// Every cell above the bottom level becomes a weighted average of
    /// itself and the cells below it, walked in ascending index order
    /// in place. Only the current and lower levels are ever read —
    /// never a higher one — so heat cannot flow downward within a
    /// frame.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rise(&mut self) {
        let diagonals = self.config.rise_diagonals;
        let spread = self.config.heat_spread;

        for level in 1..self.field.level_count() {
            for col in 0..self.field.width_of(level) {
                let i = self.field.index_of(level, col);
                let below = self.field.index_of(level - 1, col);
                let cells = self.field.cells();

                let mut sum = 2 * u16::from(cells[i]);
                if diagonals {
                    let down_left = self.field.lateral(level - 1, col, -1);
                    let down_right = self.field.lateral(level - 1, col, 1);
                    sum += u16::from(cells[below])
                        + (u16::from(cells[down_left]) >> 1)
                        + (u16::from(cells[down_right]) >> 1);
                } else {
                    sum += 2 * u16::from(cells[below]);
                }
                sum >>= 2;
                if let Some(spread) = spread {
                    sum = (sum * u16::from(spread)) >> 8;
                }

                self.field.cells_mut()[i] = sum as u8;
            }
        }
    }

    /// Lateral blur within each level.
    ///
    /// `(2*self + left + right) >> 2`, neighbors row-wrapped. The pass
    /// is computed into a scratch buffer and copied back afterwards so
    /// every cell blurs against pre-pass values — the result does not
    /// depend on traversal order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn smear(&mut self) {
        for level in 0..self.field.level_count() {
            for col in 0..self.field.width_of(level) {
                let i = self.field.index_of(level, col);
                let left = self.field.lateral(level, col, -1);
                let right = self.field.lateral(level, col, 1);
                let cells = self.field.cells();

                let sum = 2 * u16::from(cells[i])
                    + u16::from(cells[left])
                    + u16::from(cells[right]);
                self.scratch[i] = (sum >> 2) as u8;
            }
        }
        self.field.cells_mut().copy_from_slice(&self.scratch);
    }
}
