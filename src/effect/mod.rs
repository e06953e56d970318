//! Lamp modes with compile-time known variants
//!
//! The three positions of the physical switch map onto three effects.
//! All effects are stored in an enum to avoid heap allocations; each
//! implements the [`Effect`] trait.

mod ember;
mod flame;
mod off;

use embassy_time::Instant;
pub use ember::{EMBER_HEAT, EmberEffect};
pub use flame::FlameEffect;
pub use off::OffEffect;

use crate::color::{Gradient, Rgb};
use crate::engine::FlameVariant;

const EFFECT_NAME_FLAME: &str = "flame";
const EFFECT_NAME_EMBER: &str = "ember";
const EFFECT_NAME_OFF: &str = "off";

const EFFECT_ID_FLAME: u8 = 0;
const EFFECT_ID_EMBER: u8 = 1;
const EFFECT_ID_OFF: u8 = 2;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
///
/// `N` sizes the flame effect's heat field; it matches the renderer's
/// frame buffer.
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    /// The fire simulation (switch position 1)
    Flame(FlameEffect<N>),
    /// Steady ember glow (switch position 2)
    Ember(EmberEffect),
    /// Dark strip (switch center position)
    Off(OffEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Flame = EFFECT_ID_FLAME,
    Ember = EFFECT_ID_EMBER,
    Off = EFFECT_ID_OFF,
}

impl<const N: usize> Default for EffectSlot<N> {
    fn default() -> Self {
        Self::Off(OffEffect::new())
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FLAME => Self::Flame,
            EFFECT_ID_EMBER => Self::Ember,
            EFFECT_ID_OFF => Self::Off,
            _ => return None,
        })
    }

    /// Build the effect state for this id.
    ///
    /// Switching away from [`EffectId::Flame`] drops the heat field;
    /// switching back constructs a freshly seeded one.
    pub fn to_slot<const N: usize>(
        self,
        variant: FlameVariant,
        palette: &'static Gradient,
    ) -> EffectSlot<N> {
        match self {
            Self::Flame => {
                EffectSlot::Flame(FlameEffect::new(variant).with_palette(palette))
            }
            Self::Ember => EffectSlot::Ember(EmberEffect::new(palette)),
            Self::Off => EffectSlot::Off(OffEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flame => EFFECT_NAME_FLAME,
            Self::Ember => EFFECT_NAME_EMBER,
            Self::Off => EFFECT_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FLAME => Some(Self::Flame),
            EFFECT_NAME_EMBER => Some(Self::Ember),
            EFFECT_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}

impl<const N: usize> EffectSlot<N> {
    /// Render the current effect
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Flame(effect) => effect.render(now, leds),
            Self::Ember(effect) => effect.render(now, leds),
            Self::Off(effect) => effect.render(now, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Flame(effect) => Effect::reset(effect),
            Self::Ember(effect) => Effect::reset(effect),
            Self::Off(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Flame(_) => EffectId::Flame,
            Self::Ember(_) => EffectId::Ember,
            Self::Off(_) => EffectId::Off,
        }
    }
}
