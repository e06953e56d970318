#![no_std]

pub mod color;
pub mod effect;
pub mod engine;
pub mod field;
pub mod frame_scheduler;
pub mod math8;
pub mod renderer;
pub mod switch;

pub use effect::{Effect, EffectId, EffectSlot};
pub use engine::{FlameConfig, FlameEngine, FlameStep, FlameVariant};
pub use field::HeatField;
pub use frame_scheduler::{DEFAULT_FRAME_MS, FrameResult, FrameScheduler};
pub use renderer::{LampConfig, Renderer};
pub use switch::{ModeChannel, ModeIntent, ModeReceiver, ModeSender, ModeSwitch};

pub use color::{Gradient, GradientError, GradientPoint, Rgb, packed, rgb_from_u32};
pub use math8::{Rand8, qadd8, qsub8, scale8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler pushes every pixel of a frame in ascending index
/// order as a packed 24-bit color, then calls [`OutputDriver::flush`]
/// once to latch the frame. Transmission is fire-and-forget; failures
/// are the driver's concern, invisible to this crate.
pub trait OutputDriver {
    /// Stage one pixel. `color` is packed as `0x00RRGGBB`.
    fn set_pixel(&mut self, index: usize, color: u32);

    /// Latch the staged frame onto the strip.
    fn flush(&mut self);
}

/// One digital input line of the physical mode switch.
///
/// Lines are active-low on the lamp hardware; `is_asserted` returns
/// `true` when the line is pulled to its active level. Lines are polled
/// once per frame tick, never interrupt-driven.
pub trait InputLine {
    fn is_asserted(&mut self) -> bool;
}
