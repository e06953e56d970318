//! Frame orchestration: mode intents in, finished frames out.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Gradient, Rgb};
use crate::effect::{EffectId, EffectSlot};
use crate::engine::FlameVariant;
use crate::math8::scale8;
use crate::switch::ModeReceiver;

/// Configuration for the lamp renderer
#[derive(Clone)]
pub struct LampConfig {
    /// Mode to start in before the switch is first polled.
    pub mode: EffectId,
    /// Flame preset used whenever the flame mode is entered.
    pub variant: FlameVariant,
    /// Palette for the flame and ember modes.
    pub palette: &'static Gradient,
    /// Global brightness scalar (0-255) applied to every frame.
    pub brightness: u8,
}

/// Renders the active mode into a frame buffer.
///
/// `MAX_LEDS` sizes the frame buffer and the flame heat field; it is
/// the strip length. The renderer drains pending mode intents before
/// every frame, swaps the effect slot on change, then renders and
/// applies the brightness scalar.
pub struct Renderer<'a, const MAX_LEDS: usize, const MODE_CHANNEL_SIZE: usize> {
    modes: ModeReceiver<'a, MODE_CHANNEL_SIZE>,
    slot: EffectSlot<MAX_LEDS>,
    frame_buffer: [Rgb; MAX_LEDS],
    variant: FlameVariant,
    palette: &'static Gradient,
    brightness: u8,
}

impl<'a, const MAX_LEDS: usize, const MODE_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, MODE_CHANNEL_SIZE>
{
    /// Create a renderer consuming intents from the given receiver.
    pub fn new(modes: ModeReceiver<'a, MODE_CHANNEL_SIZE>, config: &LampConfig) -> Self {
        Self {
            modes,
            slot: config.mode.to_slot(config.variant, config.palette),
            frame_buffer: [Rgb::default(); MAX_LEDS],
            variant: config.variant,
            palette: config.palette,
            brightness: config.brightness,
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per frame
    /// interval.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents();
        self.slot.render(now, &mut self.frame_buffer);
        self.apply_brightness();
        &self.frame_buffer
    }

    /// Mode currently being rendered.
    pub fn mode(&self) -> EffectId {
        self.slot.id()
    }

    /// Drain pending mode intents (non-blocking), keeping the last.
    fn process_intents(&mut self) {
        let mut target = None;
        while let Some(intent) = self.modes.try_receive() {
            target = Some(intent.mode);
        }

        if let Some(mode) = target {
            if mode != self.slot.id() {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer] switching mode to {}", mode.as_str());
                self.slot = mode.to_slot(self.variant, self.palette);
                self.slot.reset();
            }
        }
    }

    fn apply_brightness(&mut self) {
        let brightness = self.brightness;
        if brightness == 255 {
            return;
        }
        if brightness == 0 {
            for pixel in &mut self.frame_buffer {
                *pixel = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }

        for pixel in &mut self.frame_buffer {
            pixel.r = scale8(pixel.r, brightness);
            pixel.g = scale8(pixel.g, brightness);
            pixel.b = scale8(pixel.b, brightness);
        }
    }
}
