//! Desktop preview app for the flamewick fire lamp
//!
//! Renders the LED strip in a window with interactive controls. The
//! three-position selector stands in for the lamp's physical switch and
//! feeds the renderer through the same mode channel the firmware uses.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use flamewick::{
    EffectId, FlameVariant, Instant, LampConfig, ModeChannel, ModeIntent, ModeSender,
    Renderer, color,
};

/// Number of LEDs in the simulated strip (60 on the lamp hardware)
const LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Mode channel size
const MODE_CHANNEL_SIZE: usize = 8;

/// Static mode channel for communication between UI and renderer
static MODE_CHANNEL: ModeChannel<MODE_CHANNEL_SIZE> =
    ModeChannel::<MODE_CHANNEL_SIZE>::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Render as a 1D strip, wrapped to available window width
    Strip,
    /// Render level-by-level, the way the LEDs coil around the lamp shade
    Lamp,
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 480.0])
            .with_title("Flamewick Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "flamewick-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The renderer instance
    renderer: Renderer<'static, LED_COUNT, MODE_CHANNEL_SIZE>,
    /// Mode sender standing in for the physical switch
    mode_sender: ModeSender<'static, MODE_CHANNEL_SIZE>,

    // UI state (tracked to detect changes and send intents)
    /// Currently selected switch position
    mode: EffectId,
    /// Flame preset shown when the lamp is rebuilt
    variant: FlameVariant,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Preview layout
    layout: Layout,
}

impl PreviewApp {
    fn new() -> Self {
        let initial_mode = EffectId::Flame;
        let config = LampConfig {
            mode: initial_mode,
            variant: FlameVariant::Torch,
            palette: &color::BLACK_BODY,
            // Full brightness in the preview; the hardware build scales
            // down to its power budget.
            brightness: 255,
        };

        let renderer = Renderer::<LED_COUNT, MODE_CHANNEL_SIZE>::new(
            MODE_CHANNEL.receiver(),
            &config,
        );

        Self {
            renderer,
            mode_sender: MODE_CHANNEL.sender(),
            mode: initial_mode,
            variant: FlameVariant::Torch,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            layout: Layout::Lamp,
        }
    }

    /// Send a mode change intent, like the hardware switch poller does
    fn send_mode_change(&self, mode: EffectId) {
        let _ = self.mode_sender.try_send(ModeIntent { mode });
    }

    /// Rebuild the renderer (used when the flame variant changes)
    fn rebuild_renderer(&mut self) {
        self.renderer = Renderer::<LED_COUNT, MODE_CHANNEL_SIZE>::new(
            MODE_CHANNEL.receiver(),
            &LampConfig {
                mode: self.mode,
                variant: self.variant,
                palette: &color::BLACK_BODY,
                brightness: 255,
            },
        );
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 =
                delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        // Render the frame using synthetic time
        let now = Instant::from_millis(self.t_ms);
        let frame = self.renderer.render(now).to_vec();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing {
                                "⏸ Pause"
                            } else {
                                "▶ Play"
                            })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }

                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                        ui.label("Layout:");
                        ui.selectable_value(&mut self.layout, Layout::Strip, "strip");
                        ui.selectable_value(&mut self.layout, Layout::Lamp, "lamp");
                    });
                });
                // </PlaybackControls>

                ui.add_space(16.0);

                // <SwitchPanel>
                ui.vertical(|ui| {
                    ui.label("Switch position:");
                    let old_mode = self.mode;
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.mode, EffectId::Flame, "flame");
                        ui.selectable_value(&mut self.mode, EffectId::Ember, "ember");
                        ui.selectable_value(&mut self.mode, EffectId::Off, "off");
                    });
                    if self.mode != old_mode {
                        self.send_mode_change(self.mode);
                    }

                    ui.add_space(4.0);

                    ui.label("Flame preset:");
                    let old_variant = self.variant;
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut self.variant,
                            FlameVariant::Torch,
                            "torch",
                        );
                        ui.selectable_value(
                            &mut self.variant,
                            FlameVariant::Lantern,
                            "lantern",
                        );
                    });
                    if self.variant != old_variant {
                        self.rebuild_renderer();
                    }
                });
                // </SwitchPanel>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            match self.layout {
                Layout::Strip => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let leds_per_row =
                        (available_width / led_pitch).floor().max(1.0) as usize;
                    let rows = LED_COUNT.div_ceil(leds_per_row);
                    #[allow(clippy::cast_precision_loss)]
                    let height = rows as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let row = i / leds_per_row;
                        let col = i % leds_per_row;
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + row as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color =
                            egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 3.0, color);
                    }
                }
                Layout::Lamp => {
                    // One row per level, bottom level at the bottom,
                    // matching how the strip coils up the lamp.
                    let width = match self.variant {
                        FlameVariant::Torch => 8,
                        FlameVariant::Lantern => 7,
                    };
                    let levels = LED_COUNT.div_ceil(width);
                    #[allow(clippy::cast_precision_loss)]
                    let height = levels as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, pixel) in frame.iter().enumerate() {
                        let level = i / width;
                        let col = i % width;
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + (levels - 1 - level) as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        let color =
                            egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                        painter.rect_filled(rect, 3.0, color);
                    }
                }
            }
        });
    }
}
