use std::f32::consts::PI;

use tracing::{info, warn};

use crate::config::{ConfigError, CyclerConfig};
use crate::fit::Container;
use crate::state::CyclerPhase;

/// One layered visual region. Exactly one slot is fully opaque at rest;
/// during a cross-fade the outgoing and incoming slots hold intermediate
/// opacities that always sum to 1.
#[derive(Debug, Clone)]
pub struct Slot {
    pub opacity: f32,
}

/// Cyclically displays a sequence of images with a simultaneous cross-fade.
///
/// The cycler owns all of its state and knows nothing about windows or
/// textures; the caller drives it with `tick(dt)` and reads back slot
/// opacities to draw. Construction validates the container, `start()` arms
/// the dwell timer, `stop()` freezes it, `dispose()` releases the slots.
#[derive(Debug)]
pub struct Cycler {
    config: CyclerConfig,
    container: Container,
    slots: Vec<Slot>,
    current: usize,
    fading_out: Option<usize>,
    phase: CyclerPhase,
    dwell_timer: f32,
    fade_timer: f32,
    running: bool,
}

impl Cycler {
    pub fn new(container: Container, config: CyclerConfig) -> Result<Self, ConfigError> {
        if !container.width.is_finite()
            || !container.height.is_finite()
            || container.width <= 0.0
            || container.height <= 0.0
        {
            return Err(ConfigError::InvalidContainer {
                width: container.width,
                height: container.height,
            });
        }

        let phase = if config.is_empty() {
            warn!("no image paths provided, cycler will stay idle");
            CyclerPhase::Idle
        } else {
            CyclerPhase::Displaying
        };

        // First image fully visible, all others transparent
        let slots = (0..config.len())
            .map(|i| Slot {
                opacity: if i == 0 { 1.0 } else { 0.0 },
            })
            .collect();

        Ok(Self {
            config,
            container,
            slots,
            current: 0,
            fading_out: None,
            phase,
            dwell_timer: 0.0,
            fade_timer: 0.0,
            running: false,
        })
    }

    /// Arm the dwell timer. No-op on an idle or disposed cycler.
    pub fn start(&mut self) {
        if self.phase == CyclerPhase::Idle || self.phase == CyclerPhase::Disposed {
            return;
        }
        self.running = true;
    }

    /// Freeze the cycle. No advance is pending after this returns; `start()`
    /// resumes from where the timers stood.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Release the slots. Terminal: the cycler cannot be restarted.
    pub fn dispose(&mut self) {
        self.running = false;
        self.slots.clear();
        self.fading_out = None;
        self.phase = CyclerPhase::Disposed;
        info!("cycler disposed");
    }

    /// Advance the state machine by `dt` seconds. Does nothing unless running.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }

        match self.phase {
            CyclerPhase::Idle | CyclerPhase::Disposed => {}
            CyclerPhase::Displaying => {
                self.dwell_timer += dt;
                if self.dwell_timer >= self.config.dwell_secs() {
                    self.begin_advance();
                }
            }
            CyclerPhase::Transitioning => {
                self.fade_timer += dt;
                let fade = self.config.fade_secs();
                let t = (self.fade_timer / fade).min(1.0);
                let alpha = ease_in_out(t);

                // Both fades run over the same interval: this is what makes
                // it a cross-fade rather than a cut
                if let Some(out) = self.fading_out {
                    self.slots[out].opacity = 1.0 - alpha;
                }
                self.slots[self.current].opacity = alpha;

                if self.fade_timer >= fade {
                    self.finish_advance();
                }
            }
        }
    }

    /// Index of the image currently considered "current". Updated at the
    /// moment a transition starts, never mid-fade.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> CyclerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn config(&self) -> &CyclerConfig {
        &self.config
    }

    fn begin_advance(&mut self) {
        // A single image never transitions; the dwell timer still re-arms so
        // the cycle stays uniform
        if self.slots.len() <= 1 {
            self.dwell_timer = 0.0;
            return;
        }

        let next = (self.current + 1) % self.slots.len();
        self.fading_out = Some(self.current);
        self.current = next;
        self.fade_timer = 0.0;
        self.phase = CyclerPhase::Transitioning;

        // Zero fade duration degenerates to an instant swap
        if self.config.fade_secs() == 0.0 {
            self.finish_advance();
        }
    }

    fn finish_advance(&mut self) {
        if let Some(out) = self.fading_out.take() {
            self.slots[out].opacity = 0.0;
        }
        self.slots[self.current].opacity = 1.0;
        self.phase = CyclerPhase::Displaying;
        self.dwell_timer = 0.0;
    }
}

/// Sine ease-in-out, matching the original's transition curve. Monotonic on
/// [0, 1] with f(0) = 0 and f(1) = 1.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}
