use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

mod config;
mod constants;
mod cycler;
mod fit;
mod state;
mod texture_loader;

use crate::config::{CyclerConfig, FitMode};
use crate::constants::*;
use crate::cycler::Cycler;
use crate::fit::{Container, DestRect, fit_rect};
use crate::texture_loader::{load_texture_with_exif_rotation, scan_image_dir};

/// Cross-fading background image cycler.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory containing the images to cycle
    image_dir: PathBuf,

    /// Cross-fade duration in milliseconds
    #[arg(long, default_value_t = DEFAULT_FADE_MS)]
    fade_ms: f64,

    /// Time each image stays fully visible, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DWELL_MS)]
    dwell_ms: f64,

    /// How images are scaled to the window
    #[arg(long, value_enum, default_value_t = FitMode::Cover)]
    fit: FitMode,

    /// Shuffle the cycle order once at startup
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    // --- Gather the cycle order ---
    let mut paths = scan_image_dir(&cli.image_dir)?;
    if cli.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!(
        count = paths.len(),
        dir = %cli.image_dir.display(),
        "scanned image directory"
    );

    let config = CyclerConfig::new(
        paths,
        (cli.fade_ms / 1000.0) as f32,
        (cli.dwell_ms / 1000.0) as f32,
        cli.fit,
    )
    .context("invalid cycler configuration")?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Background Cycler")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Preload every image up front so cycling never blocks on a load ---
    let mut textures: Vec<Option<Texture2D>> = Vec::with_capacity(config.len());
    for path in config.images() {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(Some(texture)),
            Err(e) => {
                warn!("skipping {}: {e:#}", path.display());
                textures.push(None); // its slot renders empty during its turn
            }
        }
    }

    let container = Container::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
    let mut cycler = Cycler::new(container, config).context("failed to construct cycler")?;
    cycler.start();

    // --- Main loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if cycler.is_running() {
                cycler.stop();
                info!("paused");
            } else {
                cycler.start();
                info!("resumed");
            }
        }

        cycler.tick(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        for (slot, texture) in cycler.slots().iter().zip(textures.iter()) {
            if slot.opacity <= 0.0 {
                continue;
            }
            let Some(texture) = texture else {
                continue; // failed preload, nothing to draw for this turn
            };
            let rect = fit_rect(
                texture.width() as f32,
                texture.height() as f32,
                cycler.container(),
                cycler.config().fit(),
            );
            draw_slot(&mut d, texture, rect, slot.opacity);
        }
    }

    cycler.dispose();
    Ok(())
}

fn draw_slot(d: &mut RaylibDrawHandle, texture: &Texture2D, rect: DestRect, opacity: f32) {
    let tint = Color::new(255, 255, 255, (opacity * 255.0).round() as u8);
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        Rectangle::new(rect.x, rect.y, rect.width, rect.height),
        Vector2::new(0.0, 0.0),
        0.0,
        tint,
    );
}
