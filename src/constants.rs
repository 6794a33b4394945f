pub const WINDOW_WIDTH: i32 = 1280;           // Window width (pixels)
pub const WINDOW_HEIGHT: i32 = 720;           // Window height (pixels)
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_FADE_MS: f64 = 1500.0;      // Cross-fade duration (milliseconds)
pub const DEFAULT_DWELL_MS: f64 = 6000.0;     // Time each image stays fully visible (milliseconds)
