use crate::config::FitMode;

/// Render target the cycler is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Destination rectangle for a slot, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute where a texture of the given size is drawn inside the container.
/// Cover and Contain preserve aspect ratio and center the result; Stretch
/// fills the container exactly.
pub fn fit_rect(tex_width: f32, tex_height: f32, container: Container, mode: FitMode) -> DestRect {
    match mode {
        FitMode::Stretch => DestRect {
            x: 0.0,
            y: 0.0,
            width: container.width,
            height: container.height,
        },
        FitMode::Cover | FitMode::Contain => {
            let scale_x = container.width / tex_width;
            let scale_y = container.height / tex_height;
            let scale = if mode == FitMode::Cover {
                scale_x.max(scale_y)
            } else {
                scale_x.min(scale_y)
            };

            let scaled_width = tex_width * scale;
            let scaled_height = tex_height * scale;

            DestRect {
                x: (container.width - scaled_width) * 0.5,
                y: (container.height - scaled_height) * 0.5,
                width: scaled_width,
                height: scaled_height,
            }
        }
    }
}
