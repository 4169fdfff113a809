use clap::ValueEnum;
use serde::Deserialize;

use crate::event_model::AxisExtents;

/// How device coordinates are stretched onto the target surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingMode {
    /// Stretch each axis independently to fill the surface.
    Full,
    /// Fill the surface width and keep the device aspect ratio.
    #[default]
    AspectFillX,
    /// Fill the surface height and keep the device aspect ratio.
    AspectFillY,
    /// Use device units as pixels.
    None,
}

/// Pixel size of the target surface at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Surface-relative pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Maps a device position onto `surface`.
///
/// Division truncates toward zero. Both extents must have a non-zero maximum,
/// which the device adapter checks at startup.
pub fn map_position(
    x: i32,
    y: i32,
    x_extent: &AxisExtents,
    y_extent: &AxisExtents,
    surface: SurfaceSize,
    mode: ScalingMode,
) -> PointerPosition {
    let width = i64::from(surface.width);
    let height = i64::from(surface.height);
    let x_max = i64::from(x_extent.maximum);
    let y_max = i64::from(y_extent.maximum);

    let (num_x, den_x, num_y, den_y) = match mode {
        ScalingMode::Full => (width, x_max, height, y_max),
        ScalingMode::AspectFillX => (width, x_max, width, x_max),
        ScalingMode::AspectFillY => (height, y_max, height, y_max),
        ScalingMode::None => return PointerPosition { x, y },
    };

    PointerPosition {
        x: scale(x, num_x, den_x),
        y: scale(y, num_y, den_y),
    }
}

fn scale(value: i32, num: i64, den: i64) -> i32 {
    let scaled = i64::from(value) * num / den;
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
