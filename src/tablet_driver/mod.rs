/// 压感 -> 按键状态
pub mod contact;
/// 数位板坐标 -> 屏幕坐标的映射
pub mod mapping;

pub use contact::{ContactStatus, ContactTracker, Thresholds};
pub use mapping::{PointerPosition, ScalingMode, SurfaceSize, map_position};
