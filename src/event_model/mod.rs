/// 设备事件的抽象形态
pub mod event;
/// 绝对坐标轴的范围和最新取值
pub mod axis;

pub use axis::{AxisExtents, AxisState, DeviceExtents};
pub use event::{Axis, RawEvent};
