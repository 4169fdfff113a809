/// `/dev/input/event*` 设备, 通过 libevdev 读取
pub mod evdev;

pub use evdev::{Events, TouchpadDevice};
