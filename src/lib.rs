/// 触控板事件 -> 光标命令 的分发
pub mod event_dispatcher;

/// 压感判定和坐标映射, 整个项目唯一有逻辑的部分
pub mod tablet_driver;

/// 光标输出接口 (移动, 按键), 目前只有 X11 后端
pub mod pointer_output;

/// 原始输入设备 (evdev)
pub mod input_devices;

/// 事件模型: 原始事件, 坐标轴范围和状态
pub mod event_model;

/// 命令行和配置文件
pub mod config;

pub mod error;

pub use error::{Error, Result};

// 触控板本身只有 ABS_X / ABS_Y / ABS_PRESSURE, 没有笔, 所以"接触"和"点击"都只能靠压感判断
// HACK: 有些触控板会在滑动中途突然报一个 ABS_X = 0, 所以 X 轴的 0 直接丢掉, Y 轴没见过这个问题
