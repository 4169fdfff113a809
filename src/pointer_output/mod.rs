use clap::ValueEnum;
use num_enum::IntoPrimitive;
use serde::Deserialize;

use crate::error::DisplayError;
use crate::tablet_driver::{PointerPosition, SurfaceSize};

/// X11 后端, 基于 `XTEST` 扩展合成按键, `WarpPointer` 移动光标
pub mod backend_x11;

/// Pointer button, numbered the way X11 numbers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IntoPrimitive, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Button {
    #[default]
    Left = 1,
    Middle = 2,
    Right = 3,
}

/// Where pointer commands end up.
///
/// An implementation is bound to one target surface. Commands may be
/// buffered until [`PointerSink::flush`].
pub trait PointerSink {
    /// Current size of the target surface. Not cached.
    fn surface_size(&mut self) -> Result<SurfaceSize, DisplayError>;

    /// Moves the pointer to a position relative to the target surface.
    fn warp_pointer(&mut self, position: PointerPosition) -> Result<(), DisplayError>;

    fn set_button(&mut self, button: Button, pressed: bool) -> Result<(), DisplayError>;

    fn flush(&mut self) -> Result<(), DisplayError>;
}

impl<T: PointerSink + ?Sized> PointerSink for &mut T {
    fn surface_size(&mut self) -> Result<SurfaceSize, DisplayError> {
        (**self).surface_size()
    }

    fn warp_pointer(&mut self, position: PointerPosition) -> Result<(), DisplayError> {
        (**self).warp_pointer(position)
    }

    fn set_button(&mut self, button: Button, pressed: bool) -> Result<(), DisplayError> {
        (**self).set_button(button, pressed)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_use_x11_numbering() {
        assert_eq!(u8::from(Button::Left), 1);
        assert_eq!(u8::from(Button::Middle), 2);
        assert_eq!(u8::from(Button::Right), 3);
        assert_eq!(Button::default(), Button::Left);
    }
}
