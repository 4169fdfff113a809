use tracing::debug;
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::xproto::{self, ConnectionExt as _, Window};
use x11rb::protocol::xtest::{self, ConnectionExt as _};
use x11rb::rust_connection::RustConnection;

use super::{Button, PointerSink};
use crate::error::DisplayError;
use crate::tablet_driver::{PointerPosition, SurfaceSize};

/// Pointer output on an X server, bound to one window.
pub struct X11Pointer {
    conn: RustConnection,
    root: Window,
    target: Window,
}

impl X11Pointer {
    /// Connects to `$DISPLAY`. `window` of `None` or 0 targets the root window.
    pub fn connect(window: Option<u32>) -> Result<Self, DisplayError> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| DisplayError::Other(format!("screen {screen_num} does not exist")))?;
        debug!("root window id: {root:#x}");

        if conn
            .extension_information(xtest::X11_EXTENSION_NAME)?
            .is_none()
        {
            return Err(DisplayError::MissingXTest);
        }

        let target = window.filter(|&id| id != 0).unwrap_or(root);
        debug!("target window id: {target:#x}");

        Ok(Self { conn, root, target })
    }

    pub fn target(&self) -> Window {
        self.target
    }
}

impl PointerSink for X11Pointer {
    fn surface_size(&mut self) -> Result<SurfaceSize, DisplayError> {
        let geometry = self
            .conn
            .get_geometry(self.target)?
            .reply()
            .map_err(DisplayError::SurfaceQuery)?;
        debug!(
            width = geometry.width,
            height = geometry.height,
            "target window size"
        );
        Ok(SurfaceSize::new(
            u32::from(geometry.width),
            u32::from(geometry.height),
        ))
    }

    fn warp_pointer(&mut self, position: PointerPosition) -> Result<(), DisplayError> {
        self.conn
            .warp_pointer(
                x11rb::NONE,
                self.target,
                0,
                0,
                0,
                0,
                saturate(position.x),
                saturate(position.y),
            )?
            .ignore_error();
        Ok(())
    }

    fn set_button(&mut self, button: Button, pressed: bool) -> Result<(), DisplayError> {
        let kind = if pressed {
            xproto::BUTTON_PRESS_EVENT
        } else {
            xproto::BUTTON_RELEASE_EVENT
        };
        self.conn
            .xtest_fake_input(kind, button.into(), x11rb::CURRENT_TIME, self.root, 0, 0, 0)?
            .ignore_error();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.conn.flush()?;
        Ok(())
    }
}

/// Core protocol coordinates are 16 bit.
fn saturate(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
