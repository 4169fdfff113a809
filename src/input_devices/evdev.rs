use std::fs::File;
use std::io;
use std::path::Path;

use evdev_rs::enums::{EV_ABS, EventCode};
use evdev_rs::{Device, DeviceWrapper, GrabMode, InputEvent, ReadFlag, ReadStatus};
use tracing::{debug, info};

use crate::error::DeviceError;
use crate::event_model::{Axis, AxisExtents, DeviceExtents, RawEvent};

pub const DEFAULT_DEVICE: &str = "/dev/input/event15";

/// An opened touchpad that reports absolute position and pressure.
pub struct TouchpadDevice {
    device: Device,
    extents: DeviceExtents,
}

impl TouchpadDevice {
    pub fn open(path: &Path, grab: bool) -> Result<Self, DeviceError> {
        let file = File::open(path).map_err(|source| DeviceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut device = Device::new_from_file(file).map_err(DeviceError::Init)?;

        info!("input device name: {:?}", device.name().unwrap_or_default());
        info!(
            "input device ID: bus {:#x} vendor {:#x} product {:#x}",
            device.bustype(),
            device.vendor_id(),
            device.product_id()
        );

        for axis in Axis::ALL {
            if !device.has_event_code(&event_code(axis)) {
                return Err(DeviceError::MissingAxis(axis));
            }
        }

        let extents = DeviceExtents {
            x: read_extents(&device, Axis::X)?,
            y: read_extents(&device, Axis::Y)?,
            pressure: read_extents(&device, Axis::Pressure)?,
        };
        for axis in Axis::ALL {
            let e = extents.get(axis);
            debug!("{axis:?} min: {} max: {}", e.minimum, e.maximum);
        }
        for axis in [Axis::X, Axis::Y] {
            if extents.get(axis).maximum == 0 {
                return Err(DeviceError::ZeroExtent(axis));
            }
        }

        if grab {
            device.grab(GrabMode::Grab).map_err(DeviceError::Grab)?;
            debug!("device grabbed");
        }

        Ok(Self { device, extents })
    }

    pub fn extents(&self) -> DeviceExtents {
        self.extents
    }

    /// Blocking stream of events. It ends after the first read error.
    pub fn events(&mut self) -> Events<'_> {
        Events {
            device: &mut self.device,
            finished: false,
        }
    }
}

pub struct Events<'a> {
    device: &'a mut Device,
    finished: bool,
}

impl Iterator for Events<'_> {
    type Item = Result<RawEvent, DeviceError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self
                .device
                .next_event(ReadFlag::NORMAL | ReadFlag::BLOCKING)
            {
                Ok((ReadStatus::Success, event)) => return Some(Ok(RawEvent::from(&event))),
                // resync after dropped events, the next frame carries fresh values
                Ok((ReadStatus::Sync, _)) => continue,
                Err(e) if is_transient(&e) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(DeviceError::Read(e)));
                }
            }
        }
        None
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

fn event_code(axis: Axis) -> EventCode {
    match axis {
        Axis::X => EventCode::EV_ABS(EV_ABS::ABS_X),
        Axis::Y => EventCode::EV_ABS(EV_ABS::ABS_Y),
        Axis::Pressure => EventCode::EV_ABS(EV_ABS::ABS_PRESSURE),
    }
}

fn read_extents(device: &Device, axis: Axis) -> Result<AxisExtents, DeviceError> {
    device
        .abs_info(&event_code(axis))
        .map(|info| AxisExtents::new(info.minimum, info.maximum))
        .ok_or(DeviceError::MissingAxis(axis))
}

impl From<&InputEvent> for RawEvent {
    fn from(event: &InputEvent) -> Self {
        match event.event_code {
            EventCode::EV_ABS(EV_ABS::ABS_X) => RawEvent::axis(Axis::X, event.value),
            EventCode::EV_ABS(EV_ABS::ABS_Y) => RawEvent::axis(Axis::Y, event.value),
            EventCode::EV_ABS(EV_ABS::ABS_PRESSURE) => {
                RawEvent::axis(Axis::Pressure, event.value)
            }
            EventCode::EV_SYN(_) => RawEvent::SyncBarrier,
            _ => RawEvent::Other,
        }
    }
}
