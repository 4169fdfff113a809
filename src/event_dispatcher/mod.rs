use tracing::trace;

use crate::error::{DeviceError, DisplayError, Error};
use crate::event_model::{AxisState, DeviceExtents, RawEvent};
use crate::pointer_output::{Button, PointerSink};
use crate::tablet_driver::{ContactStatus, ContactTracker, ScalingMode, Thresholds, map_position};

/// Turns device events into pointer commands.
///
/// Axis reports only update state. On each sync barrier the pointer is moved
/// (if pressure allows), the button state is sent (if pressure is outside the
/// hysteresis band), and the sink is flushed.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    axes: AxisState,
    contact: ContactTracker,
    extents: DeviceExtents,
    mode: ScalingMode,
    button: Button,
}

impl Dispatcher {
    pub fn new(
        extents: DeviceExtents,
        mode: ScalingMode,
        thresholds: Thresholds,
        button: Button,
    ) -> Self {
        Self {
            axes: AxisState::new(),
            contact: ContactTracker::new(thresholds),
            extents,
            mode,
            button,
        }
    }

    pub fn axes(&self) -> &AxisState {
        &self.axes
    }

    pub fn contact_status(&self) -> ContactStatus {
        self.contact.status()
    }

    pub fn dispatch<S: PointerSink>(
        &mut self,
        event: RawEvent,
        sink: &mut S,
    ) -> Result<(), DisplayError> {
        match event {
            RawEvent::AxisReport { axis, value } => self.axes.report(axis, value),
            RawEvent::SyncBarrier => self.sync(sink)?,
            RawEvent::Other => {}
        }
        Ok(())
    }

    fn sync<S: PointerSink>(&mut self, sink: &mut S) -> Result<(), DisplayError> {
        let (x, y, pressure) = self.axes.current();

        if self.contact.thresholds().allows_movement(pressure) {
            let surface = sink.surface_size()?;
            let position = map_position(x, y, &self.extents.x, &self.extents.y, surface, self.mode);
            trace!(x, y, pressure, ?position, "warp");
            sink.warp_pointer(position)?;
        }

        if let Some(status) = self.contact.update(pressure) {
            trace!(pressure, ?status, "button");
            sink.set_button(self.button, status.is_pressed())?;
        }

        sink.flush()
    }

    /// Dispatches every event until the source ends or something fails.
    pub fn run<I, S>(&mut self, events: I, sink: &mut S) -> Result<(), Error>
    where
        I: IntoIterator<Item = Result<RawEvent, DeviceError>>,
        S: PointerSink,
    {
        for event in events {
            self.dispatch(event?, sink)?;
        }
        Ok(())
    }
}
