/// The absolute axes the driver tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Pressure,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Pressure];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// A new absolute value for one of the tracked axes.
    AxisReport { axis: Axis, value: i32 },
    /// End of a device frame; the accumulated axis values are now consistent.
    SyncBarrier,
    /// Keys, untracked axes, misc events.
    Other,
}

impl RawEvent {
    pub fn axis(axis: Axis, value: i32) -> Self {
        Self::AxisReport { axis, value }
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        Self::Other
    }
}
