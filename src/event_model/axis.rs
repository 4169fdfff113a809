use super::event::Axis;

/// Inclusive bounds the device reports for one absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisExtents {
    pub minimum: i32,
    pub maximum: i32,
}

impl AxisExtents {
    pub fn new(minimum: i32, maximum: i32) -> Self {
        Self { minimum, maximum }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }
}

/// Extents of every tracked axis, read once when the device is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceExtents {
    pub x: AxisExtents,
    pub y: AxisExtents,
    pub pressure: AxisExtents,
}

impl DeviceExtents {
    pub fn get(&self, axis: Axis) -> AxisExtents {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Pressure => self.pressure,
        }
    }
}

/// Latest value seen on each tracked axis.
///
/// Axes that have not been reported yet read as 0. Values persist across
/// sync barriers until the device reports a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisState {
    x: i32,
    y: i32,
    pressure: i32,
}

impl AxisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, axis: Axis, value: i32) {
        match axis {
            // Some touchpads emit a stray ABS_X of 0 mid-stroke. Y never does.
            Axis::X => {
                if value != 0 {
                    self.x = value;
                }
            }
            Axis::Y => self.y = value,
            Axis::Pressure => self.pressure = value,
        }
    }

    /// Snapshot of `(x, y, pressure)`.
    pub fn current(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.pressure)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn pressure(&self) -> i32 {
        self.pressure
    }
}
