// AttitudeWatch - Host Events & Data Types

// ---------------------------------------------------------------------------
// Accelerometer Data (one 3-axis reading, milli-g)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

// ---------------------------------------------------------------------------
// Accelerometer sampling rate
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingRate {
    Hz10,
    Hz25,
    Hz50,
    #[default]
    Hz100,
}

impl SamplingRate {
    pub fn hz(&self) -> u32 {
        match self {
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
        }
    }

    /// Time between two consecutive samples.
    pub fn period_ms(&self) -> u64 {
        1000 / self.hz() as u64
    }
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Select,
    Up,
    Down,
}

impl ButtonId {
    pub const ALL: [ButtonId; 3] = [ButtonId::Select, ButtonId::Up, ButtonId::Down];

    pub fn index(&self) -> usize {
        match self {
            Self::Select => 0,
            Self::Up => 1,
            Self::Down => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

// ---------------------------------------------------------------------------
// Host Events - sent to the UI loop via channel
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// One accelerometer reading from the sensor task.
    Sample(RawSample),
    /// Debounced single click.
    Click(ButtonId),
}
