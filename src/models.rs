use serde::{Deserialize, Serialize};

/// A single color change to push to the device. Values are passed through
/// to the firmware as-is; nothing here clamps them to [0, 255].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCommand {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ColorCommand {
    pub fn new(red: i32, green: i32, blue: i32) -> ColorCommand {
        ColorCommand { red, green, blue }
    }

    /// Renders the query fragment the device endpoint expects.
    pub fn query(&self) -> String {
        format!("r={}&g={}&b={}", self.red, self.green, self.blue)
    }
}

/// One buzzer pulse: duration in milliseconds and PWM duty cycle. Like the
/// color values, both are sent as-is and range-checked by the device.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeepCommand {
    pub ms: i32,
    pub duty: i32,
}

impl BeepCommand {
    pub fn new(ms: i32, duty: i32) -> BeepCommand {
        BeepCommand { ms, duty }
    }

    pub fn query(&self) -> String {
        format!("ms={}&duty={}", self.ms, self.duty)
    }
}

/// One note of a buzzer melody.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub freq: i32,
    pub ms: i32,
}

/// A melody for the device buzzer, posted as a JSON body. `gap_ms` and
/// `duty` mirror the device defaults when not set explicitly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SongCommand {
    pub melody: Vec<Note>,
    pub gap_ms: i32,
    pub duty: i32,
}

impl SongCommand {
    pub fn new(melody: Vec<Note>) -> SongCommand {
        SongCommand {
            melody,
            gap_ms: 20,
            duty: 110,
        }
    }
}

/// Snapshot the device reports from its `state` endpoint.
#[derive(Deserialize, Clone, Debug)]
pub struct DeviceState {
    pub ok: bool,
    pub timestamp_utc: String,
    pub wifi: WifiInfo,
    pub sensors: SensorReadings,
    pub light: LightReading,
    pub actuators: Actuators,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WifiInfo {
    pub ssid: String,
    pub ip: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SensorReadings {
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LightReading {
    pub adc: i32,
    pub percent: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Actuators {
    pub led: LedState,
    pub buzzer: BuzzerState,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LedState {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BuzzerState {
    pub last_beep_ms: i32,
    pub last_beep_duty: i32,
    pub song_is_playing: i32,
}
