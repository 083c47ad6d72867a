use crate::models::{BeepCommand, ColorCommand, DeviceState, SongCommand};
use console::Emoji;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Public hostname the device answers on unless the caller overrides it.
pub const DEFAULT_HOST: &str = "vergarigiovanni.altervista.org";

/// Outcome of one fire-and-forget command. The device speaks plain HTTP, so
/// the only failure shapes are a non-200 answer and a transport-level error.
#[derive(Debug)]
pub enum CommandOutcome {
    Success,
    ServerRejected(StatusCode),
    TransportFailure(reqwest::Error),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Outcome of the state query, which also carries the parsed snapshot. An
/// unparseable body counts as a transport failure, same as a cut connection.
#[derive(Debug)]
pub enum StateOutcome {
    Success(DeviceState),
    ServerRejected(StatusCode),
    TransportFailure(reqwest::Error),
}

impl StateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StateOutcome::Success(_))
    }
}

fn device_url(host: &str, endpoint: &str) -> String {
    format!("http://{}/{}", host, endpoint)
}

/// Builds the color control URL. The host only ever lands in the authority
/// component; the query string comes from the command alone.
pub fn build_url(host: &str, command: &ColorCommand) -> String {
    format!("{}?{}", device_url(host, "setLed"), command.query())
}

pub fn beep_url(host: &str, command: &BeepCommand) -> String {
    format!("{}?{}", device_url(host, "beep"), command.query())
}

pub fn play_song_url(host: &str) -> String {
    device_url(host, "playSong")
}

pub fn stop_song_url(host: &str) -> String {
    device_url(host, "stopSong")
}

pub fn state_url(host: &str) -> String {
    device_url(host, "state")
}

fn classify(result: Result<reqwest::blocking::Response, reqwest::Error>) -> CommandOutcome {
    match result {
        Ok(response) => {
            if response.status() == StatusCode::OK {
                CommandOutcome::Success
            } else {
                CommandOutcome::ServerRejected(response.status())
            }
        }
        Err(error) => CommandOutcome::TransportFailure(error),
    }
}

/// Sends one blocking GET to set the LED color. Every failure degrades to a
/// returned outcome; this never panics and never propagates.
pub fn set_led_color(client: &Client, host: &str, command: ColorCommand) -> CommandOutcome {
    classify(client.get(build_url(host, &command)).send())
}

/// Pulses the device buzzer once.
pub fn beep(client: &Client, host: &str, command: BeepCommand) -> CommandOutcome {
    classify(client.get(beep_url(host, &command)).send())
}

/// Posts a melody for the device to play.
pub fn play_song(client: &Client, host: &str, song: &SongCommand) -> CommandOutcome {
    classify(client.post(play_song_url(host)).json(song).send())
}

/// Stops whatever melody the device is playing.
pub fn stop_song(client: &Client, host: &str) -> CommandOutcome {
    classify(client.get(stop_song_url(host)).send())
}

/// Queries the device state and parses the JSON snapshot.
pub fn device_state(client: &Client, host: &str) -> StateOutcome {
    match client.get(state_url(host)).send() {
        Ok(response) => {
            if response.status() != StatusCode::OK {
                return StateOutcome::ServerRejected(response.status());
            }
            match response.json::<DeviceState>() {
                Ok(state) => StateOutcome::Success(state),
                Err(error) => StateOutcome::TransportFailure(error),
            }
        }
        Err(error) => StateOutcome::TransportFailure(error),
    }
}

/// Decides whether a command goes out at all. When API calls are disabled
/// the caller gets the line to print instead of traffic on the wire.
pub fn dry_run_notice(enable_api_calls: bool, url: &str) -> Option<String> {
    if enable_api_calls {
        None
    } else {
        Some(format!("API calls disabled, would request {}", url))
    }
}

fn command_line(success: String, action: &str, outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Success => success,
        CommandOutcome::ServerRejected(status) => {
            format!("Unable to {} (device answered {})", action, status)
        }
        CommandOutcome::TransportFailure(error) => format!("Request failed: {}", error),
    }
}

/// The human-readable line for a color-set outcome, without the emoji marker.
pub fn console_line(command: &ColorCommand, outcome: &CommandOutcome) -> String {
    command_line(
        format!(
            "LED color set to R:{} G:{} B:{}",
            command.red, command.green, command.blue
        ),
        "set the LED color",
        outcome,
    )
}

pub fn beep_line(command: &BeepCommand, outcome: &CommandOutcome) -> String {
    command_line(
        format!("Beep requested: {} ms at duty {}", command.ms, command.duty),
        "sound the buzzer",
        outcome,
    )
}

pub fn song_line(song: &SongCommand, outcome: &CommandOutcome) -> String {
    command_line(
        format!("Song accepted: {} notes", song.melody.len()),
        "play the song",
        outcome,
    )
}

pub fn stop_line(outcome: &CommandOutcome) -> String {
    command_line("Song stopped".to_string(), "stop the song", outcome)
}

pub fn state_line(outcome: &StateOutcome) -> String {
    match outcome {
        StateOutcome::Success(state) => format!(
            "Device at {}: LED R:{} G:{} B:{}, {:.1}°C, {:.1}%RH, light {}%, song playing: {}",
            state.timestamp_utc,
            state.actuators.led.r,
            state.actuators.led.g,
            state.actuators.led.b,
            state.sensors.temperature,
            state.sensors.humidity,
            state.light.percent,
            if state.actuators.buzzer.song_is_playing != 0 {
                "yes"
            } else {
                "no"
            }
        ),
        StateOutcome::ServerRejected(status) => {
            format!("Unable to read the device state (device answered {})", status)
        }
        StateOutcome::TransportFailure(error) => format!("Request failed: {}", error),
    }
}

fn print_marked(ok: bool, line: &str) {
    let marker = if ok {
        Emoji("✅ ", "")
    } else {
        Emoji("❗ ", "")
    };
    println!("{}{}", marker, line);
}

/// Printing adapter over the typed outcome, for callers that only want the
/// original fire-and-forget behavior.
pub fn report(command: &ColorCommand, outcome: &CommandOutcome) {
    print_marked(outcome.is_success(), &console_line(command, outcome));
}

pub fn report_beep(command: &BeepCommand, outcome: &CommandOutcome) {
    print_marked(outcome.is_success(), &beep_line(command, outcome));
}

pub fn report_song(song: &SongCommand, outcome: &CommandOutcome) {
    print_marked(outcome.is_success(), &song_line(song, outcome));
}

pub fn report_stop(outcome: &CommandOutcome) {
    print_marked(outcome.is_success(), &stop_line(outcome));
}

pub fn report_state(outcome: &StateOutcome) {
    print_marked(outcome.is_success(), &state_line(outcome));
}
