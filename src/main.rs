use clap::{Parser, Subcommand};
use console::Emoji;
use led_color_requester::api::{
    beep, beep_url, build_url, device_state, dry_run_notice, play_song, play_song_url, report,
    report_beep, report_song, report_state, report_stop, set_led_color, state_url, stop_song,
    stop_song_url,
};
use led_color_requester::models::{BeepCommand, ColorCommand, Note, SongCommand};
use led_color_requester::settings::{load_settings, SETTINGS_FILE};
use reqwest::blocking::Client;

/// Control a networked LED device over HTTP.
#[derive(Parser)]
#[command(name = "led-device")]
struct Cli {
    /// Device host, overriding the settings file and built-in default
    #[arg(long)]
    host: Option<String>,
    /// Path to the settings file
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Set the LED color
    SetLed {
        /// Red intensity, nominally 0-255 (sent to the device as-is)
        red: i32,
        /// Green intensity, nominally 0-255 (sent to the device as-is)
        green: i32,
        /// Blue intensity, nominally 0-255 (sent to the device as-is)
        blue: i32,
    },
    /// Pulse the buzzer
    Beep {
        /// Pulse length in milliseconds
        ms: i32,
        /// PWM duty cycle
        duty: i32,
    },
    /// Play a melody from a JSON file of {freq, ms} notes
    PlaySong {
        melody_file: String,
        /// Silence between notes in milliseconds
        #[arg(long)]
        gap_ms: Option<i32>,
        /// PWM duty cycle for the whole song
        #[arg(long)]
        duty: Option<i32>,
    },
    /// Stop the melody the device is playing
    StopSong,
    /// Print the device state snapshot
    State,
}

fn print_notice(notice: String) {
    println!("{}{}", Emoji("⚙️ ", ""), notice);
}

fn print_error(line: String) {
    println!("{}{}", Emoji("❗ ", ""), line);
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli.settings) {
        Ok(settings) => settings,
        Err(error) => {
            print_error(error.to_string());
            return;
        }
    };

    let host = settings.resolve_host(cli.host);
    let enabled = settings.enable_api_calls;
    let client = Client::new();

    match cli.command {
        Command::SetLed { red, green, blue } => {
            let command = ColorCommand::new(red, green, blue);
            if let Some(notice) = dry_run_notice(enabled, &build_url(&host, &command)) {
                print_notice(notice);
                return;
            }
            let outcome = set_led_color(&client, &host, command);
            report(&command, &outcome);
        }
        Command::Beep { ms, duty } => {
            let command = BeepCommand::new(ms, duty);
            if let Some(notice) = dry_run_notice(enabled, &beep_url(&host, &command)) {
                print_notice(notice);
                return;
            }
            let outcome = beep(&client, &host, command);
            report_beep(&command, &outcome);
        }
        Command::PlaySong {
            melody_file,
            gap_ms,
            duty,
        } => {
            let contents = match std::fs::read_to_string(&melody_file) {
                Ok(contents) => contents,
                Err(error) => {
                    print_error(format!("Failed to read {}: {}", melody_file, error));
                    return;
                }
            };
            let melody: Vec<Note> = match serde_json::from_str(&contents) {
                Ok(melody) => melody,
                Err(error) => {
                    print_error(format!("Failed to parse {}: {}", melody_file, error));
                    return;
                }
            };

            let mut song = SongCommand::new(melody);
            if let Some(gap_ms) = gap_ms {
                song.gap_ms = gap_ms;
            }
            if let Some(duty) = duty {
                song.duty = duty;
            }

            if let Some(notice) = dry_run_notice(enabled, &play_song_url(&host)) {
                print_notice(notice);
                return;
            }
            let outcome = play_song(&client, &host, &song);
            report_song(&song, &outcome);
        }
        Command::StopSong => {
            if let Some(notice) = dry_run_notice(enabled, &stop_song_url(&host)) {
                print_notice(notice);
                return;
            }
            let outcome = stop_song(&client, &host);
            report_stop(&outcome);
        }
        Command::State => {
            if let Some(notice) = dry_run_notice(enabled, &state_url(&host)) {
                print_notice(notice);
                return;
            }
            let outcome = device_state(&client, &host);
            report_state(&outcome);
        }
    }
}
