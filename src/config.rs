use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::input_devices::evdev::DEFAULT_DEVICE;
use crate::pointer_output::Button;
use crate::tablet_driver::{ScalingMode, Thresholds};

#[derive(Debug, Parser)]
#[command(name = "touchpad-tablet", version)]
#[command(about = "Use touchpad as pseudo-tablet on a window")]
#[command(group(ArgGroup::new("scaling").multiple(false)))]
pub struct Cli {
    /// Input device to read [default: /dev/input/event15]
    pub device: Option<PathBuf>,

    /// TOML file with default settings; command line options take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debugging messages
    #[arg(long)]
    pub debug: bool,

    /// How touchpad coordinates are scaled onto the window [default: aspect-fill-x]
    #[arg(long, value_enum, group = "scaling")]
    pub scale: Option<ScalingMode>,

    /// Stretch to fill on both x and y axes
    #[arg(long, group = "scaling")]
    pub scale_full: bool,

    /// Stretch to fill on x axis and maintain aspect ratio
    #[arg(long, group = "scaling")]
    pub scale_aspect_fill_x: bool,

    /// Stretch to fill on y axis and maintain aspect ratio
    #[arg(long, group = "scaling")]
    pub scale_aspect_fill_y: bool,

    /// Disable scaling and use touchpad values directly
    #[arg(long, group = "scaling")]
    pub scale_none: bool,

    /// Pressure threshold to trigger a mouse down event [default: 50]
    #[arg(short, long, value_name = "INTEGER", allow_negative_numbers = true)]
    pub click_threshold: Option<i32>,

    /// Pressure threshold to end a mouse down event [default: 20]
    #[arg(short, long, value_name = "INTEGER", allow_negative_numbers = true)]
    pub release_threshold: Option<i32>,

    /// Pressure threshold to allow movement of cursor [default: 0]
    #[arg(short, long, value_name = "INTEGER", allow_negative_numbers = true)]
    pub movement_threshold: Option<i32>,

    /// Window id to bind to, decimal or 0x hex [default: root window]
    #[arg(short, long, value_name = "WINDOWID", value_parser = parse_window_id)]
    pub window: Option<u32>,

    /// Button to synthesize on contact [default: left]
    #[arg(long, value_enum)]
    pub button: Option<Button>,

    /// Grab the device so nothing else receives its events
    #[arg(long)]
    pub grab: bool,
}

impl Cli {
    pub fn scaling(&self) -> Option<ScalingMode> {
        if self.scale_full {
            Some(ScalingMode::Full)
        } else if self.scale_aspect_fill_x {
            Some(ScalingMode::AspectFillX)
        } else if self.scale_aspect_fill_y {
            Some(ScalingMode::AspectFillY)
        } else if self.scale_none {
            Some(ScalingMode::None)
        } else {
            self.scale
        }
    }
}

pub fn parse_window_id(value: &str) -> Result<u32, ConfigError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidWindow(value.to_string()))
}

/// Settings read from a TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub device: Option<PathBuf>,
    pub window: Option<u32>,
    pub scale: Option<ScalingMode>,
    pub click_threshold: Option<i32>,
    pub release_threshold: Option<i32>,
    pub movement_threshold: Option<i32>,
    pub button: Option<Button>,
    pub grab: Option<bool>,
    pub debug: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Everything the driver needs at startup. Fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub device: PathBuf,
    /// `None` targets the root window.
    pub window: Option<u32>,
    pub scaling: ScalingMode,
    pub thresholds: Thresholds,
    pub button: Button,
    pub grab: bool,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            window: None,
            scaling: ScalingMode::default(),
            thresholds: Thresholds::default(),
            button: Button::default(),
            grab: false,
            debug: false,
        }
    }
}

impl Settings {
    /// Loads the config file named on the command line, if any, and merges it.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Command line beats file, file beats defaults.
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        let thresholds = Thresholds {
            click: cli
                .click_threshold
                .or(file.click_threshold)
                .unwrap_or(defaults.thresholds.click),
            release: cli
                .release_threshold
                .or(file.release_threshold)
                .unwrap_or(defaults.thresholds.release),
            movement: cli
                .movement_threshold
                .or(file.movement_threshold)
                .unwrap_or(defaults.thresholds.movement),
        };

        Self {
            device: cli
                .device
                .clone()
                .or(file.device)
                .unwrap_or(defaults.device),
            window: cli.window.or(file.window).filter(|&id| id != 0),
            scaling: cli.scaling().or(file.scale).unwrap_or(defaults.scaling),
            thresholds,
            button: cli.button.or(file.button).unwrap_or(defaults.button),
            grab: cli.grab || file.grab.unwrap_or(defaults.grab),
            debug: cli.debug || file.debug.unwrap_or(defaults.debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["touchpad-tablet"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn defaults() {
        let settings = Settings::merge(&cli(&[]), FileConfig::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.device, PathBuf::from("/dev/input/event15"));
        assert_eq!(settings.scaling, ScalingMode::AspectFillX);
        assert_eq!(settings.thresholds, Thresholds::default());
        assert_eq!(settings.window, None);
    }

    #[test]
    fn short_options() {
        let settings = Settings::merge(
            &cli(&["-c", "80", "-r", "10", "-m", "5", "-w", "0x1a00007", "/dev/input/event3"]),
            FileConfig::default(),
        );
        assert_eq!(
            settings.thresholds,
            Thresholds {
                click: 80,
                release: 10,
                movement: 5
            }
        );
        assert_eq!(settings.window, Some(0x1a00007));
        assert_eq!(settings.device, PathBuf::from("/dev/input/event3"));
    }

    #[test]
    fn scale_flags() {
        assert_eq!(cli(&["--scale-full"]).scaling(), Some(ScalingMode::Full));
        assert_eq!(cli(&["--scale-none"]).scaling(), Some(ScalingMode::None));
        assert_eq!(
            cli(&["--scale", "aspect-fill-y"]).scaling(),
            Some(ScalingMode::AspectFillY)
        );
        assert_eq!(cli(&[]).scaling(), None);
    }

    #[test]
    fn scale_flags_conflict() {
        assert!(Cli::try_parse_from(["touchpad-tablet", "--scale-full", "--scale-none"]).is_err());
        assert!(Cli::try_parse_from(["touchpad-tablet", "--scale", "full", "--scale-none"]).is_err());
    }

    #[test]
    fn unknown_scale_is_rejected() {
        assert!(Cli::try_parse_from(["touchpad-tablet", "--scale", "diagonal"]).is_err());
    }

    #[test]
    fn negative_threshold_parses() {
        assert_eq!(cli(&["-m", "-1"]).movement_threshold, Some(-1));
    }

    #[test]
    fn window_ids() {
        assert_eq!(parse_window_id("12345").ok(), Some(12345));
        assert_eq!(parse_window_id("0X1F").ok(), Some(0x1f));
        assert!(matches!(
            parse_window_id("window"),
            Err(ConfigError::InvalidWindow(_))
        ));
        let settings = Settings::merge(&cli(&["-w", "0"]), FileConfig::default());
        assert_eq!(settings.window, None);
    }

    #[test]
    fn file_then_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "device = \"/dev/input/event7\"\n\
             scale = \"full\"\n\
             click_threshold = 90\n\
             release_threshold = 30\n\
             window = 0x400001\n\
             button = \"right\"\n\
             debug = true"
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let cli = cli(&["--config", path, "-c", "70"]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.device, PathBuf::from("/dev/input/event7"));
        assert_eq!(settings.scaling, ScalingMode::Full);
        assert_eq!(settings.thresholds.click, 70);
        assert_eq!(settings.thresholds.release, 30);
        assert_eq!(settings.thresholds.movement, 0);
        assert_eq!(settings.window, Some(0x400001));
        assert_eq!(settings.button, Button::Right);
        assert!(settings.debug);
        assert!(!settings.grab);
    }

    #[test]
    fn file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pressure_curve = 2").unwrap();
        assert!(matches!(
            FileConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn file_rejects_unknown_scale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scale = \"stretch\"").unwrap();
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            FileConfig::load(Path::new("/nonexistent/touchpad-tablet.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
