use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::event_model::Axis;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to open device {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to init libevdev: {0}")]
    Init(#[source] io::Error),

    #[error("failed to grab device: {0}")]
    Grab(#[source] io::Error),

    #[error("device does not support absolute coordinates and pressure (missing {0:?})")]
    MissingAxis(Axis),

    #[error("device reports a maximum of 0 on the {0:?} axis")]
    ZeroExtent(Axis),

    #[error("failed to read event: {0}")]
    Read(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{name} threshold {value} out of range [{minimum}, {maximum}]")]
    ThresholdOutOfRange {
        name: &'static str,
        value: i32,
        minimum: i32,
        maximum: i32,
    },

    #[error("invalid window id: {0}")]
    InvalidWindow(String),
}

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to connect to display: {0}")]
    Connect(#[from] x11rb::errors::ConnectError),

    #[error("display connection error: {0}")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("failed to get window attributes: {0}")]
    SurfaceQuery(#[source] x11rb::errors::ReplyError),

    #[error("XTEST extension is not available")]
    MissingXTest,

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
