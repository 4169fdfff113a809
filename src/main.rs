use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use touchpad_tablet::config::{Cli, Settings};
use touchpad_tablet::event_dispatcher::Dispatcher;
use touchpad_tablet::input_devices::TouchpadDevice;
use touchpad_tablet::pointer_output::backend_x11::X11Pointer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    tracing_subscriber::fmt()
        .with_max_level(if settings.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let mut device = TouchpadDevice::open(&settings.device, settings.grab)?;
    let extents = device.extents();
    settings.thresholds.validate(&extents.pressure)?;

    let mut pointer = X11Pointer::connect(settings.window).context("X11 setup failed")?;
    info!(
        "bound to window {:#x}, scaling {:?}",
        pointer.target(),
        settings.scaling
    );

    let mut dispatcher = Dispatcher::new(
        extents,
        settings.scaling,
        settings.thresholds,
        settings.button,
    );
    dispatcher.run(device.events(), &mut pointer)?;
    Ok(())
}
