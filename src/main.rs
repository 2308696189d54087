use std::io;

use clap::Parser;

use term_folio::config::{Cli, Settings};
use term_folio::constants::POLL_INTERVAL;
use term_folio::desktop::Desktop;
use term_folio::drivers::OutputDriver;
use term_folio::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_folio::runner::{SystemBrowser, run_desktop};
use term_folio::tracing_sub;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    tracing_sub::init(settings.log_level, settings.log_file.as_deref())?;

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let viewport = output.size()?;
    let mut desktop = Desktop::new(viewport, settings.desktop);

    let result = run_desktop(
        ConsoleInputDriver::new(),
        &mut output,
        &mut desktop,
        POLL_INTERVAL,
        &mut SystemBrowser,
    );

    output.exit()?;
    if let Err(err) = &result {
        tracing::error!(%err, "desktop loop failed");
    }
    result
}
