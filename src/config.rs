//! Command line flags and the optional TOML settings file.
//!
//! Flags win over file values; file values win over built-in defaults.
//!
//! ```toml
//! [metrics]
//! dock_height = 4
//!
//! [startup]
//! open = ["about", "projects"]
//!
//! [panels."finder.sidebar"]
//! default = 20
//! min = 14
//! max = 34
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/term-folio.log"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::Level;

use crate::desktop::DesktopOptions;
use crate::error::{FolioError, Result};
use crate::layout::DesktopMetrics;
use crate::panel_split::{PanelBounds, PanelKey};
use crate::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Terminal cells, the unit the console driver reports.
    #[default]
    Cells,
    /// Reference pixel metrics. Only useful for tests and layout debugging.
    Pixels,
}

impl Units {
    pub fn options(self) -> DesktopOptions {
        match self {
            Units::Cells => DesktopOptions::cells(),
            Units::Pixels => DesktopOptions::pixels(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "term-folio", version, about)]
pub struct Cli {
    /// Settings file to read.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<Level>,

    /// Unit system for desktop measurements. `pixels` reproduces the
    /// reference layout for tests and does not fit a real terminal.
    #[arg(long, value_enum)]
    pub units: Option<Units>,
}

/// Optional overrides for [`DesktopMetrics`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsOverrides {
    pub menu_bar_height: Option<u16>,
    pub dock_height: Option<u16>,
    pub title_bar_height: Option<u16>,
    pub handle: Option<u16>,
    pub min_width: Option<u16>,
    pub min_height: Option<u16>,
    pub wide_breakpoint: Option<u16>,
    pub medium_breakpoint: Option<u16>,
    pub narrow_breakpoint: Option<u16>,
    pub offscreen_margin: Option<u16>,
    pub cascade_step: Option<u16>,
}

impl MetricsOverrides {
    fn apply(&self, metrics: &mut DesktopMetrics) {
        let fields = [
            (self.menu_bar_height, &mut metrics.menu_bar_height),
            (self.dock_height, &mut metrics.dock_height),
            (self.title_bar_height, &mut metrics.title_bar_height),
            (self.handle, &mut metrics.handle),
            (self.min_width, &mut metrics.min_width),
            (self.min_height, &mut metrics.min_height),
            (self.wide_breakpoint, &mut metrics.wide_breakpoint),
            (self.medium_breakpoint, &mut metrics.medium_breakpoint),
            (self.narrow_breakpoint, &mut metrics.narrow_breakpoint),
            (self.offscreen_margin, &mut metrics.offscreen_margin),
            (self.cascade_step, &mut metrics.cascade_step),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartupSection {
    pub open: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub units: Option<Units>,
    pub metrics: MetricsOverrides,
    pub startup: StartupSection,
    pub panels: BTreeMap<String, PanelBounds>,
    pub logging: LoggingSection,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub desktop: DesktopOptions,
    pub log_level: Level,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Read the file named by `--config`, if any, and merge it with the flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let units = cli.units.or(file.units).unwrap_or_default();
        let mut desktop = units.options();
        file.metrics.apply(&mut desktop.metrics);
        validate_metrics(&desktop.metrics)?;

        if let Some(names) = &file.startup.open {
            desktop.startup = names
                .iter()
                .map(|name| name.parse::<WindowId>().map_err(FolioError::InvalidConfig))
                .collect::<Result<_>>()?;
        }

        for (name, bounds) in &file.panels {
            let key = PanelKey::lookup(name)
                .ok_or_else(|| FolioError::InvalidConfig(format!("unknown panel `{name}`")))?;
            if bounds.min > bounds.max {
                return Err(FolioError::InvalidConfig(format!(
                    "panel `{name}`: min {} is larger than max {}",
                    bounds.min, bounds.max
                )));
            }
            desktop.panels.insert(key, *bounds);
        }

        let log_level = match (cli.log_level, &file.logging.level) {
            (Some(level), _) => level,
            (None, Some(name)) => name
                .parse::<Level>()
                .map_err(|_| FolioError::InvalidConfig(format!("unknown log level `{name}`")))?,
            (None, None) => Level::INFO,
        };
        let log_file = cli.log_file.clone().or(file.logging.file);

        Ok(Self {
            desktop,
            log_level,
            log_file,
        })
    }
}

fn validate_metrics(metrics: &DesktopMetrics) -> Result<()> {
    if metrics.min_width == 0 || metrics.min_height == 0 {
        return Err(FolioError::InvalidConfig(
            "minimum window size must be non-zero".to_string(),
        ));
    }
    if metrics.narrow_breakpoint > metrics.medium_breakpoint
        || metrics.medium_breakpoint > metrics.wide_breakpoint
    {
        return Err(FolioError::InvalidConfig(
            "breakpoints must satisfy narrow <= medium <= wide".to_string(),
        ));
    }
    Ok(())
}
