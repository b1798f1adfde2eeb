use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::emit::Format;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG: &str = "enosc_tables.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `-` writes to stdout.
    pub out: PathBuf,
    pub format: Format,
    pub precision: usize,
    pub header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out: PathBuf::from("dynamic_data.cc"),
            format: Format::Cc,
            precision: 8,
            header: "dynamic_data.hh".to_string(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct Overrides {
    /// Output file, `-` for stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// Decimal digits per literal (cc only).
    #[arg(long)]
    pub precision: Option<usize>,
    /// Header included at the top of cc output.
    #[arg(long)]
    pub header: Option<String>,
}

impl Config {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(out) = overrides.out {
            self.out = out;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(header) = overrides.header {
            self.header = header;
        }
        self
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn writes_stdout(&self) -> bool {
        self.out.as_os_str() == "-"
    }
}

/// An explicit path must exist and parse. Without one, [`DEFAULT_CONFIG`]
/// in the working directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => read_config(p),
        None => Ok(load_or_default(Path::new(DEFAULT_CONFIG))),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&content, path)
}

fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}, using defaults");
            Config::default()
        }
    }
}
