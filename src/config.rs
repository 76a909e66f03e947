use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_derive::Deserialize;

use crate::error::{Error, Result};
use crate::runs::Validation;

pub const DEFAULT_NAMES: &str = "data/unicode-15.1.0-names.json.gz";
pub const DEFAULT_CONTROL: &str = "data/unicode-15.1.0-names-control.json.gz";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Gzipped run list.
    pub names: PathBuf,
    /// Gzipped control-character aliases, applied as overrides.
    pub control: Option<PathBuf>,
    /// Skip the control-character overrides even if `control` is set.
    pub no_control: bool,
    /// Reject malformed datasets instead of truncating them.
    pub strict: bool,
    /// Pairs decoded between scheduler yields in cooperative mode.
    pub yield_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            names: PathBuf::from(DEFAULT_NAMES),
            control: Some(PathBuf::from(DEFAULT_CONTROL)),
            no_control: false,
            strict: false,
            yield_every: 1,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        fs::read_to_string(path)?.parse()
    }

    /// Control dataset to load, if any.
    pub fn control_path(&self) -> Option<&Path> {
        if self.no_control {
            None
        } else {
            self.control.as_deref()
        }
    }

    pub fn validation(&self) -> Validation {
        if self.strict {
            Validation::Strict
        } else {
            Validation::Lenient
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config> {
        Ok(toml::from_str(s)?)
    }
}
