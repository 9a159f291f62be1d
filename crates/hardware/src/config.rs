//! Simulator configuration.
//!
//! A [`SimConfig`] can be built from defaults, deserialized from a JSON file,
//! and then overridden field by field by the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::common::constants::{BACKING_STORE_FILE, MAX_FRAMES, TLB_ENTRIES};
use crate::common::error::{Result, SimError};

/// Page replacement algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// Evict the frame loaded longest ago.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "FIFO"))]
    Fifo,
    /// Evict the frame read longest ago.
    #[cfg_attr(feature = "cli", value(name = "LRU"))]
    Lru,
    /// Evict the frame whose page is needed furthest in the future.
    #[cfg_attr(feature = "cli", value(name = "OPT"))]
    Opt,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Self::Fifo),
            "LRU" => Ok(Self::Lru),
            "OPT" => Ok(Self::Opt),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Physical frames available, 1..=256.
    pub frames: usize,
    pub policy: PolicyKind,
    pub tlb_entries: usize,
    pub backing_store: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: MAX_FRAMES,
            policy: PolicyKind::Fifo,
            tlb_entries: TLB_ENTRIES,
            backing_store: PathBuf::from(BACKING_STORE_FILE),
        }
    }
}

impl SimConfig {
    /// Parses a JSON config. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 || self.frames > MAX_FRAMES {
            return Err(SimError::InvalidFrameCount(self.frames));
        }
        if self.tlb_entries == 0 {
            return Err(SimError::InvalidTlbSize(self.tlb_entries));
        }
        Ok(())
    }
}
