//! Memory image description loaded from TOML.
//!
//! ```toml
//! fill = 0xFF
//! cycles = 32
//!
//! [[segment]]
//! address = 0xFFFE
//! bytes = [0x12, 0x34]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const MEMORY_SIZE: usize = 0x10000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("segment at {address:#06x} with {len} bytes runs past the end of memory")]
    Overflow { address: u16, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    pub address: u16,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Value of every byte no segment covers.
    #[serde(default = "default_fill")]
    pub fill: u8,
    /// Clocks to run when the command line does not say.
    #[serde(default)]
    pub cycles: Option<usize>,
    #[serde(default, rename = "segment")]
    pub segments: Vec<Segment>,
}

fn default_fill() -> u8 {
    0xFF
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reset vector 0x1234 with `BRA *` there, NOPs at 0x1236 and 0xA010.
    pub fn demo() -> Self {
        Self {
            fill: 0xFF,
            cycles: Some(16),
            segments: vec![
                Segment {
                    address: 0xFFFE,
                    bytes: vec![0x12, 0x34],
                },
                Segment {
                    address: 0x1234,
                    bytes: vec![0x20, 0xFE],
                },
                Segment {
                    address: 0x1236,
                    bytes: vec![0x01],
                },
                Segment {
                    address: 0xA010,
                    bytes: vec![0x01],
                },
            ],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for seg in &self.segments {
            if seg.address as usize + seg.bytes.len() > MEMORY_SIZE {
                return Err(ConfigError::Overflow {
                    address: seg.address,
                    len: seg.bytes.len(),
                });
            }
        }
        Ok(())
    }

    /// Flat 64K image with every segment applied in order.
    pub fn image(&self) -> Vec<u8> {
        let mut memory = vec![self.fill; MEMORY_SIZE];
        for seg in &self.segments {
            let start = seg.address as usize;
            let end = (start + seg.bytes.len()).min(MEMORY_SIZE);
            memory[start..end].copy_from_slice(&seg.bytes[..end - start]);
        }
        memory
    }
}
