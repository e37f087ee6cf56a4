use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use crate::config::{ConfigError, NodeRef};

/// Where a [`RenderLogger`](super::RenderLogger) sends formatted lines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RenderLogSink {
    #[default]
    Stdout,
    File,
    /// In-memory only; nothing is printed.
    RingBuffer,
}

impl FromStr for RenderLogSink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "file" => Ok(Self::File),
            "ring" | "ring-buffer" | "ring_buffer" => Ok(Self::RingBuffer),
            other => Err(other.to_owned()),
        }
    }
}

/// Verbosity of a render log entry, and the threshold a logger accepts.
///
/// Higher values are chattier. An entry passes when `entry <= threshold`
/// and the threshold is not `Off`; an `Off` threshold silences the logger.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RenderLogLevel {
    Off = 0,
    /// Initialization, resize, recreation.
    #[default]
    Info = 1,
    /// Per-frame commands (draw, present).
    Verbose = 2,
}

impl RenderLogLevel {
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            RenderLogLevel::Info => "[INFO]",
            _ => "[CMD]",
        }
    }
}

impl fmt::Display for RenderLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderLogLevel::Off => "off",
            RenderLogLevel::Info => "info",
            RenderLogLevel::Verbose => "verbose",
        })
    }
}

impl FromStr for RenderLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" | "0" => Ok(Self::Off),
            "info" | "1" => Ok(Self::Info),
            "verbose" | "cmd" | "2" => Ok(Self::Verbose),
            other => Err(other.to_owned()),
        }
    }
}

/// Render logger options.
///
/// `sink_target` is only read for [`RenderLogSink::File`]. A non-zero
/// `ring_capacity` allocates an in-memory ring regardless of the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLoggerConfig {
    pub sink: RenderLogSink,
    pub sink_target: Option<PathBuf>,
    pub ring_capacity: usize,
    pub level: RenderLogLevel,
    /// Master switch; `false` behaves like `level = Off`.
    pub enabled: bool,
}

impl Default for RenderLoggerConfig {
    fn default() -> Self {
        Self {
            sink: RenderLogSink::Stdout,
            sink_target: None,
            ring_capacity: 0,
            level: RenderLogLevel::Info,
            enabled: true,
        }
    }
}

impl RenderLoggerConfig {
    /// Reads `sink_type`, `sink_target`, `ring_capacity`, `level` and `enabled`
    /// from a config map. Missing keys keep their defaults.
    pub fn from_node(node: NodeRef<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            sink: node.parse_key("sink_type")?.unwrap_or(defaults.sink),
            sink_target: node.parse_key("sink_target")?,
            ring_capacity: node.parse_key("ring_capacity")?.unwrap_or(defaults.ring_capacity),
            level: node.parse_key("level")?.unwrap_or(defaults.level),
            enabled: node.parse_key("enabled")?.unwrap_or(defaults.enabled),
        })
    }

    /// Threshold after applying the master switch.
    #[inline]
    pub fn effective_level(&self) -> RenderLogLevel {
        if self.enabled { self.level } else { RenderLogLevel::Off }
    }
}
