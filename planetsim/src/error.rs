//! Error types for planetsim.
//!
//! The stepping core never fails; errors only come from the edges:
//! spawning bodies, validating configuration and loading scenario files.

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// A body must have finite, positive mass and radius.
    InvalidBody { mass: f64, radius: f64 },
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// Failed to read a scenario file.
    Io(std::io::Error),
    /// Failed to parse a scenario file.
    Parse(serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidBody { mass, radius } => {
                write!(f, "Invalid body: mass ({}) and radius ({}) must be finite and positive", mass, radius)
            }
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimError::Io(e) => write!(f, "Failed to read scenario file: {}", e),
            SimError::Parse(e) => write!(f, "Failed to parse scenario file: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::Parse(e)
    }
}
