use std::{error::Error, fmt};

use crate::config::config_errors::ConfigErrors;
use crate::models::segment::SegmentKind;

#[derive(Debug)]
pub enum SizingErrors {
    UnknownArchitecture(String),
    PowertrainNotSet,
    InvalidHybridization { segment: SegmentKind, value: f64 },
    Config(ConfigErrors),
}

impl fmt::Display for SizingErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingErrors::UnknownArchitecture(name) => {
                write!(f, "Unknown powertrain architecture '{}'", name)
            }
            SizingErrors::PowertrainNotSet => {
                write!(f, "Powertrain must be selected before sizing")
            }
            SizingErrors::InvalidHybridization { segment, value } => {
                write!(
                    f,
                    "Hybridization for {} must lie in [0, 1], got {}",
                    segment, value
                )
            }
            SizingErrors::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl Error for SizingErrors {}

impl From<ConfigErrors> for SizingErrors {
    fn from(err: ConfigErrors) -> Self {
        SizingErrors::Config(err)
    }
}
