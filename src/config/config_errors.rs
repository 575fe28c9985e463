use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ConfigErrors {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    MissingSection(String),
    UnknownSegment(String),
    InvalidValue(String, String),
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrors::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigErrors::JsonError(e) => write!(f, "JSON parsing error: {}", e),
            ConfigErrors::MissingSection(section) => {
                write!(f, "Missing configuration section '{}'", section)
            }
            ConfigErrors::UnknownSegment(name) => {
                write!(f, "Unknown mission segment '{}'", name)
            }
            ConfigErrors::InvalidValue(field, value) => {
                write!(f, "Invalid value '{}' for '{}'", value, field)
            }
        }
    }
}

impl Error for ConfigErrors {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for ConfigErrors {
    fn from(err: io::Error) -> Self {
        ConfigErrors::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigErrors {
    fn from(err: serde_json::Error) -> Self {
        ConfigErrors::JsonError(err)
    }
}
