use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidCountryCode { input: String },
    UnknownCarrier { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidCountryCode { input } => {
                write!(f, "invalid country code: {input} (expected two letters)")
            }
            Self::UnknownCarrier { input } => write!(f, "unknown carrier: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
