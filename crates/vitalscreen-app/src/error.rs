use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failure while loading or invoking a classifier artifact.
///
/// Load failures are fatal: they surface during startup, before any
/// request is served.
#[derive(Debug)]
pub enum ModelError {
    Read { path: PathBuf, reason: String },
    Parse { path: PathBuf, reason: String },
    Predict { model: String, reason: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::Read { path, reason } => {
                write!(f, "cannot read classifier artifact {}: {}", path.display(), reason)
            }
            ModelError::Parse { path, reason } => {
                write!(f, "classifier artifact {} is corrupt: {}", path.display(), reason)
            }
            ModelError::Predict { model, reason } => {
                write!(f, "{} classifier failed to predict: {}", model, reason)
            }
        }
    }
}

impl Error for ModelError {}

/// Per-submission failure during feature assembly or prediction.
///
/// Always recoverable: the caller turns it into a banner message and the
/// form stays usable for a corrected retry.
#[derive(Debug)]
pub enum PredictError {
    MissingField { field: &'static str },
    InvalidNumber { field: &'static str, value: String },
    UnselectedChoice { field: &'static str },
    Model(ModelError),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PredictError::MissingField { field } => {
                write!(f, "no value was submitted for '{}'", field)
            }
            PredictError::InvalidNumber { field, value } => {
                write!(f, "'{}' is not a valid number for '{}'", value, field)
            }
            PredictError::UnselectedChoice { field } => {
                write!(f, "no selection was made for '{}'", field)
            }
            PredictError::Model(e) => write!(f, "{}", e),
        }
    }
}

impl Error for PredictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictError::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for PredictError {
    fn from(e: ModelError) -> Self {
        PredictError::Model(e)
    }
}
