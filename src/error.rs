use std::{error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult};

/// Problems with the options the panel is constructed from.
#[derive(Debug)]
pub enum OptionsError {
    MissingWrapperId,
    UnknownTheme(String),
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWrapperId => {
                writeln!(f, "No container identifier given")?;
                writeln!(f)?;
                writeln!(f, "Pass --wrapper-id or set \"wrapper_id\" in the options file")
            }
            Self::UnknownTheme(name) => {
                write!(f, "Unknown theme '{name}' (expected 'light' or 'dark')")
            }
            Self::Unreadable { path, reason } => {
                write!(f, "Cannot read options file {}: {reason}", path.display())
            }
        }
    }
}

impl StdError for OptionsError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Options(OptionsError),
    /// A severity name or rank outside `Error`..`Debug` / `0..=4`.
    UnknownSeverity(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Options(e) => write!(f, "Options error: {e}"),
            Self::UnknownSeverity(level) => write!(f, "Unknown severity level: {level}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Options(e) => Some(e),
            Self::UnknownSeverity(_) => None,
        }
    }
}

impl From<OptionsError> for Error {
    fn from(e: OptionsError) -> Self {
        Self::Options(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
