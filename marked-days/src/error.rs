use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The day does not exist in the given month, or the month does not exist.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The input could not be read as a `YYYY-MM-DD` date.
    Parse(chrono::ParseError),
}

impl From<chrono::ParseError> for Error {
    fn from(chrono_err: chrono::ParseError) -> Self {
        Self::Parse(chrono_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid date")
            }
            Self::Parse(chrono_err) => write!(f, "could not parse date: {chrono_err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { .. } => None,
            Self::Parse(chrono_err) => Some(chrono_err),
        }
    }
}
