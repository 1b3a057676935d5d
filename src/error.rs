use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
///
/// `EmptyDataset`, `SizeMismatch` and `InvalidLearningRate` are input validation
/// failures: the caller has to fix the inputs and call again.
#[derive(Debug)]
pub enum RegressionErr {
    EmptyDataset,
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidLearningRate(f64),
    InvalidConfig(String),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl RegressionErr {
    /// Returns `true` if this error was caused by invalid caller inputs.
    pub fn is_input_validation(&self) -> bool {
        matches!(
            self,
            RegressionErr::EmptyDataset
                | RegressionErr::SizeMismatch { .. }
                | RegressionErr::InvalidLearningRate(_)
                | RegressionErr::InvalidConfig(_)
        )
    }
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegressionErr::EmptyDataset => {
                "The dataset is empty, at least one sample is required".to_string()
            }
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            RegressionErr::InvalidLearningRate(lr) => {
                format!("The learning rate must be strictly positive, got {lr}")
            }
            RegressionErr::InvalidConfig(msg) => format!("invalid config: {msg}"),
            RegressionErr::Io(e) => format!("io error: {e}"),
            RegressionErr::Parse(e) => format!("invalid JSON: {e}"),
        };

        write!(f, "{s}")
    }
}

impl Error for RegressionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegressionErr::Io(e) => Some(e),
            RegressionErr::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegressionErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RegressionErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
