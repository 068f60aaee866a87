/// Ways an input distribution can be invalid. Every variant is detected
/// synchronously during table construction; nothing fails after build.
#[derive(Debug, Clone, PartialEq)]
pub enum VoseError {
    Empty,
    Negative { index: usize, value: f64 },
    NotNormalized { sum: f64 },
}

impl std::fmt::Display for VoseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoseError::Empty => write!(f, "distribution has no items"),
            VoseError::Negative { index, value } => {
                write!(
                    f,
                    "distribution has a negative probability at position {index}: {value}"
                )
            }
            VoseError::NotNormalized { sum } => {
                write!(f, "distribution probabilities sum to {sum}, not 1")
            }
        }
    }
}

impl std::error::Error for VoseError {}
