use thiserror::Error;

pub const UNNAMED: &str = "<unnamed>";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("no prediction sets supplied")]
    NoModels,
    #[error("empty input: {model}")]
    EmptyInput { model: String },
    #[error("shape mismatch in {model}: {left} values vs {right} values")]
    ShapeMismatch {
        model: String,
        left: usize,
        right: usize,
    },
    #[error("non-finite score in {model} at index {index}")]
    NonFiniteScore { model: String, index: usize },
    #[error("no positive labels in {model}")]
    NoPositives { model: String },
    #[error("no negative labels in {model}")]
    NoNegatives { model: String },
    #[error("undefined weighting: no positive labels across {n_models} prediction sets")]
    UndefinedWeighting { n_models: usize },
    #[error("query {query} outside interpolation domain [{min}, {max}]")]
    OutOfDomain { query: f64, min: f64, max: f64 },
    #[error("x values are neither non-decreasing nor non-increasing")]
    NonMonotonic,
    #[error("at least 2 points are needed to compute an area, got {n}")]
    TooFewPoints { n: usize },
}

impl CurveError {
    /// Attaches a model name to errors raised below the level that knows it.
    pub fn for_model(self, name: &str) -> Self {
        match self {
            CurveError::EmptyInput { .. } => CurveError::EmptyInput {
                model: name.to_string(),
            },
            CurveError::ShapeMismatch { left, right, .. } => CurveError::ShapeMismatch {
                model: name.to_string(),
                left,
                right,
            },
            CurveError::NonFiniteScore { index, .. } => CurveError::NonFiniteScore {
                model: name.to_string(),
                index,
            },
            CurveError::NoPositives { .. } => CurveError::NoPositives {
                model: name.to_string(),
            },
            CurveError::NoNegatives { .. } => CurveError::NoNegatives {
                model: name.to_string(),
            },
            other => other,
        }
    }

    pub(crate) fn empty() -> Self {
        CurveError::EmptyInput {
            model: UNNAMED.to_string(),
        }
    }

    pub(crate) fn mismatch(left: usize, right: usize) -> Self {
        CurveError::ShapeMismatch {
            model: UNNAMED.to_string(),
            left,
            right,
        }
    }
}
