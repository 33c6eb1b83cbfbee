use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Coarse classification of a `NetworkError`.
///
/// - `Configuration` — bad or missing configuration, preloaded weights that do
///   not fit the configured topology, or training a run-only network.
/// - `Validation`    — an input or target vector that does not match the
///   configured layer widths.
/// - `Index`         — a weight address outside the topology.
/// - `Io`            — reading or writing a file failed, or its JSON was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Index,
    Io,
}

#[derive(Debug)]
pub enum NetworkError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The configuration document itself could not be parsed.
    ConfigParse(serde_json::Error),
    /// A configuration field holds a value outside its allowed range.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    TooFewLayers {
        got: usize,
    },
    EmptyLayer {
        layer: usize,
    },
    InvalidWeightRange {
        min: f64,
        max: f64,
    },
    LayerSizesMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    WeightShapeMismatch {
        layer: usize,
        expected: (usize, usize),
        got: (usize, usize),
    },
    MalformedMatrix {
        layer: usize,
    },
    TrainingInRunMode,
    MissingThetas,
    /// A trace whose layer widths do not match the topology it is used with.
    TraceShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    InputLength {
        example: usize,
        expected: usize,
        got: usize,
    },
    TargetLength {
        example: usize,
        expected: usize,
        got: usize,
    },
    ExampleCountMismatch {
        inputs: usize,
        targets: usize,
    },
    MissingTargets,
    EmptyTrainingSet,
    WeightIndex {
        layer: usize,
        from: usize,
        to: usize,
    },
}

impl NetworkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::Io(_) | NetworkError::Json(_) => ErrorKind::Io,
            NetworkError::InputLength { .. }
            | NetworkError::TargetLength { .. }
            | NetworkError::ExampleCountMismatch { .. }
            | NetworkError::MissingTargets
            | NetworkError::EmptyTrainingSet => ErrorKind::Validation,
            NetworkError::WeightIndex { .. } => ErrorKind::Index,
            NetworkError::ConfigParse(_)
            | NetworkError::InvalidConfig { .. }
            | NetworkError::TooFewLayers { .. }
            | NetworkError::EmptyLayer { .. }
            | NetworkError::InvalidWeightRange { .. }
            | NetworkError::LayerSizesMismatch { .. }
            | NetworkError::WeightShapeMismatch { .. }
            | NetworkError::MalformedMatrix { .. }
            | NetworkError::TrainingInRunMode
            | NetworkError::MissingThetas
            | NetworkError::TraceShapeMismatch { .. } => ErrorKind::Configuration,
        }
    }

    /// Re-labels a per-vector validation error with its position in a dataset.
    pub(crate) fn at_example(self, index: usize) -> Self {
        match self {
            NetworkError::InputLength { expected, got, .. } => NetworkError::InputLength {
                example: index,
                expected,
                got,
            },
            NetworkError::TargetLength { expected, got, .. } => NetworkError::TargetLength {
                example: index,
                expected,
                got,
            },
            other => other,
        }
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        NetworkError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Io(e) => write!(f, "io error: {e}"),
            NetworkError::Json(e) => write!(f, "json error: {e}"),
            NetworkError::ConfigParse(e) => write!(f, "malformed configuration: {e}"),
            NetworkError::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration field `{field}`: {reason}")
            }
            NetworkError::TooFewLayers { got } => write!(
                f,
                "a network needs at least an input and an output layer, got {got} layer size(s)"
            ),
            NetworkError::EmptyLayer { layer } => write!(f, "layer {layer} has no units"),
            NetworkError::InvalidWeightRange { min, max } => write!(
                f,
                "random weight range [{min}, {max}] is empty or too wide to sample"
            ),
            NetworkError::LayerSizesMismatch { expected, got } => write!(
                f,
                "preloaded weights describe layers {got:?}, configured topology is {expected:?}"
            ),
            NetworkError::WeightShapeMismatch {
                layer,
                expected,
                got,
            } => write!(
                f,
                "weight matrix {layer} is {}x{}, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
            NetworkError::MalformedMatrix { layer } => write!(
                f,
                "weight matrix {layer} has rows or columns that disagree with its declared shape"
            ),
            NetworkError::TrainingInRunMode => {
                write!(f, "training requested on a network configured for run mode")
            }
            NetworkError::MissingThetas => write!(
                f,
                "backward pass needs a trace recorded in training mode"
            ),
            NetworkError::TraceShapeMismatch { expected, got } => write!(
                f,
                "trace has layer widths {got:?}, topology expects {expected:?}"
            ),
            NetworkError::InputLength {
                example,
                expected,
                got,
            } => write!(
                f,
                "input {example} has {got} value(s), expected {expected}"
            ),
            NetworkError::TargetLength {
                example,
                expected,
                got,
            } => write!(
                f,
                "target {example} has {got} value(s), expected {expected}"
            ),
            NetworkError::ExampleCountMismatch { inputs, targets } => write!(
                f,
                "dataset has {inputs} input(s) but {targets} target(s)"
            ),
            NetworkError::MissingTargets => write!(f, "training requires target vectors"),
            NetworkError::EmptyTrainingSet => write!(f, "training set is empty"),
            NetworkError::WeightIndex { layer, from, to } => write!(
                f,
                "weight index out of range: layer {layer}, from {from}, to {to}"
            ),
        }
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkError::Io(e) => Some(e),
            NetworkError::Json(e) | NetworkError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NetworkError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
