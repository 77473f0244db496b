use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height below one.
    #[error("configuration error: maze size {width}x{height} needs both sides of at least 1")]
    Configuration { width: usize, height: usize },
    #[error("invalid algorithm: unknown {kind} algorithm '{name}'")]
    InvalidAlgorithm { kind: AlgorithmKind, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Generation,
    Solving,
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmKind::Generation => write!(f, "generation"),
            AlgorithmKind::Solving => write!(f, "solving"),
        }
    }
}
