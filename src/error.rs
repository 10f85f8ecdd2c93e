use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombiError {
    // Stored as f64 so the generalized (real-valued) coefficient can report it too
    #[error("subset size {m} exceeds population size {n}")]
    SubsetTooLarge { n: f64, m: f64 },

    #[error("approximation is undefined for an empty population")]
    EmptyPopulation,

    #[error("negative input: n={n}, k={k}")]
    NegativeInput { n: f64, k: f64 },

    #[error("input is not a number")]
    NotANumber,
}

pub type Result<T> = std::result::Result<T, CombiError>;
