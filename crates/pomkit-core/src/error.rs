//! Error types for pomkit-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Variable expansion re-entered a key it was already resolving, or
    /// nested deeper than [`crate::variables::MAX_EXPANSION_DEPTH`].
    #[error("cyclic variable reference: {chain}")]
    CyclicReference { chain: String },

    #[error("expanded value exceeds {limit} bytes")]
    ExpansionTooLarge { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
