#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A selection transition was attempted without its parent level selected.
    #[error("Cannot select {level}: no {parent} is selected")]
    MissingParent {
        level: &'static str,
        parent: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
