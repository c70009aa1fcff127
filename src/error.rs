use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppearanceError {
    /// The accessor was called without an active [`crate::AppearanceProvider`].
    #[error("use_appearance must be called inside an AppearanceProvider")]
    OutsideProvider,

    #[error("could not parse appearance configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
