use thiserror::Error;

/// Failures the page widgets can run into while talking to the browser.
///
/// None of these reach the user: callers log them and fall back to defaults.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("the window has no document")]
    NoDocument,
    #[error("local storage is unavailable: {0}")]
    StorageUnavailable(String),
    #[error("failed to read `{key}` from storage: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("value `{value}` stored under `{key}` is not a counter value")]
    CorruptValue { key: String, value: String },
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom: {0}")]
    Dom(String),
    #[error("animation library: {0}")]
    Animation(String),
}

/// Why a raw string could not be read as a counter value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    #[error("`{0}` is not a number")]
    NotNumeric(String),
    #[error("{0} is outside the counter range")]
    OutOfRange(i64),
}
