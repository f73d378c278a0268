use thiserror::Error;

/// Errors reported by the differentiation driver.
///
/// Numeric domain problems (division by zero, logarithm of a non-positive
/// base) are not represented here: they propagate as infinities or NaN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A derivative order other than the supported one was requested.
    #[error("unsupported derivative order {requested} (only order {supported} is supported)")]
    UnsupportedOrder {
        /// Order the caller asked for.
        requested: u32,
        /// Order the driver implements.
        supported: u32,
    },
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
