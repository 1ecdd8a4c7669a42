use thiserror::Error;

/// Errors surfaced by terrain generation.
///
/// The simulation loop itself is infallible: every runtime anomaly
/// (out-of-range gradient sample, missed ground contact) is handled locally
/// by clamping or recovery, never by aborting a tick.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// Grid too small for border-aware gradient sampling.
    #[error("terrain grid {width}x{depth} is too small; both dimensions must be >= 3")]
    InvalidDimensions { width: usize, depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_names_dimensions() {
        let err = TerrainError::InvalidDimensions { width: 2, depth: 9 };
        assert!(err.to_string().contains("2x9"));
    }
}
