//! Search configuration.

/// Configuration parameters for run search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of runs returned per search window.
    pub window_size: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { window_size: 4 }
    }
}
