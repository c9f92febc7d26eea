//! Diagnostic output configuration.
//!
//! Provides typed configuration for section titles and verbosity gating with a
//! bon builder. Defaults reproduce the standard 60-column title banner.

use bon::bon;

use crate::utils::diagnostic::DEFAULT_VERBOSITY_THRESHOLD;

/// Configuration for a [`DiagnosticContext`](crate::DiagnosticContext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticConfig {
    /// Minimum verbosity at which output is emitted.
    pub threshold: i32,
    /// Width of the top and bottom rules of a title banner.
    pub rule_width: i32,
    /// Number of rule characters before the bracketed title.
    pub title_indent: i32,
    /// Character the rules are drawn with.
    pub rule_char: char,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_VERBOSITY_THRESHOLD, rule_width: 60, title_indent: 25, rule_char: '-' }
    }
}

#[bon]
impl DiagnosticConfig {
    /// Create a diagnostic configuration with builder pattern.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_VERBOSITY_THRESHOLD)] threshold: i32,
        #[builder(default = 60)] rule_width: i32,
        #[builder(default = 25)] title_indent: i32,
        #[builder(default = '-')] rule_char: char,
    ) -> Self {
        Self { threshold, rule_width, title_indent, rule_char }
    }

    /// Whether output at `verbosity` passes the threshold.
    pub fn enabled(&self, verbosity: i32) -> bool {
        verbosity >= self.threshold
    }
}
