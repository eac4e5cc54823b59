//! Console formatter
//!
//! Ensures consistent output across the binary.

use console::style;

use super::OutputConfig;

/// Formatter for CLI output
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    /// Check if colors are enabled
    ///
    /// `console` still drops styling when the stream is not a terminal.
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color
    }

    /// Print a line of text to stdout (respects quiet mode)
    pub fn println(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        println!("{message}");
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render_error(message));
    }

    fn render_error(&self, message: &str) -> String {
        if self.colors_enabled() {
            style(message).red().for_stderr().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_default() {
        let formatter = Formatter::default();
        assert!(!formatter.is_quiet());
        assert!(formatter.colors_enabled());
    }

    #[test]
    fn test_formatter_no_color() {
        let config = OutputConfig {
            no_color: true,
            ..Default::default()
        };
        let formatter = Formatter::new(config);
        assert!(!formatter.colors_enabled());
        assert_eq!(
            formatter.render_error("File not found: x.csv"),
            "File not found: x.csv"
        );
    }

    #[test]
    fn test_formatter_quiet() {
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        let formatter = Formatter::new(config);
        assert!(formatter.is_quiet());
    }
}
