// Output formatting and styling

use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Plain output, for tests and pipes
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format a section header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().underline().to_string()
        } else {
            title.to_string()
        }
    }
}

/// Print error message to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let style = OutputStyle::plain();
        assert_eq!(style.success("done"), "✓ done");
        assert_eq!(style.warning("careful"), "⚠ careful");
        assert_eq!(style.error("broken"), "✗ broken");
        assert_eq!(style.header("Plugins"), "Plugins");
    }
}
