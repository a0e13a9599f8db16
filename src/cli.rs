//! Command-line interface for Blockdown.

use clap::Parser;
use std::path::PathBuf;

/// Blockdown - A minimal markdown block previewer for the terminal.
///
/// Renders the block structure of a markdown document (headings,
/// paragraphs, bullet lists) as styled terminal text or an HTML
/// fragment.
#[derive(Parser, Debug)]
#[command(
    name = "bd",
    author = "Blockdown Contributors",
    version,
    about = "A minimal markdown block previewer for the terminal",
    after_help = "Repository: https://github.com/blockdown/blockdown-rs\n\n\
                  Examples:\n  \
                  cat NOTES.md | bd\n  \
                  bd README.md\n  \
                  bd -w 100 -c theme.toml input.md\n  \
                  bd --html notes.md > notes.html"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the output width (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Emit an HTML fragment instead of terminal output
    #[arg(long = "html")]
    pub html: bool,

    /// Disable ANSI colors in the output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use blockdown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["bd"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.width, 0);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.html);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["bd", "test.md"]);
        assert_eq!(cli.files.len(), 1);
        assert_eq!(cli.files[0], PathBuf::from("test.md"));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "bd",
            "-w", "100",
            "-l", "debug",
            "--html",
            "--no-color",
            "file.md",
        ]);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.log_level, "debug");
        assert!(cli.html);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_parse_config_arg() {
        let cli = Cli::parse_from(["bd", "-c", "theme.toml"]);
        assert_eq!(cli.config, Some("theme.toml".to_string()));
    }

    #[test]
    fn test_should_read_stdin() {
        let cli = Cli::parse_from(["bd"]);
        assert!(cli.should_read_stdin());

        let cli = Cli::parse_from(["bd", "file.md"]);
        assert!(!cli.should_read_stdin());
    }
}
