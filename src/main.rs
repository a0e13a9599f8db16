//! Blockdown - A minimal markdown block previewer for the terminal.
//!
//! This binary provides the CLI interface to the blockdown library,
//! reading whole documents from files or stdin and printing them as
//! styled terminal text or an HTML fragment.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::io::{self, Read, Write};
use std::path::Path;

use blockdown_config::Config;
use blockdown_core::Block;
use blockdown_parser::parse;
use blockdown_render::{render_html, RenderStyle, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Blockdown v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    // Load and merge configuration
    let config = load_config(cli);
    debug!("Loaded config with style: {:?}", config.style);

    let width = pick_width(cli, &config);
    debug!("Render width: {}", width);

    let style = create_style(cli, &config);

    // Determine input source and process
    if cli.should_read_stdin() {
        run_stdin(cli, width, &style)
    } else {
        run_files(cli, width, &style)
    }
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_default();

    if let Some(ref config_arg) = cli.config {
        apply_config_override(&mut config, config_arg);
    }

    config
}

/// Merge a config override given as a file path or inline TOML.
///
/// Failures are logged and the base config is left as it was, so a
/// broken override never aborts rendering.
fn apply_config_override(config: &mut Config, config_arg: &str) {
    if Path::new(config_arg).exists() {
        // It's a file path
        match Config::load_from(Path::new(config_arg)) {
            Ok(override_config) => {
                config.merge(&override_config);
                debug!("Merged config from file: {}", config_arg);
            }
            Err(e) => {
                error!("Failed to load config file {}: {}", config_arg, e);
            }
        }
    } else {
        // Try parsing as inline TOML
        match toml::from_str::<Config>(config_arg) {
            Ok(override_config) => {
                config.merge(&override_config);
                debug!("Merged inline config");
            }
            Err(e) => {
                error!("Failed to parse config: {}", e);
            }
        }
    }
}

/// Pick the render width: CLI flag first, then config, then terminal.
fn pick_width(cli: &Cli, config: &Config) -> usize {
    if cli.width > 0 {
        cli.width as usize
    } else {
        config.style.effective_width()
    }
}

/// Build the render style from config and CLI flags.
fn create_style(cli: &Cli, config: &Config) -> RenderStyle {
    apply_color_choice(
        RenderStyle::from_config(&config.style),
        cli.no_color,
        atty::is(atty::Stream::Stdout),
    )
}

/// Disable color when asked to, or when stdout is not a terminal.
fn apply_color_choice(mut style: RenderStyle, no_color: bool, is_tty: bool) -> RenderStyle {
    style.color = !no_color && is_tty;
    style
}

/// Process input from stdin.
fn run_stdin(cli: &Cli, width: usize, style: &RenderStyle) -> io::Result<()> {
    info!("Reading from stdin");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    emit(&input, cli, width, style)
}

/// Process input files.
fn run_files(cli: &Cli, width: usize, style: &RenderStyle) -> io::Result<()> {
    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let input = std::fs::read_to_string(path)?;
        emit(&input, cli, width, style)?;
    }

    Ok(())
}

/// One-line description of a parsed block for trace logging.
fn block_summary(block: &Block) -> String {
    match block.content() {
        Some(text) => format!("{} {:?}", block.kind(), text),
        None => block.to_string(),
    }
}

/// Parse a document and write it to stdout.
fn emit(input: &str, cli: &Cli, width: usize, style: &RenderStyle) -> io::Result<()> {
    let blocks = parse(input);
    debug!("Parsed {} blocks", blocks.len());
    for block in &blocks {
        trace!("block: {}", block_summary(block));
    }

    if cli.html {
        let html = render_html(&blocks);
        io::stdout().write_all(html.as_bytes())?;
        io::stdout().flush()
    } else {
        let stdout = io::stdout();
        let mut renderer = Renderer::with_style(stdout.lock(), width, style.clone());
        renderer.render(&blocks)
    }
}
