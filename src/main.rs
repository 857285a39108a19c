//! Dial Pattern CLI
//!
//! Usage:
//!   dial-pattern [OPTIONS]
//!
//! Options:
//!   -o, --output-dir <DIR>   Directory to write `<name>.svg` files into
//!   -p, --pattern <NAME>     Only render the named pattern (repeatable)
//!   -s, --stylesheet <FILE>  Stylesheet file for colours (TOML format)
//!   --stdout                 Print SVG to stdout instead of writing files
//!   -l, --list               List built-in patterns
//!   --lint                   Warn about patterns a sensor cannot read reliably
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::warn;

use dial_pattern::{
    generate, gray, lint, render_with_config, select_encoders, EncoderSpec, RenderConfig,
    Stylesheet,
};

#[derive(Parser)]
#[command(name = "dial-pattern")]
#[command(about = "Printable Gray-code templates for rotary encoder dials")]
struct Cli {
    /// Directory to write SVG files into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only render the named pattern (may be given more than once)
    #[arg(short, long = "pattern", value_name = "NAME")]
    patterns: Vec<String>,

    /// Stylesheet file for colours (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Print SVG to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// List built-in patterns
    #[arg(short, long)]
    list: bool,

    /// Warn about patterns a sensor cannot read reliably
    #[arg(long)]
    lint: bool,

    /// Debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let specs = match select_encoders(&cli.patterns) {
        Ok(specs) => specs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        for spec in &specs {
            print_spec(spec);
        }
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };
    let config = RenderConfig::new().with_stylesheet(stylesheet);

    if cli.lint {
        for spec in &specs {
            for warning in lint::check(spec) {
                warn!("{}", warning);
            }
        }
    }

    if cli.stdout {
        for spec in &specs {
            println!("{}", render_with_config(spec, &config));
        }
        return;
    }

    match generate(&specs, &config, &cli.output_dir) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_spec(spec: &EncoderSpec) {
    println!(
        "{}: {} rings, {} sectors, indicator at {} degrees",
        spec.name,
        spec.bits,
        spec.sector_count(),
        spec.indicator
    );
    for (i, code) in spec.sector_codes().into_iter().enumerate() {
        if let Some((start, end)) = spec.sector_span(i) {
            println!(
                "  {:>3}  {:>8.3} .. {:>8.3}  {}",
                i + 1,
                start,
                end,
                gray::to_bit_string(code, spec.bits)
            );
        }
    }
}
