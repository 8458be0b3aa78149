//! squeeze - pluggable text compression tool
//!
//! Encodes and decodes text or files through the algorithms registered in
//! the squeeze codec registry.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing::info;

use squeeze_codec::default_registry;
use squeeze_types::Codec;

/// squeeze - pluggable text compression tool
#[derive(Parser)]
#[command(
    name = "squeeze",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pluggable text compression tool",
    long_about = "squeeze encodes text or files into a self-describing compressed\n\
                  representation and reconstructs the original from it. Algorithms\n\
                  are selected by name from the built-in registry."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode inline text or files
    Encode(CodecArgs),
    /// Decode inline text or files
    Decode(CodecArgs),
    /// List the registered algorithm names
    Algorithms,
}

#[derive(Args)]
struct CodecArgs {
    /// Inline text to process; the result is printed to stdout
    #[arg(short, long, conflicts_with = "files")]
    text: Option<String>,

    /// Files to process; results are written to derived paths
    files: Vec<PathBuf>,

    /// Algorithm to use
    #[arg(short, long, default_value = "huffman")]
    algorithm: String,
}

#[derive(Clone, Copy)]
enum Mode {
    Encode,
    Decode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug, cli.quiet, cli.verbose)?;

    info!("squeeze v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Encode(args) => run_codec(Mode::Encode, &args),
        Commands::Decode(args) => run_codec(Mode::Decode, &args),
        Commands::Algorithms => {
            for name in default_registry().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_codec(mode: Mode, args: &CodecArgs) -> Result<()> {
    let registry = default_registry();
    if !registry.contains(&args.algorithm) {
        bail!(
            "unknown algorithm {}; known algorithms: {}",
            style(&args.algorithm).yellow(),
            registry.names().join(", ")
        );
    }
    let codec = registry.select(&args.algorithm)?;

    if let Some(text) = &args.text {
        let output = match mode {
            Mode::Encode => codec.encode(text.as_bytes())?,
            Mode::Decode => codec.decode(text.as_bytes())?,
        };
        println!("{}", String::from_utf8_lossy(&output));
        return Ok(());
    }

    if args.files.is_empty() {
        bail!("choose an input: --text or one or more file paths");
    }

    for path in &args.files {
        let target = match mode {
            Mode::Encode => squeeze_io::encode_file(path, codec)?,
            Mode::Decode => squeeze_io::decode_file(path, codec)?,
        };
        println!("{} -> {}", path.display(), target.display());
    }
    Ok(())
}

fn init_logging(debug: bool, quiet: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_encode_text_args() {
        let cli = Cli::try_parse_from(["squeeze", "encode", "--text", "hello"]).unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert_eq!(args.algorithm, "huffman");
                assert!(args.files.is_empty());
            }
            _ => panic!("expected encode subcommand"),
        }
    }

    #[test]
    fn test_decode_files_args() {
        let cli =
            Cli::try_parse_from(["squeeze", "decode", "-a", "huffman", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Commands::Decode(args) => {
                assert_eq!(args.files.len(), 2);
                assert!(args.text.is_none());
            }
            _ => panic!("expected decode subcommand"),
        }
    }

    #[test]
    fn test_text_conflicts_with_files() {
        assert!(Cli::try_parse_from(["squeeze", "encode", "--text", "hi", "a.txt"]).is_err());
    }

    #[rstest]
    #[case::debug(&["squeeze", "--debug", "algorithms"])]
    #[case::quiet(&["squeeze", "-q", "algorithms"])]
    #[case::verbose(&["squeeze", "-v", "algorithms"])]
    fn test_global_flags_parse(#[case] argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_ok());
    }

    #[test]
    fn test_unknown_algorithm_is_rejected_before_work() {
        let args = CodecArgs {
            text: Some("hello".to_string()),
            files: Vec::new(),
            algorithm: "lzw".to_string(),
        };
        assert!(run_codec(Mode::Encode, &args).is_err());
    }
}
