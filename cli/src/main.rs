//! reflow CLI - rewrap plain text to a fixed words-per-line width

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use reflow::{
    parse_text, CleanupPreset, JsonFormat, ReflowOptions, DEFAULT_WORDS_PER_LINE,
};

#[derive(Parser)]
#[command(name = "reflow")]
#[command(version)]
#[command(about = "Rewrap plain text, preserving paragraphs", long_about = None)]
struct Cli {
    /// Input text file ('-' for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Target words per line
    #[arg(short, long, env = "REFLOW_WIDTH", default_value_t = DEFAULT_WORDS_PER_LINE)]
    width: usize,

    /// Text cleanup preset
    #[arg(long, value_enum, env = "REFLOW_CLEANUP")]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrap a text file (or stdin)
    Text {
        /// Input text file ('-' for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Target words per line
        #[arg(short, long, env = "REFLOW_WIDTH", default_value_t = DEFAULT_WORDS_PER_LINE)]
        width: usize,

        /// Text cleanup preset
        #[arg(long, value_enum, env = "REFLOW_CLEANUP")]
        cleanup: Option<CleanupLevel>,
    },

    /// Emit the parsed paragraph structure as JSON
    Json {
        /// Input text file ('-' for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show paragraph and word counts
    Info {
        /// Input text file ('-' for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Cleanup preset level for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CleanupLevel {
    /// Line ending and Unicode normalization only
    Minimal,
    /// Minimal plus replacement-char removal and blank-run capping
    Standard,
    /// Standard plus repeated-line removal
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            width,
            cleanup,
        }) => cmd_text(&input, output.as_deref(), width, cleanup),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => match cli.input {
            Some(input) => cmd_text(&input, cli.output.as_deref(), cli.width, cli.cleanup),
            None => {
                eprintln!("{}", "No input file given. See --help for usage.".red());
                process::exit(2);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Read input text from a file, or from stdin when the path is `-`.
fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    width: usize,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    log::debug!("reflowing {} chars at width {}", text.len(), width);

    let mut options = ReflowOptions::new().with_words_per_line(width);
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }

    let wrapped = reflow::reflow_with_options(&text, &options)?;
    write_output(output, &wrapped)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse_text(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = reflow::render::to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse_text(&text);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Words".bold(), doc.word_count());
    println!("{}: {}", "Tokens".bold(), doc.token_count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "text from disk").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "text from disk");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input(Path::new("does/not/exist.txt")).is_err());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrapped.txt");
        write_output(Some(&path), "one two\nthree").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one two\nthree");
    }

    // Single test so the env var mutations stay serialized
    #[test]
    fn test_width_from_environment() {
        let cli = Cli::try_parse_from(["reflow", "input.txt"]).unwrap();
        assert_eq!(cli.width, DEFAULT_WORDS_PER_LINE);

        std::env::set_var("REFLOW_WIDTH", "3");
        let cli = Cli::try_parse_from(["reflow", "input.txt"]).unwrap();
        assert_eq!(cli.width, 3);

        // An explicit flag wins over the environment
        let cli = Cli::try_parse_from(["reflow", "--width", "7", "input.txt"]).unwrap();
        assert_eq!(cli.width, 7);
        std::env::remove_var("REFLOW_WIDTH");
    }
}
