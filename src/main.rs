use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use objkaleidoscope::driver::{self, DumpFormat, DumpOptions, SourceSession};

#[derive(Parser)]
#[command(name = "objkaleidoscope")]
#[command(author, version, about = "Scanner for the Kaleidoscope language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to colorize diagnostics
    #[arg(long, value_enum, global = true, default_value = "auto")]
    color: ColorMode,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session that echoes the tokens of each line (default)
    Repl,

    /// Dump the token stream of a source file
    Tokens {
        /// The source file to scan
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: DumpFormat,

        /// Leave whitespace and comment tokens out of the dump
        #[arg(long)]
        no_trivia: bool,
    },

    /// Check a source file for lexical errors
    Check {
        /// The source file to check
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let color = ColorChoice::from(cli.color);
    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(),
        Commands::Tokens {
            input,
            format,
            no_trivia,
        } => tokens(input, format, !no_trivia),
        Commands::Check { input } => check(input, color),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("failed to read from stdin")?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("  :keywords    Show the keyword and punctuation tables");
                println!("\nAny other line is scanned and its tokens are echoed.");
                continue;
            }
            ":keywords" => {
                println!("{}", driver::describe_tables());
                continue;
            }
            _ => {}
        }

        println!("{}", driver::echo_line(&line));
    }

    Ok(())
}

fn tokens(input: PathBuf, format: DumpFormat, trivia: bool) -> Result<()> {
    log::info!("Scanning {:?}", input);

    let session = SourceSession::from_file(&input)?;
    let tokens = session.tokens();
    log::debug!("{} token(s)", tokens.len());

    let options = DumpOptions { format, trivia };
    println!("{}", driver::format_tokens(&tokens, &options)?);
    Ok(())
}

fn check(input: PathBuf, color: ColorChoice) -> Result<()> {
    log::info!("Checking {:?}", input);

    let mut session = SourceSession::from_file(&input)?;
    let errors = session.check();
    session.report_diagnostics(color)?;

    if errors > 0 {
        anyhow::bail!("{} lexical error(s) in {}", errors, input.display());
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
