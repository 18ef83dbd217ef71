//! rubify CLI - furigana study notes to HTML
//!
//! A command-line tool for turning annotated plain-text notes into ruby HTML.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use rubify::{Layout, Rubify, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Furigana study notes to ruby-annotated HTML
#[derive(Parser)]
#[command(
    name = "rubify",
    version,
    about = "Convert furigana study notes to ruby-annotated HTML",
    long_about = "rubify - furigana study notes to HTML.\n\n\
                  Turns 漢字(かんじ) into <ruby> markup and highlights Korean glosses.\n\n\
                  Usage:\n  \
                  rubify                     Convert b1.txt to b1_furigana.html\n  \
                  rubify <file> [output]     Convert a file\n  \
                  rubify sections <file>     Show the section structure as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (for default conversion)
    #[arg(global = false)]
    input: Option<PathBuf>,

    /// Output file path (for default conversion)
    #[arg(global = false)]
    output: Option<PathBuf>,

    /// Body layout
    #[arg(long, global = true, default_value = "auto")]
    layout: LayoutMode,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to a complete HTML file (default command)
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: <filename>_furigana.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        template: TemplateArgs,

        /// Annotate sections one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Print the annotated body without the document template
    Annotate {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Show the section structure of a document as JSON
    Sections {
        /// Input file path
        input: PathBuf,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Show version information
    Version,
}

/// Static parts of the HTML document
#[derive(clap::Args)]
struct TemplateArgs {
    /// Document title (also dropped from the top of sectioned input)
    #[arg(long)]
    title: Option<String>,

    /// Document subtitle (also dropped from the top of sectioned input)
    #[arg(long)]
    subtitle: Option<String>,

    /// Cover image path
    #[arg(long, conflicts_with = "no_cover")]
    cover: Option<String>,

    /// Omit the cover image
    #[arg(long)]
    no_cover: bool,
}

impl TemplateArgs {
    fn apply(&self, builder: Rubify) -> Rubify {
        let mut builder = builder;
        if let Some(ref title) = self.title {
            builder = builder.with_title(title.clone());
        }
        if let Some(ref subtitle) = self.subtitle {
            builder = builder.with_subtitle(subtitle.clone());
        }
        if let Some(ref cover) = self.cover {
            builder = builder.with_cover_image(cover.clone());
        }
        if self.no_cover {
            builder = builder.without_cover_image();
        }
        builder
    }
}

/// Body layout
#[derive(Clone, Copy, ValueEnum)]
enum LayoutMode {
    /// One block for the whole document
    Plain,
    /// One box per section
    Sectioned,
    /// Sectioned if section headers are present
    Auto,
}

impl From<LayoutMode> for Layout {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Plain => Layout::Plain,
            LayoutMode::Sectioned => Layout::Sectioned,
            LayoutMode::Auto => Layout::Auto,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let layout = Layout::from(cli.layout);

    let Some(command) = cli.command else {
        // Default command: rubify [input] [output]
        let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let output = match cli.output {
            Some(p) => p,
            None if input == Path::new(DEFAULT_INPUT) => PathBuf::from(DEFAULT_OUTPUT),
            None => default_output(&input),
        };
        let builder = Rubify::new().with_layout(layout);
        return run_convert(builder, &input, &output);
    };

    match command {
        Commands::Convert {
            input,
            output,
            template,
            sequential,
        } => {
            let mut builder = template.apply(Rubify::new().with_layout(layout));
            if sequential {
                builder = builder.sequential();
            }
            let output = output.unwrap_or_else(|| default_output(&input));
            run_convert(builder, &input, &output)?;
        }

        Commands::Annotate {
            input,
            output,
            template,
        } => {
            let document = template
                .apply(Rubify::new().with_layout(layout))
                .load(&input)?;
            let fragment = document.to_fragment();
            write_output(output.as_ref(), &fragment)?;

            if let Some(path) = output {
                println!(
                    "{} Annotated {} layout: {}",
                    "✓".green().bold(),
                    document.layout(),
                    path.display()
                );
            }
        }

        Commands::Sections {
            input,
            compact,
            template,
        } => {
            let document = template
                .apply(Rubify::new().with_layout(layout))
                .load(&input)?;
            let sections = document.sections();

            let json = if compact {
                serde_json::to_string(&sections)?
            } else {
                serde_json::to_string_pretty(&sections)?
            };
            write_output(None, &json)?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Converts one file and prints a summary.
fn run_convert(
    builder: Rubify,
    input: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Reading document...");

    let document = builder.load(input)?;
    let layout = document.layout();

    pb.set_message("Annotating...");
    let html = document.to_html();

    pb.set_message("Writing HTML...");
    fs::write(output, &html)?;

    pb.finish_and_clear();

    println!("{}", "Conversion Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Input".bold(), input.display());
    println!("{}: {}", "Output".bold(), output.display());
    println!("{}: {}", "Layout".bold(), layout);
    if layout == Layout::Sectioned {
        println!("{}: {}", "Sections".bold(), document.sections().len());
    }
    println!("{}: {}", "Ruby spans".bold(), html.matches("<ruby>").count());
    println!(
        "{}: {}",
        "Korean spans".bold(),
        html.matches("<strong class=\"korean-bold\">").count()
    );

    Ok(())
}

/// `notes.txt` becomes `notes_furigana.html` next to it.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}_furigana.html", stem))
}

fn print_version() {
    println!("{} {}", "rubify".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Furigana study notes to ruby-annotated HTML");
    println!();
    println!("Layouts: plain, sectioned, auto");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
