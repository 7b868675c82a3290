//! mkpdf CLI - render markup or plain text files to styled PDF

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use mkpdf::render::{to_json, JsonFormat};
use mkpdf::{parse_content, Mkpdf, PageGeometry, RenderOptions};

#[derive(Parser)]
#[command(name = "mkpdf")]
#[command(version)]
#[command(about = "Render rich-text markup or plain text to styled PDF", long_about = None)]
struct Cli {
    /// Input file (HTML fragment or plain text)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file (defaults to the input name with .pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Document title for the PDF metadata
    #[arg(long)]
    title: Option<String>,

    /// Document author for the PDF metadata
    #[arg(long)]
    author: Option<String>,

    /// Page size
    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSize,

    /// Page margin in millimetres on all sides
    #[arg(long, default_value = "15")]
    margin: f32,

    /// Disable content stream compression
    #[arg(long)]
    no_compress: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and print the block model as JSON
    Blocks {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// ISO A4, 210 x 297 mm
    A4,
    /// US Letter, 215.9 x 279.4 mm
    Letter,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Blocks {
            input,
            output,
            compact,
        }) => dump_blocks(input, output.as_deref(), *compact),
        Some(Commands::Version) => {
            println!("mkpdf {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => match &cli.input {
            Some(input) => convert(&cli, input),
            None => {
                eprintln!("{}: no input file given (try --help)", "Error".red().bold());
                std::process::exit(2);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn convert(cli: &Cli, input: &Path) -> mkpdf::Result<()> {
    let content = fs::read_to_string(input)?;

    let geometry = match cli.page_size {
        PageSize::A4 => PageGeometry::a4(),
        PageSize::Letter => PageGeometry::letter(),
    }
    .with_margin(cli.margin);

    let mut options = RenderOptions::new()
        .with_geometry(geometry)
        .with_compress(!cli.no_compress);
    if let Some(title) = &cli.title {
        options = options.with_title(title);
    }
    if let Some(author) = &cli.author {
        options = options.with_author(author);
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("pdf"));
    Mkpdf::with_options(options).render_to_file(&content, &output)?;
    println!("{} {}", "Saved to".green(), output.display());
    Ok(())
}

fn dump_blocks(input: &Path, output: Option<&Path>, compact: bool) -> mkpdf::Result<()> {
    let content = fs::read_to_string(input)?;
    let blocks = parse_content(&content);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&blocks, format)?;
    match output {
        Some(path) => {
            fs::write(path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
