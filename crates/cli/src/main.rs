use anyhow::{Context, Result};
use catalog::{Catalog, FilterCriteria, MovieRecord, Year};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use export::{CsvExporter, Exporter, PdfExporter, SpreadsheetExporter};
use std::path::PathBuf;
use std::time::Instant;

/// CineReport - Movie catalog report generator
#[derive(Parser)]
#[command(name = "cine-report")]
#[command(about = "Filters a movie catalog and exports it to PDF, xlsx, or CSV", long_about = None)]
struct Cli {
    /// Path to the movie catalog JSON file
    #[arg(short, long, default_value = "assets/peliculas.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, optionally filtered
    List {
        /// Keep only this exact genre
        #[arg(long)]
        genre: Option<String>,

        /// Keep only this exact release year
        #[arg(long)]
        year: Option<Year>,
    },

    /// Show the unique genres of the catalog
    Genres,

    /// Show the unique release years of the catalog
    Years,

    /// Export the (filtered) catalog to a report file
    Export {
        /// Report format
        #[arg(long, value_enum)]
        format: Format,

        /// Keep only this exact genre
        #[arg(long)]
        genre: Option<String>,

        /// Keep only this exact release year
        #[arg(long)]
        year: Option<Year>,

        /// Output path (defaults to peliculas.<ext> in the working directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Xlsx,
    Csv,
}

impl Format {
    fn exporter(self) -> Box<dyn Exporter> {
        match self {
            Format::Pdf => Box::new(PdfExporter),
            Format::Xlsx => Box::new(SpreadsheetExporter),
            Format::Csv => Box::new(CsvExporter),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Configure the PDF base font once, before any render
    export::fonts::set_document_font("Helvetica");

    let cli = Cli::parse();

    // Load the catalog (single shot; a reload is a new invocation)
    let start = Instant::now();
    let catalog = catalog::load_catalog(&cli.data)
        .await
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    if catalog.is_empty() {
        println!("{} The catalog is empty", "!".yellow());
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { genre, year } => handle_list(&catalog, genre, year),
        Commands::Genres => handle_genres(&catalog),
        Commands::Years => handle_years(&catalog),
        Commands::Export {
            format,
            genre,
            year,
            output,
        } => handle_export(&catalog, format, genre, year, output)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, genre: Option<String>, year: Option<Year>) {
    let criteria = FilterCriteria { genre, year };
    let view = catalog.filtered(&criteria);

    println!(
        "{}",
        format!("{} of {} movies match", view.len(), catalog.len())
            .bold()
            .blue()
    );
    print_movies(&view);
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    println!("{}", "Genres:".bold().blue());
    for genre in catalog.genres() {
        println!("{}{}", "• ".green(), genre);
    }
}

/// Handle the 'years' command
fn handle_years(catalog: &Catalog) {
    println!("{}", "Release years:".bold().blue());
    for year in catalog.years() {
        println!("{}{}", "• ".green(), year);
    }
}

/// Handle the 'export' command
fn handle_export(
    catalog: &Catalog,
    format: Format,
    genre: Option<String>,
    year: Option<Year>,
    output: Option<PathBuf>,
) -> Result<()> {
    let criteria = FilterCriteria { genre, year };
    let view = catalog.filtered(&criteria);

    let exporter = format.exporter();
    let path = output.unwrap_or_else(|| PathBuf::from(exporter.file_name()));

    let start = Instant::now();
    let bytes = export::write_to_file(exporter.as_ref(), &view, &path)
        .with_context(|| format!("Failed to export report to {}", path.display()))?;

    println!(
        "{} Exported {} movies to {} ({} bytes) in {:?}",
        "✓".green(),
        view.len(),
        path.display().to_string().bold(),
        bytes,
        start.elapsed()
    );
    Ok(())
}

/// Helper function to print a movie view as a simple table
fn print_movies(movies: &[MovieRecord]) {
    for movie in movies {
        println!(
            "  {} [{}] ({})",
            movie.title,
            movie.genre,
            movie.release_year
        );
    }
}
