mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logger::StderrLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photogrid", about = "Lay out photos four to a page", version)]
struct Cli {
    /// More log output (repeat for debug and trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose image files into a 2x2 grid PDF
    Compose {
        /// Input image file(s), ordered by file name
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Save the effective options as JSON
        #[arg(long)]
        save_options: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Show how image files would be laid out
    Stats {
        /// Input image file(s), ordered by file name
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Load options from a JSON file; other flags override it
    #[arg(long)]
    options: Option<PathBuf>,

    /// Output paper size [default: a4]
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Border around and between photos [default: bordered]
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Outer margin in mm (with --gap, overrides --border)
    #[arg(long, requires = "gap")]
    margin: Option<f32>,

    /// Gap between photos in mm
    #[arg(long, requires = "margin")]
    gap: Option<f32>,

    /// Stretch photos to fill their cells
    #[arg(long)]
    stretch: bool,

    /// Document title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum BorderArg {
    Bordered,
    Borderless,
}

impl From<PaperArg> for photo_grid::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<BorderArg> for photo_grid::BorderPreset {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Bordered => Self::Bordered,
            BorderArg::Borderless => Self::Borderless,
        }
    }
}

impl LayoutArgs {
    /// Options from the JSON file (or defaults) with flags applied on top
    async fn resolve(&self) -> Result<photo_grid::GridOptions> {
        let mut options = match &self.options {
            Some(path) => photo_grid::GridOptions::load(path)
                .await
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => photo_grid::GridOptions::default(),
        };

        if let Some(paper) = self.paper {
            options.paper = paper.into();
        }
        if let Some(border) = self.border {
            options.border = border.into();
        }
        if let (Some(outer_mm), Some(gap_mm)) = (self.margin, self.gap) {
            options.border = photo_grid::BorderPreset::Custom { outer_mm, gap_mm };
        }
        if self.stretch {
            options.stretch = true;
        }
        if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }

        options.validate()?;
        Ok(options)
    }
}

async fn load_collection(input: &[PathBuf]) -> Result<photo_grid::PhotoCollection> {
    let acquired = photo_grid::load_photos(input).await;
    if acquired.is_empty() {
        bail!("None of the {} input file(s) could be loaded", input.len());
    }

    let mut photos = photo_grid::PhotoCollection::new();
    photos.assign_images(0, acquired);
    Ok(photos)
}

fn print_statistics(photos: &photo_grid::PhotoCollection) {
    let stats = photo_grid::calculate_statistics(photos.as_slice());
    println!("Grid Statistics:");
    println!("  Photos: {}", stats.photos);
    println!("  Pages: {}", stats.pages);
    println!("  Photos on last page: {}", stats.last_page_photos);
    if stats.empty_slots > 0 {
        println!("  Empty slots: {}", stats.empty_slots);
    }
}

fn print_plan(photos: &photo_grid::PhotoCollection, options: &photo_grid::GridOptions) -> Result<()> {
    for page in photo_grid::plan_document(photos.as_slice(), options)? {
        println!("Page {}:", page.index + 1);
        for planned in &page.placements {
            let name = photos
                .get(&planned.photo_id)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            let rect = planned.rect;
            println!(
                "  [{},{}] {:<24} {:>6.1} x {:<6.1} mm at ({:.1}, {:.1})",
                planned.position.row,
                planned.position.col,
                name,
                rect.width,
                rect.height,
                rect.x,
                rect.y
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet))
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    match cli.command {
        Commands::Compose {
            input,
            output,
            layout,
            save_options,
            stats_only,
        } => {
            let options = layout.resolve().await?;
            if let Some(path) = &save_options {
                options
                    .save(path)
                    .await
                    .with_context(|| format!("Failed to save options to {}", path.display()))?;
                log::info!("Saved options to {}", path.display());
            }

            let photos = load_collection(&input).await?;
            print_statistics(&photos);

            if stats_only {
                return Ok(());
            }

            photo_grid::compose_to_file(photos.as_slice(), &options, &output).await?;
            println!("Composed → {}", output.display());
        }

        Commands::Stats { input, layout } => {
            let options = layout.resolve().await?;
            let photos = load_collection(&input).await?;
            print_statistics(&photos);
            print_plan(&photos, &options)?;
        }
    }

    Ok(())
}
