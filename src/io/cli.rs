//! Command-line interface producing numbered artworks and a vector document

use crate::algorithm::generator::{Artwork, GenerationConfig};
use crate::algorithm::placement::PlacementStrategy;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    DEFAULT_BORDER, DEFAULT_BORDER_COLOR, DEFAULT_GRID_SIZE, DEFAULT_RUN_COUNT, DEFAULT_SEED,
    DEFAULT_STRATEGY, DEFAULT_TARGET_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_png;
use crate::io::pdf::PdfDocument;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "alternando")]
#[command(
    author,
    version,
    about = "Generate alternating pixel progression artworks"
)]
/// Command-line arguments for the artwork generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Panels per side, also pixels per panel side
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Border width in pixels between and around panels
    #[arg(short, long, default_value_t = DEFAULT_BORDER)]
    pub border: usize,

    /// Approximate width of raster output in pixels
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// Border luminance (0-255)
    #[arg(short = 'c', long, default_value_t = DEFAULT_BORDER_COLOR)]
    pub border_color: u8,

    /// Placement strategy: randomPositions, randomProgress or nearest
    #[arg(short = 'S', long, default_value = DEFAULT_STRATEGY)]
    pub strategy: String,

    /// Number of artworks to generate
    #[arg(short = 'k', long, default_value_t = DEFAULT_RUN_COUNT)]
    pub count: usize,

    /// Base random seed; run k uses seed + k
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving the output files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the multi-page vector document
    #[arg(long)]
    pub no_vector: bool,

    /// Suppress progress output and non-error logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the vector document should be written
    pub const fn write_vector(&self) -> bool {
        !self.no_vector
    }

    /// Resolve the configured strategy name
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategy` if the name is not registered
    pub fn strategy(&self) -> Result<PlacementStrategy> {
        self.strategy.parse()
    }

    /// Build the per-artwork configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy is unknown or a parameter is invalid
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let config = GenerationConfig {
            size: self.size,
            border: self.border,
            target_width: self.width,
            border_color: self.border_color,
            strategy: self.strategy()?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// File name prefix for a strategy, its name with the first letter capitalised
pub fn file_prefix(strategy: PlacementStrategy) -> String {
    let name = strategy.name();
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Orchestrates a batch of numbered generation runs
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every run, writing numbered PNG files and the PDF document
    ///
    /// Returns the paths written, raster images first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, generation fails
    /// or an output file cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.generation_config()?;
        let prefix = file_prefix(config.strategy);
        let mut written = Vec::with_capacity(self.cli.count + 1);
        let mut document = PdfDocument::new();

        if self.cli.count == 0 {
            return Ok(written);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count, config.strategy.name());
        }

        for index in 0..self.cli.count {
            let start_time = Instant::now();
            let raster_path = self.raster_path(&prefix, index);

            if let Some(ref pm) = self.progress_manager {
                pm.start_run(&raster_path.to_string_lossy());
            }

            let mut rng = RandomSelector::new(self.cli.seed.wrapping_add(index as u64));
            let artwork = Artwork::from_config(config, &mut rng)?;

            export_png(&artwork.raster()?, &raster_path)?;
            written.push(raster_path);

            if self.cli.write_vector() {
                document.add_page(artwork.canvas()?);
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_run(start_time.elapsed());
            }
            tracing::info!(
                run = index,
                strategy = %config.strategy,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "completed run"
            );
        }

        if self.cli.write_vector() {
            let vector_path = self.cli.output_dir.join(format!("{prefix}.pdf"));
            document.write_to(&vector_path)?;
            written.push(vector_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn raster_path(&self, prefix: &str, index: usize) -> PathBuf {
        self.cli.output_dir.join(format!("{prefix}{index:03}.png"))
    }
}
