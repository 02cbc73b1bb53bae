//! Command-line interface for batch conversion of images into dot grids

use crate::algorithm::builder::GridBuilder;
use crate::io::configuration::{DEFAULT_PREVIEW_SCALE, IMAGE_EXTENSIONS, OUTPUT_SUFFIX};
use crate::io::error::{Result, path_error};
use crate::io::export::write_grid_json;
use crate::io::image::{export_grid_preview, load_pixel_buffer};
use crate::io::progress::ProgressManager;
use crate::io::settings::Settings;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dotter")]
#[command(
    author,
    version,
    about = "Convert images into deterministic grids of colored dots"
)]
/// Command-line arguments for the dot grid tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// JSON settings file (seed, grid size, spans, palette, surrounding cells)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible generation, overrides the settings file
    #[arg(short, long)]
    pub seed: Option<i64>,

    /// Number of grid rows, overrides the settings file
    #[arg(short, long)]
    pub rows: Option<i64>,

    /// Number of grid columns, overrides the settings file
    #[arg(short = 'C', long)]
    pub columns: Option<i64>,

    /// Also render a PNG preview of each grid
    #[arg(short, long)]
    pub preview: bool,

    /// Pixels per grid unit in previews
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Settings file contents with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(rows) = self.rows {
            settings.rows_count = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns_count = columns;
        }
        Ok(settings)
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, target validation fails
    /// or any file cannot be converted
    pub fn process(&mut self) -> Result<()> {
        let builder = GridBuilder::new(self.cli.settings()?.into_config())?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&builder, file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_image(target) {
                return Err(path_error(target.clone(), "Target file must be an image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_image(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                target.clone(),
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path(input_path, "json");
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, builder: &GridBuilder, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, builder.stage_count());
        }

        let pixels = load_pixel_buffer(input_path)?;
        let progress = &mut self.progress_manager;
        let grid = builder.build_observed(&pixels, |stage| {
            if let Some(pm) = progress.as_mut() {
                pm.update_stage(index, stage);
            }
        })?;

        let json_path = output_path(input_path, "json");
        write_grid_json(&grid, &json_path)?;
        info!("wrote {}", json_path.display());

        if self.cli.preview {
            let preview_path = output_path(input_path, "png");
            export_grid_preview(&grid, self.cli.scale, &preview_path)?;
            info!("wrote {}", preview_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
}

// Previews written beside their inputs must not be picked up again
fn is_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}

/// Output path beside `input_path`: `<stem>_dots.<extension>`
pub fn output_path(input_path: &Path, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
