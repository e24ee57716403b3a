//! Command-line interface for batch processing grayscale PNG files

use crate::algorithm::classifier::{
    AdaptiveClassifier, ClassifierConfig, ThresholdPolicy, WriteMode,
};
use crate::algorithm::marker::{Extremum, ExtremumMarker, Marked, MarkerConfig};
use crate::algorithm::threshold::global_threshold;
use crate::io::configuration::{
    DEFAULT_BIAS, DEFAULT_BRIGHT, DEFAULT_DARK, DEFAULT_GLOBAL_THRESHOLD, DEFAULT_MARKER_RADIUS,
    DEFAULT_RADIUS, DEFAULT_SCALE, IMAGE_EXTENSION, OUTPUT_SUFFIX_SEPARATOR,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, load_grayscale};
use crate::io::progress::{ProgressManager, Stage};
use crate::spatial::grid::Grid;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Operation applied to each image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Adaptive threshold against the local mean
    #[default]
    Mean,
    /// Adaptive threshold against the biased local min/max midpoint
    MinMax,
    /// Mark strict local minima
    Minima,
    /// Mark strict local maxima
    Maxima,
    /// Fixed global threshold
    Global,
}

impl Mode {
    /// Name used in output filenames
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::MinMax => "min-max",
            Self::Minima => "minima",
            Self::Maxima => "maxima",
            Self::Global => "global",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gridscan")]
#[command(
    author,
    version,
    about = "Binarize images and mark local extrema with sliding-window scans"
)]
/// Command-line arguments for the image scanning tool
// One flag per independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Operation to run
    #[arg(short, long, value_enum, default_value_t = Mode::Mean)]
    pub mode: Mode,

    /// Neighborhood radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Exclude the center pixel from the local statistic
    #[arg(short, long)]
    pub skip_center: bool,

    /// Offset subtracted from the min/max midpoint
    #[arg(short, long, default_value_t = DEFAULT_BIAS, allow_negative_numbers = true)]
    pub bias: f64,

    /// Factor applied to the biased min/max midpoint
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Cutoff for the global mode
    #[arg(short, long, default_value_t = DEFAULT_GLOBAL_THRESHOLD)]
    pub threshold: f64,

    /// Classify only window centers instead of rewriting whole windows
    #[arg(short, long)]
    pub center_only: bool,

    /// Read statistics from the partially binarized image
    #[arg(short, long)]
    pub in_place: bool,

    /// Radius of the sphere drawn around each extremum
    #[arg(long, default_value_t = DEFAULT_MARKER_RADIUS)]
    pub marker_radius: usize,

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

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
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
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    /// Output path for an input image: `<stem>_<mode>.png` next to the input
    pub fn output_path(input_path: &Path, mode: Mode) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX_SEPARATOR,
            mode.name(),
            IMAGE_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if Self::is_png(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let read_error = |e: std::io::Error| GridError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if Self::is_png(&path) && !Self::is_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn is_png(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(IMAGE_EXTENSION)
    }

    /// Whether a path looks like the output of any mode
    ///
    /// Such files are skipped when scanning a directory so that reruns with a
    /// different mode never treat earlier results as inputs.
    pub fn is_output(path: &Path) -> bool {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        Mode::value_variants().iter().any(|mode| {
            stem.strip_suffix(mode.name())
                .is_some_and(|rest| rest.ends_with(OUTPUT_SUFFIX_SEPARATOR))
        })
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path, self.cli.mode);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path, self.cli.mode);

        self.report(|pm| {
            pm.start_file(index, input_path);
            pm.advance(index, Stage::Load);
        });
        let source = load_grayscale(input_path)?;

        self.report(|pm| pm.advance(index, Stage::Scan));
        let output = self.run_mode(source)?;

        self.report(|pm| pm.advance(index, Stage::Export));
        export_grid_as_png(&output, &output_path)?;

        self.report(|pm| pm.complete_file(index));
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "processed"
        );
        Ok(())
    }

    fn run_mode(&self, mut source: Grid<i32>) -> Result<Grid<i32>> {
        let bright = i32::from(DEFAULT_BRIGHT);
        let dark = i32::from(DEFAULT_DARK);

        match self.cli.mode {
            Mode::Mean | Mode::MinMax => {
                let policy = if self.cli.mode == Mode::Mean {
                    ThresholdPolicy::Mean
                } else {
                    ThresholdPolicy::MinMax {
                        bias: self.cli.bias,
                        scale: self.cli.scale,
                    }
                };
                let config = ClassifierConfig {
                    radius: self.cli.radius,
                    skip_center: self.cli.skip_center,
                    policy,
                    write_mode: if self.cli.center_only {
                        WriteMode::Center
                    } else {
                        WriteMode::Window
                    },
                    bright,
                    dark,
                };
                let mut classifier = AdaptiveClassifier::new(config)?;
                if self.cli.in_place {
                    classifier.classify_in_place(&mut source)?;
                    Ok(source)
                } else {
                    classifier.classify(&source)
                }
            }
            Mode::Minima | Mode::Maxima => {
                self.warn_unused_classifier_flags();
                let extremum = if self.cli.mode == Mode::Minima {
                    Extremum::Minimum
                } else {
                    Extremum::Maximum
                };
                let mut marker = ExtremumMarker::new(MarkerConfig {
                    radius: self.cli.radius,
                    marker_radius: self.cli.marker_radius,
                    extremum,
                });
                let marked: Marked<u8> = marker.find_and_mark(&source)?;
                info!(detections = marked.summary.detections, "extrema marked");
                Ok(marked
                    .output
                    .map(|&mark| if mark == 0 { dark } else { bright }))
            }
            Mode::Global => {
                self.warn_unused_classifier_flags();
                global_threshold(&source, self.cli.threshold, bright, dark)
            }
        }
    }

    fn warn_unused_classifier_flags(&self) {
        if self.cli.in_place || self.cli.center_only {
            warn!(
                mode = self.cli.mode.name(),
                "--in-place and --center-only only apply to the mean and min-max modes"
            );
        }
    }

    fn report(&mut self, update: impl FnOnce(&mut ProgressManager)) {
        if let Some(ref mut pm) = self.progress_manager {
            update(pm);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod unit_tests;
