//! Command-line interface for batch solving of puzzle files

use crate::algorithm::pipeline;
use crate::algorithm::scan::Motif;
use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{Result, SolverError};
use crate::io::image::export_scan_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled pixel tiles and scan for the motif"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the annotated scan as a PNG next to each input
    #[arg(short, long)]
    pub render: bool,

    /// Re-render files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Motif mask file overriding the built-in pattern
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,
}

impl Cli {
    /// Check if existing rendered output should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
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
    /// Returns an error if target validation, parsing, assembly, or export
    /// fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let motif = self.load_motif()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&motif, file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn load_motif(&self) -> Result<Motif> {
        match &self.cli.pattern {
            Some(path) => {
                let mask =
                    std::fs::read_to_string(path).map_err(|e| SolverError::FileSystem {
                        path: path.clone(),
                        operation: "read motif mask",
                        source: e,
                    })?;
                Ok(Motif::from_mask(&mask)?)
            }
            None => Ok(Motif::canonical()?),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("txt") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(SolverError::InvalidTarget {
                    reason: "Target file must be a .txt puzzle".to_string(),
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(|e| {
                SolverError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                }
            })? {
                let path = entry
                    .map_err(|e| SolverError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(SolverError::InvalidTarget {
                reason: "Target must be a .txt puzzle file or directory".to_string(),
            })
        }
    }

    // Only rendering produces on-disk output worth skipping.
    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.render || !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::render_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (render exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, motif: &Motif, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let text = std::fs::read_to_string(input_path).map_err(|e| SolverError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read puzzle",
            source: e,
        })?;

        let reconstruction = pipeline::reconstruct_with_motif(&text, motif)?;
        let solution = reconstruction.solution();

        self.announce(&format!(
            "{}: corner product {}, roughness {} ({} motif occurrences)",
            input_path.display(),
            solution.corner_product,
            solution.roughness,
            solution.motif_count
        ));
        if reconstruction.scan.orientation.is_none() {
            self.announce("  note: motif not found in any orientation");
        }

        if self.cli.render {
            let render_target = Self::render_path(input_path);
            export_scan_as_png(&reconstruction.scan.annotated, &render_target)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    // Route result lines through the progress display so bars stay intact.
    #[allow(clippy::print_stdout)]
    fn announce(&self, message: &str) {
        match &self.progress_manager {
            Some(pm) => pm.println(message),
            None => println!("{message}"),
        }
    }

    fn render_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let render_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(render_name)
        } else {
            PathBuf::from(render_name)
        }
    }
}
