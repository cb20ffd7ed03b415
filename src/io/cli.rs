//! Command-line interface and end-to-end mosaic orchestration

use crate::cache::record::ThumbnailRecord;
use crate::cache::store::CacheStore;
use crate::index::similarity::SimilarityIndex;
use crate::io::configuration::{DEFAULT_CACHE_FILE, DEFAULT_TILE_SIZE};
use crate::io::error::{MosaicError, Result};
use crate::io::progress::ProgressManager;
use crate::io::render::render_mosaic;
use crate::mosaic::assembler::{TileAssignment, assemble, grid_multiplier};
use crate::signature::engine::FingerprintEngine;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fftmosaic")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from frequency-domain image signatures"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Candidate image files; the first also serves as the mosaic target
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Cache store file for computed thumbnail fingerprints
    #[arg(short, long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Output image path; omit to print tile assignments instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Edge length of one mosaic tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output and per-candidate diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one mosaic run from cache load through cache save
pub struct MosaicProcessor {
    cli: Cli,
    engine: FingerprintEngine,
}

impl MosaicProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            engine: FingerprintEngine::new(),
        }
    }

    /// Run the full mosaic pipeline
    ///
    /// Loads prior cache state, fingerprints every candidate (reusing fresh
    /// cached records), builds the similarity index, resolves every tile of
    /// the target, emits the result, and persists the updated cache.
    /// Per-candidate failures are reported and skipped; an unreadable
    /// target, an empty candidate set, or an export failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoCandidates`] when no candidate survives the
    /// scan, [`MosaicError::ImageLoad`] when the target cannot be decoded,
    /// and the underlying error when rendering or cache persistence fails.
    /// Cache persistence runs after output is emitted, so a persist failure
    /// never discards the run's result.
    pub fn process(&mut self) -> Result<()> {
        let Self { cli, engine } = self;

        let mut store = CacheStore::load(&cli.cache);
        let records = collect_candidates(cli, engine, &mut store);

        let index = SimilarityIndex::build(records);
        if index.is_empty() {
            return Err(MosaicError::NoCandidates);
        }

        // By convention the first candidate doubles as the mosaic target.
        let target_path = cli.files.first().cloned().ok_or(MosaicError::NoCandidates)?;
        let target = image::open(&target_path).map_err(|source| MosaicError::ImageLoad {
            path: target_path,
            source,
        })?;

        let multiplier = grid_multiplier(index.len());
        // Allow print for user feedback on the chosen grid size
        #[allow(clippy::print_stderr)]
        if !cli.quiet {
            eprintln!(
                "Using a {multiplier}x{multiplier} grid over {} candidates",
                index.len()
            );
        }

        let assignments = assemble(&target, &index, engine, cli.tile_size)?;

        match &cli.output {
            Some(path) => render_mosaic(&assignments, cli.tile_size, multiplier, path)?,
            None => print_assignments(&assignments),
        }

        store.save(&cli.cache)
    }
}

// Fingerprints every candidate, reusing fresh cache entries. Failed
// candidates are reported individually and dropped; survivors come back in
// input order for the index build.
fn collect_candidates(
    cli: &Cli,
    engine: &mut FingerprintEngine,
    store: &mut CacheStore,
) -> Vec<ThumbnailRecord> {
    let progress = cli
        .should_show_progress()
        .then(|| ProgressManager::new(cli.files.len()));

    let mut records = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        if let Some(ref bar) = progress {
            bar.start_candidate(path);
        }

        match candidate_record(path, engine, store) {
            Ok(record) => records.push(record),
            Err(error) => report_skip(cli.quiet, path, &error),
        }

        if let Some(ref bar) = progress {
            bar.candidate_done();
        }
    }

    if let Some(ref bar) = progress {
        bar.finish();
    }

    records
}

// Resolves one candidate to a cached or freshly computed record.
fn candidate_record(
    path: &Path,
    engine: &mut FingerprintEngine,
    store: &mut CacheStore,
) -> Result<ThumbnailRecord> {
    let identity = CacheStore::canonical_identity(path)?;

    let metadata = std::fs::metadata(&identity).map_err(|source| MosaicError::FileSystem {
        path: identity.clone(),
        operation: "stat",
        source,
    })?;
    let modified = metadata
        .modified()
        .map_err(|source| MosaicError::FileSystem {
            path: identity.clone(),
            operation: "read modification time",
            source,
        })?;
    let name = identity
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = store.get_or_compute(&identity, &name, modified, || {
        let decoded = image::open(&identity).map_err(|source| MosaicError::ImageLoad {
            path: identity.clone(),
            source,
        })?;
        Ok(engine.fingerprint(&decoded))
    })?;

    Ok(record.clone())
}

// Allow print for per-candidate diagnostics identifying the skipped source
#[allow(clippy::print_stderr)]
fn report_skip(quiet: bool, path: &Path, error: &MosaicError) {
    if !quiet {
        eprintln!("Skipping candidate '{}': {error}", path.display());
    }
}

// Allow print for the assignment listing consumed by external renderers
#[allow(clippy::print_stdout)]
fn print_assignments(assignments: &[TileAssignment]) {
    for assignment in assignments {
        println!(
            "{}\t{}\t{}",
            assignment.row, assignment.column, assignment.name
        );
    }
}
