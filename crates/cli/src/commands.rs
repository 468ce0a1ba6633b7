//! Command implementations.
//!
//! Every multi-file command reports failures per file and keeps going; the caller decides
//! the exit status from the returned summary.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use modforge_model::{DirectoryDiscovery, SchemaKind};
use modforge_serde::xml::{
    CompareOptions, Difference, find_document_difference, read_xml_file, write_atomic,
};
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

use crate::schemas;

/// Result of loading, saving and comparing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: SchemaKind,
    /// First difference between the original and the saved output, if any.
    pub difference: Option<Difference>,
    /// The saved output.
    pub saved: String,
    pub written: bool,
}

impl FileReport {
    pub fn is_equivalent(&self) -> bool {
        self.difference.is_none()
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.difference {
            None if self.written => write!(f, "OK    {} ({}, written)", self.path.display(), self.kind),
            None => write!(f, "OK    {} ({})", self.path.display(), self.kind),
            Some(difference) => write!(
                f,
                "DIFF  {} ({}): {}",
                self.path.display(),
                self.kind,
                difference
            ),
        }
    }
}

/// Outcome of a batch of files.
#[derive(Debug, Default)]
pub struct VerifySummary {
    pub reports: Vec<FileReport>,
    /// Files that could not be checked at all, with the error message.
    pub errors: Vec<(PathBuf, String)>,
}

impl VerifySummary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_equivalent()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed() + self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn record(&mut self, path: PathBuf, result: anyhow::Result<FileReport>) {
        match result {
            Ok(report) => {
                if let Some(difference) = &report.difference {
                    warn!(path = %path.display(), %difference, "file does not round-trip");
                }
                self.reports.push(report);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file could not be checked");
                self.errors.push((path, format!("{:#}", e)));
            }
        }
    }

    fn sort(&mut self) {
        self.reports.sort_by(|a, b| a.path.cmp(&b.path));
        self.errors.sort_by(|a, b| a.0.cmp(&b.0));
    }
}

impl fmt::Display for VerifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        for (path, error) in &self.errors {
            writeln!(f, "ERROR {}: {}", path.display(), error)?;
        }
        writeln!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Loads `path` with the model its name maps to, saves it, and compares the two.
pub fn check_file(path: &Path, options: &CompareOptions) -> anyhow::Result<FileReport> {
    let kind = SchemaKind::from_path(path)
        .ok_or_else(|| anyhow!("{} has no supported model", path.display()))?;
    let original = read_xml_file(path)?;
    let saved = schemas::round_trip(kind, &original)
        .with_context(|| format!("failed to load and save {} as {}", path.display(), kind))?;
    let difference = find_document_difference(&original, &saved, options)?;

    debug!(path = %path.display(), %kind, equivalent = difference.is_none(), "checked file");
    Ok(FileReport {
        path: path.to_path_buf(),
        kind,
        difference,
        saved,
        written: false,
    })
}

/// Round-trips each file in turn; with `write`, clean results replace the file atomically.
pub fn round_trip_files(files: &[PathBuf], write: bool) -> VerifySummary {
    let options = CompareOptions::round_trip();
    let mut summary = VerifySummary::default();

    for path in files {
        let result = check_file(path, &options).and_then(|mut report| {
            if write && report.is_equivalent() {
                write_atomic(path, report.saved.as_bytes())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                report.written = true;
            }
            Ok(report)
        });
        summary.record(path.clone(), result);
    }

    summary.sort();
    summary
}

/// Compares two documents from disk.
pub fn compare_files(
    expected: &Path,
    actual: &Path,
    options: &CompareOptions,
) -> anyhow::Result<Option<Difference>> {
    let expected_xml = read_xml_file(expected)?;
    let actual_xml = read_xml_file(actual)?;
    find_document_difference(&expected_xml, &actual_xml, options).with_context(|| {
        format!(
            "failed to compare {} with {}",
            expected.display(),
            actual.display()
        )
    })
}

/// Round-trips every supported file under `dir`, at most `jobs` at a time.
pub async fn verify_directory(dir: &Path, jobs: usize) -> anyhow::Result<VerifySummary> {
    let files = DirectoryDiscovery::new(dir)
        .adapted_files()
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    info!(dir = %dir.display(), files = files.len(), jobs, "verifying directory");

    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut tasks = JoinSet::new();
    let mut paths = HashMap::new();
    for (path, _) in files {
        let semaphore = Arc::clone(&semaphore);
        let task_path = path.clone();
        let handle = tasks.spawn(async move { check_file_limited(task_path, semaphore).await });
        paths.insert(handle.id(), path);
    }

    let summary = collect_reports(tasks, paths, dir).await;
    info!(passed = summary.passed(), failed = summary.failed(), "verification finished");
    Ok(summary)
}

/// Drains `tasks`, recording each outcome under the path its task was spawned for,
/// including tasks that panicked or were cancelled.
async fn collect_reports(
    mut tasks: JoinSet<anyhow::Result<FileReport>>,
    mut paths: HashMap<task::Id, PathBuf>,
    dir: &Path,
) -> VerifySummary {
    let mut summary = VerifySummary::default();
    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, result) = match joined {
            Ok((id, result)) => (id, result),
            Err(e) => (e.id(), Err(anyhow!("verification task failed: {}", e))),
        };
        let path = paths.remove(&id).unwrap_or_else(|| dir.to_path_buf());
        summary.record(path, result);
    }

    summary.sort();
    summary
}

async fn check_file_limited(path: PathBuf, semaphore: Arc<Semaphore>) -> anyhow::Result<FileReport> {
    let _permit = semaphore.acquire_owned().await?;
    let report = task::spawn_blocking(move || {
        check_file(&path, &CompareOptions::round_trip())
    })
    .await??;
    Ok(report)
}

/// Renders a file's transfer object as pretty JSON, writing it to `out` when given.
pub fn export_file(file: &Path, out: Option<&Path>) -> anyhow::Result<String> {
    let kind = SchemaKind::from_path(file)
        .ok_or_else(|| anyhow!("{} has no supported model", file.display()))?;
    let xml = read_xml_file(file)?;
    let json = schemas::export_json(kind, &xml)
        .with_context(|| format!("failed to export {}", file.display()))?;

    if let Some(out) = out {
        write_atomic(out, json.as_bytes())
            .with_context(|| format!("failed to write {}", out.display()))?;
        info!(file = %file.display(), out = %out.display(), "exported");
    }
    Ok(json)
}
