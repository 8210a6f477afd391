// ccprune-core/src/application/prune.rs
//
// USE CASE: Load -> Scan -> Diff -> Confirm -> Delete -> Report.
// Strictly linear; every phase either advances or ends the run.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::domain::error::DeletionError;
use crate::domain::plan::DeletionPlan;
use crate::domain::ports::{Confirmer, FileRemover, ManifestSource, TreeScanner};
use crate::domain::report::DeletionReport;
use crate::domain::settings::PruneSettings;
use crate::error::PruneError;
use crate::infrastructure::error::ScanError;
use crate::infrastructure::fs::resolve_root;

/// Adapters injected into the use case.
pub struct PrunePorts<'a> {
    pub manifest: &'a dyn ManifestSource,
    pub scanner: &'a dyn TreeScanner,
    pub confirmer: &'a mut dyn Confirmer,
    pub remover: &'a dyn FileRemover,
}

#[derive(Debug)]
pub enum PruneOutcome {
    NothingToDelete,
    Cancelled { planned: usize },
    DryRun { planned: usize },
    Completed(DeletionReport),
}

impl PruneOutcome {
    /// False only when some deletion failed.
    pub fn is_success(&self) -> bool {
        match self {
            PruneOutcome::Completed(report) => report.is_complete(),
            _ => true,
        }
    }
}

#[instrument(skip(ports, settings, out))]
pub fn run_prune(
    mut ports: PrunePorts<'_>,
    manifest_path: &Path,
    settings: &PruneSettings,
    out: &mut dyn Write,
) -> Result<PruneOutcome, PruneError> {
    let root = resolve_root(&settings.root).map_err(|source| ScanError::Root {
        path: settings.root.clone(),
        source,
    })?;
    let filter = settings.filter();

    // 1. Load
    let keep = ports.manifest.load(manifest_path, &root, &filter)?;
    info!(kept = keep.len(), "Keep-set built");

    // 2. Scan
    let scanned = ports.scanner.scan(&root, &filter)?;
    info!(root = ?root, candidates = scanned.len(), "Tree scanned");

    // 3. Diff
    let plan = DeletionPlan::compute(scanned, &keep);
    if plan.is_empty() {
        writeln!(out, "No files to delete.")?;
        return Ok(PruneOutcome::NothingToDelete);
    }
    let planned = plan.len();

    if settings.dry_run {
        writeln!(out, "{}", plan.preview(planned))?;
        writeln!(out, "Dry run: no files were deleted.")?;
        return Ok(PruneOutcome::DryRun { planned });
    }

    // 4. Confirm
    writeln!(out, "{}", plan.preview(settings.preview_limit))?;
    out.flush()?;
    if !settings.assume_yes && !ports.confirmer.confirm("Proceed with deletion?")? {
        writeln!(out, "Deletion canceled.")?;
        info!(planned, "Cancelled by user");
        return Ok(PruneOutcome::Cancelled { planned });
    }

    // 5. Delete
    let report = delete_all(plan, ports.remover, out);

    // 6. Report
    writeln!(out, "{report}")?;
    info!(
        deleted = report.deleted_count(),
        failed = report.failures().len(),
        "Prune finished"
    );
    Ok(PruneOutcome::Completed(report))
}

/// Removes every planned path; a failure is printed and recorded, never fatal.
/// Losing the console does not stop the batch either.
fn delete_all(
    plan: DeletionPlan,
    remover: &dyn FileRemover,
    out: &mut dyn Write,
) -> DeletionReport {
    let mut report = DeletionReport::new(plan.len());

    for path in plan.into_paths() {
        match remover.remove(&path) {
            Ok(()) => {
                debug!(path = ?path, "Deleted");
                report.record_deleted();
            }
            Err(source) => {
                let failure = DeletionError { path, source };
                warn!(error = %failure, "Deletion failed");
                if let Err(err) = writeln!(out, "{failure}") {
                    warn!(error = %err, "Could not report deletion failure");
                }
                report.record_failure(failure);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::SourceFilter;
    use crate::domain::keep_set::KeepSet;
    use crate::infrastructure::error::ManifestError;
    use crate::infrastructure::{AutoConfirm, FsRemover, JsonManifest, WalkScanner};
    use anyhow::Result;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    /// Replays canned answers and counts how often it was asked.
    struct ScriptedConfirmer {
        answers: VecDeque<bool>,
        asked: usize,
    }

    impl ScriptedConfirmer {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: 0,
            }
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, _question: &str) -> io::Result<bool> {
            self.asked += 1;
            Ok(self.answers.pop_front().unwrap_or(false))
        }
    }

    /// Records calls and fails for the configured paths.
    #[derive(Default)]
    struct RecordingRemover {
        failing: Vec<PathBuf>,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl FileRemover for RecordingRemover {
        fn remove(&self, path: &Path) -> io::Result<()> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if self.failing.iter().any(|p| p == path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(())
        }
    }

    struct FixedScanner(Vec<PathBuf>);

    impl TreeScanner for FixedScanner {
        fn scan(&self, _root: &Path, _filter: &SourceFilter) -> Result<Vec<PathBuf>, PruneError> {
            Ok(self.0.clone())
        }
    }

    struct FixedManifest(Vec<PathBuf>);

    impl ManifestSource for FixedManifest {
        fn load(
            &self,
            _manifest: &Path,
            _base_dir: &Path,
            _filter: &SourceFilter,
        ) -> Result<KeepSet, PruneError> {
            Ok(self.0.iter().cloned().collect())
        }
    }

    struct Fixture {
        dir: TempDir,
        manifest: PathBuf,
    }

    impl Fixture {
        fn new(manifest_json: &str, files: &[&str]) -> Result<Self> {
            let dir = tempdir()?;
            let manifest = dir.path().join("compile_commands.json");
            fs::write(&manifest, manifest_json)?;
            for file in files {
                let path = dir.path().join(file);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, "/* source */")?;
            }
            Ok(Self { dir, manifest })
        }

        fn settings(&self) -> PruneSettings {
            PruneSettings {
                root: self.dir.path().to_path_buf(),
                ..Default::default()
            }
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.dir.path().join(rel)
        }

        fn run(
            &self,
            settings: &PruneSettings,
            confirmer: &mut dyn Confirmer,
        ) -> Result<(PruneOutcome, String)> {
            let mut out = Vec::new();
            let ports = PrunePorts {
                manifest: &JsonManifest,
                scanner: &WalkScanner,
                confirmer,
                remover: &FsRemover,
            };
            let outcome = run_prune(ports, &self.manifest, settings, &mut out)?;
            Ok((outcome, String::from_utf8(out)?))
        }
    }

    #[test]
    fn test_unlisted_file_is_deleted_after_confirmation() -> Result<()> {
        let fx = Fixture::new(r#"[{"file": "keep.c"}]"#, &["keep.c", "drop.c"])?;
        let mut confirmer = ScriptedConfirmer::answering(&[true]);

        let (outcome, out) = fx.run(&fx.settings(), &mut confirmer)?;

        assert_eq!(confirmer.asked, 1);
        assert!(outcome.is_success());
        assert!(fx.path("keep.c").exists());
        assert!(!fx.path("drop.c").exists());
        assert!(out.contains("Found 1 files to delete:"));
        assert!(out.contains(&format!("  [1] {}", fx.path("drop.c").display())));
        assert!(out.ends_with("Successfully deleted 1/1 files\n"));
        Ok(())
    }

    #[test]
    fn test_missing_manifest_entry_is_harmless() -> Result<()> {
        let fx = Fixture::new(r#"[{"file": "ghost.c"}]"#, &["other.c"])?;

        let (outcome, _) = fx.run(&fx.settings(), &mut AutoConfirm)?;

        match outcome {
            PruneOutcome::Completed(report) => {
                assert_eq!(report.deleted_count(), 1);
                assert!(report.is_complete());
                assert!(!fx.path("other.c").exists());
            }
            other => anyhow::bail!("Expected Completed, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_empty_tree_does_not_prompt() -> Result<()> {
        let fx = Fixture::new(r#"[{"file": "a.c"}]"#, &[])?;
        let mut confirmer = ScriptedConfirmer::answering(&[true]);

        let (outcome, out) = fx.run(&fx.settings(), &mut confirmer)?;

        assert!(matches!(outcome, PruneOutcome::NothingToDelete));
        assert_eq!(out, "No files to delete.\n");
        assert_eq!(confirmer.asked, 0);
        Ok(())
    }

    #[test]
    fn test_assume_yes_skips_prompt() -> Result<()> {
        let fx = Fixture::new("[]", &["a.c", "b.S"])?;
        let mut confirmer = ScriptedConfirmer::answering(&[false]);
        let settings = PruneSettings {
            assume_yes: true,
            ..fx.settings()
        };

        let (outcome, _) = fx.run(&settings, &mut confirmer)?;

        assert_eq!(confirmer.asked, 0);
        assert!(matches!(outcome, PruneOutcome::Completed(ref r) if r.deleted_count() == 2));
        assert!(!fx.path("a.c").exists());
        assert!(!fx.path("b.S").exists());
        Ok(())
    }

    #[test]
    fn test_malformed_manifest_stops_before_scan() -> Result<()> {
        let fx = Fixture::new(r#"[{"file": "#, &["a.c"])?;

        let mut out = Vec::new();
        let ports = PrunePorts {
            manifest: &JsonManifest,
            scanner: &WalkScanner,
            confirmer: &mut AutoConfirm,
            remover: &FsRemover,
        };
        let result = run_prune(ports, &fx.manifest, &fx.settings(), &mut out);

        assert!(matches!(
            result,
            Err(PruneError::Manifest(ManifestError::Parse { .. }))
        ));
        assert!(out.is_empty());
        assert!(fx.path("a.c").exists());
        Ok(())
    }

    #[test]
    fn test_refusal_cancels_without_deleting() -> Result<()> {
        let fx = Fixture::new("[]", &["a.c"])?;
        let mut confirmer = ScriptedConfirmer::answering(&[false]);

        let (outcome, out) = fx.run(&fx.settings(), &mut confirmer)?;

        assert!(matches!(outcome, PruneOutcome::Cancelled { planned: 1 }));
        assert!(out.ends_with("Deletion canceled.\n"));
        assert!(fx.path("a.c").exists());
        Ok(())
    }

    #[test]
    fn test_second_run_finds_nothing() -> Result<()> {
        let fx = Fixture::new(
            r#"[{"file": "src/keep.c"}, {"file": "boot.S"}]"#,
            &["src/keep.c", "src/drop.c", "boot.S", "old/boot.s"],
        )?;

        fx.run(&fx.settings(), &mut AutoConfirm)?;
        let (second, out) = fx.run(&fx.settings(), &mut AutoConfirm)?;

        assert!(matches!(second, PruneOutcome::NothingToDelete));
        assert_eq!(out, "No files to delete.\n");
        assert!(fx.path("src/keep.c").exists());
        assert!(fx.path("boot.S").exists());
        Ok(())
    }

    #[test]
    fn test_dry_run_lists_everything_and_deletes_nothing() -> Result<()> {
        let names: Vec<String> = (0..7).map(|i| format!("f{i}.c")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let fx = Fixture::new("[]", &refs)?;
        let settings = PruneSettings {
            dry_run: true,
            ..fx.settings()
        };

        let (outcome, out) = fx.run(&settings, &mut AutoConfirm)?;

        assert!(matches!(outcome, PruneOutcome::DryRun { planned: 7 }));
        assert!(out.contains("  [7] "));
        assert!(!out.contains("more"));
        assert!(refs.iter().all(|name| fx.path(name).exists()));
        Ok(())
    }

    #[test]
    fn test_preview_is_truncated_to_limit() -> Result<()> {
        let names: Vec<String> = (0..8).map(|i| format!("f{i}.s")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let fx = Fixture::new("[]", &refs)?;

        let (_, out) = fx.run(&fx.settings(), &mut ScriptedConfirmer::answering(&[false]))?;

        assert!(out.contains("  [5] "));
        assert!(!out.contains("  [6] "));
        assert!(out.contains("  ... and 3 more"));
        Ok(())
    }

    #[test]
    fn test_failed_deletion_does_not_stop_the_batch() -> Result<()> {
        let scanned = vec![
            PathBuf::from("/src/a.c"),
            PathBuf::from("/src/b.c"),
            PathBuf::from("/src/keep.c"),
            PathBuf::from("/src/c.c"),
        ];
        let remover = RecordingRemover {
            failing: vec![PathBuf::from("/src/b.c")],
            ..Default::default()
        };
        let settings = PruneSettings {
            root: PathBuf::from("/src"),
            assume_yes: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        let ports = PrunePorts {
            manifest: &FixedManifest(vec![PathBuf::from("/src/keep.c")]),
            scanner: &FixedScanner(scanned),
            confirmer: &mut AutoConfirm,
            remover: &remover,
        };

        let outcome = run_prune(ports, Path::new("unused.json"), &settings, &mut out)?;
        let out = String::from_utf8(out)?;

        assert!(!outcome.is_success());
        assert_eq!(
            *remover.calls.borrow(),
            vec![
                PathBuf::from("/src/a.c"),
                PathBuf::from("/src/b.c"),
                PathBuf::from("/src/c.c"),
            ]
        );
        assert!(out.contains("Error deleting /src/b.c: denied"));
        assert!(out.ends_with("Successfully deleted 2/3 files\n"));
        Ok(())
    }

    /// Console whose every write fails, like stdout piped into a closed reader.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lost_console_does_not_stop_the_batch() {
        let plan = DeletionPlan::compute(
            ["/src/a.c", "/src/b.c", "/src/c.c"].map(PathBuf::from),
            &KeepSet::default(),
        );
        let remover = RecordingRemover {
            failing: vec![PathBuf::from("/src/a.c")],
            ..Default::default()
        };

        let report = delete_all(plan, &remover, &mut BrokenPipe);

        assert_eq!(remover.calls.borrow().len(), 3);
        assert_eq!(report.deleted_count(), 2);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.to_string(), "Successfully deleted 2/3 files");
    }

    #[test]
    fn test_kept_paths_are_never_removed() -> Result<()> {
        let kept: Vec<PathBuf> = (0..4).map(|i| PathBuf::from(format!("/t/k{i}.c"))).collect();
        let mut scanned: Vec<PathBuf> = (0..4).map(|i| PathBuf::from(format!("/t/d{i}.c"))).collect();
        scanned.extend(kept.iter().cloned());
        scanned.reverse();
        let remover = RecordingRemover::default();
        let settings = PruneSettings {
            root: PathBuf::from("/t"),
            assume_yes: true,
            ..Default::default()
        };
        let ports = PrunePorts {
            manifest: &FixedManifest(kept.clone()),
            scanner: &FixedScanner(scanned),
            confirmer: &mut AutoConfirm,
            remover: &remover,
        };

        run_prune(ports, Path::new("unused.json"), &settings, &mut io::sink())?;

        let calls = remover.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|p| !kept.contains(p)));
        Ok(())
    }
}
