use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

use crate::content::parse_candidate;
use crate::error::{Result, TrackerError};
use crate::model::Candidate;

/// Extension of candidate source units.
const UNIT_EXTENSION: &str = "md";

/// Load every candidate in `dir`, sorted by `order`.
///
/// Units are discovered in file name order, which also breaks ties between
/// equal `order` values. A missing directory yields an empty roster and an
/// unreadable unit is skipped with a warning. Invalid UTF-8 is replaced
/// rather than dropping the unit.
#[instrument]
pub fn load_candidates(dir: &Path) -> Result<Vec<Candidate>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("content directory does not exist, roster is empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(TrackerError::ContentDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_source_unit(path))
        .sorted()
        .collect();

    let units: Vec<(PathBuf, String)> = paths
        .into_iter()
        .filter_map(|path| match fs::read(&path) {
            Ok(bytes) => {
                let raw = String::from_utf8_lossy(&bytes).into_owned();
                Some((path, raw))
            }
            Err(source) => {
                let err = TrackerError::ReadUnit { path, source };
                warn!(error = %err, "skipping candidate");
                None
            }
        })
        .collect();

    let candidates = collect_candidates(
        units
            .iter()
            .map(|(path, raw)| (path.as_path(), raw.as_str())),
    );
    info!(count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

/// Turn `(path, contents)` pairs into a roster sorted by `order`.
///
/// Each id is the path's file stem. The sort is stable, so candidates with
/// the same order keep the order they were given in.
pub fn collect_candidates<'a, I>(units: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    units
        .into_iter()
        .map(|(path, raw)| {
            let id = unit_id(path);
            debug!(id = %id, "parsing candidate");
            parse_candidate(&id, raw)
        })
        .sorted_by_key(|candidate| candidate.order)
        .collect()
}

fn is_source_unit(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == UNIT_EXTENSION)
}

fn unit_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_load_sorts_by_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b-last.md", "---\nname: Last\n---\n");
        write(dir.path(), "c-first.md", "---\nname: First\norder: 1\n---\n");
        write(dir.path(), "a-second.md", "---\nname: Second\norder: 2\n---\n");
        write(dir.path(), "notes.txt", "---\nname: Ignored\norder: 0\n---\n");
        fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let candidates = load_candidates(dir.path()).unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c-first", "a-second", "b-last"]);
        assert_eq!(candidates[2].order, 999);
    }

    #[test]
    fn test_unordered_candidates_keep_discovery_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            write(dir.path(), &format!("{name}.md"), "## Bio\nText\n");
        }

        let candidates = load_candidates(dir.path()).unwrap();
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "bravo", "charlie", "delta"]);
        assert!(candidates.iter().all(|c| c.order == 999));
    }

    #[test]
    fn test_missing_directory_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = load_candidates(&dir.path().join("missing")).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_empty_directory_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_candidates(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_unit_is_still_loaded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("jose.md"), b"---\nname: Jos\xe9\norder: 3\n---\n").unwrap();
        write(dir.path(), "amy.md", "---\nname: Amy\norder: 1\n---\n");

        let candidates = load_candidates(dir.path()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].id, "jose");
        assert_eq!(candidates[1].name, "Jos\u{FFFD}");
        assert_eq!(candidates[1].order, 3);
    }

    #[test]
    fn test_collect_is_stable_for_ties() {
        let units = [
            (Path::new("/content/candidates/zed.md"), "---\norder: 5\n---\n"),
            (Path::new("/content/candidates/amy.md"), "---\norder: 1\n---\n"),
            (Path::new("/content/candidates/bob.md"), "---\norder: 5\n---\n"),
        ];
        let candidates = collect_candidates(units);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["amy", "zed", "bob"]);
    }
}
