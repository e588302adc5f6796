//! Process-wide roster memo.
//!
//! A roster file is read at most once per process: the first successful load
//! for a path is kept for the lifetime of the process and every later call
//! gets the same shared `Arc`. Failed loads are not remembered.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::EngineResult;
use crate::models::Roster;

use super::loader::load_roster;

type RosterMemo = RwLock<HashMap<PathBuf, Arc<Roster>>>;

static ROSTER_MEMO: OnceLock<RosterMemo> = OnceLock::new();

fn memo() -> &'static RosterMemo {
    ROSTER_MEMO.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the roster for `path`, loading it on first use.
///
/// The memo is keyed by the canonical path when the file exists, so
/// `./roster.csv` and its absolute form share one entry.
///
/// # Errors
///
/// Propagates the load error from [`load_roster`] on a cache miss.
pub fn cached_roster<P: AsRef<Path>>(path: P) -> EngineResult<Arc<Roster>> {
    let path = path.as_ref();
    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if let Some(roster) = memo()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        debug!(path = %key.display(), "Roster served from memo");
        return Ok(Arc::clone(roster));
    }

    let mut entries = memo().write().unwrap_or_else(PoisonError::into_inner);
    // Another caller may have loaded it while we waited for the write lock.
    if let Some(roster) = entries.get(&key) {
        return Ok(Arc::clone(roster));
    }

    let roster = Arc::new(load_roster(path)?);
    entries.insert(key, Arc::clone(&roster));
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::error::EngineError;

    fn write_roster(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_second_call_returns_same_roster() {
        let file = write_roster(
            "employee_id,name,role,department,location,comp_usd\nE1,Ada,Engineer,Eng,Boston,100\n",
        );

        let first = cached_roster(file.path()).unwrap();
        let second = cached_roster(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_file_read_at_most_once() {
        let mut file = write_roster(
            "employee_id,name,role,department,location,comp_usd\nE1,Ada,Engineer,Eng,Boston,100\n",
        );
        let first = cached_roster(file.path()).unwrap();

        file.write_all(b"E2,Grace,Director,Research,NYC,200\n").unwrap();
        file.flush().unwrap();

        let second = cached_roster(file.path()).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late_roster.csv");

        let err = cached_roster(&path).unwrap_err();
        assert!(matches!(err, EngineError::RosterNotFound { .. }));

        fs::write(
            &path,
            "employee_id,name,role,department,location,comp_usd\nE1,Ada,Engineer,Eng,Boston,100\n",
        )
        .unwrap();
        assert_eq!(cached_roster(&path).unwrap().len(), 1);
    }
}
