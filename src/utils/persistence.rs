use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    errors::LedgerError,
    ledger::{Ledger, Snapshot},
};

const TMP_SUFFIX: &str = "tmp";

/// Staging path next to `path`: `record.txt` stages to `record.txt.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to the staging path and renames it over `path`, so a failed
/// write never truncates the existing file.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Writes the provided ledger to disk atomically by staging to a temporary file.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let mut contents = ledger.serialize().join("\n");
    contents.push('\n');
    write_atomic(path, &contents)?;
    info!(path = %path.display(), records = ledger.len(), "ledger saved");
    Ok(())
}

/// Reads a ledger file. A missing file is not an error and yields `None`.
pub fn load_snapshot_from_file(path: &Path) -> Result<Option<Snapshot>, LedgerError> {
    match fs::read_to_string(path) {
        Ok(data) => {
            let snapshot = Ledger::deserialize(data.lines());
            debug!(
                path = %path.display(),
                records = snapshot.records.len(),
                "ledger file read"
            );
            Ok(Some(snapshot))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Record, Taxonomy};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loaded = load_snapshot_from_file(&dir.path().join("record.txt")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_preserves_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("record.txt");
        let mut ledger = Ledger::new(100);
        ledger.add_batch("food meal -50, bonus q1 20", &Taxonomy::reference());

        save_ledger_to_file(&ledger, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "70\nfood, meal, -50\nbonus, q1, 20\n");
        assert!(!dir.path().join("nested").join("record.txt.tmp").exists());

        let snapshot = load_snapshot_from_file(&path).unwrap().unwrap();
        assert_eq!(snapshot.balance, Some(70));
        assert_eq!(
            snapshot.records,
            vec![Record::new("food", "meal", -50), Record::new("bonus", "q1", 20)]
        );
    }

    #[test]
    fn staging_path_never_equals_the_target() {
        assert_eq!(tmp_path(Path::new("a/record.txt")), Path::new("a/record.txt.tmp"));
        assert_eq!(tmp_path(Path::new("ledger")), Path::new("ledger.tmp"));
        assert_eq!(tmp_path(Path::new("foo.tmp")), Path::new("foo.tmp.tmp"));
    }

    #[test]
    fn ledger_named_like_a_staging_file_still_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.tmp");
        let ledger = Ledger::load(3, [Record::new("bus", "fare", -2)]);

        save_ledger_to_file(&ledger, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3\nbus, fare, -2\n");
        assert!(!dir.path().join("foo.tmp.tmp").exists());
    }

    #[test]
    fn empty_file_has_no_balance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        fs::write(&path, "").unwrap();
        let snapshot = load_snapshot_from_file(&path).unwrap().unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
