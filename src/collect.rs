//! Scanning a results folder for the runs it holds.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::convention::{Convention, RunFile};
use crate::error::ScanError;

/// Seeds of the runs that left their info file in `folder`, under the
/// default convention.
///
/// A seed shows up once no matter how many files mention it. The folder is
/// scanned in place; the process working directory is never touched.
pub fn grab_seeds(folder: impl AsRef<Path>) -> Result<BTreeSet<u64>, ScanError> {
    grab_seeds_with(folder, &Convention::default())
}

/// [`grab_seeds`] under an explicit naming convention.
pub fn grab_seeds_with(
    folder: impl AsRef<Path>,
    convention: &Convention,
) -> Result<BTreeSet<u64>, ScanError> {
    let mut seeds = BTreeSet::new();
    for name in file_names(folder.as_ref(), convention)? {
        if !convention.matches_extension(&name) {
            continue;
        }
        if convention.is_marked(&name) {
            debug!(file = %name, "skipping marked file");
            continue;
        }
        let seed = convention.seed_of(&name)?;
        debug!(file = %name, seed, "collected seed");
        seeds.insert(seed);
    }
    Ok(seeds)
}

/// What one run left behind in the folder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunInventory {
    /// The main info file is present.
    pub info: bool,
    /// Time steps that have an extant-species snapshot.
    pub steps: BTreeSet<u64>,
    /// The network dump is present.
    pub network: bool,
}

/// Per-seed inventory of every recognized run file in `folder`.
///
/// Names that match none of the output shapes are skipped rather than
/// reported, so this also works on folders that mix run files with notes,
/// scripts and whatever else accumulated next to them.
pub fn scan_runs(
    folder: impl AsRef<Path>,
    convention: &Convention,
) -> Result<BTreeMap<u64, RunInventory>, ScanError> {
    let mut runs: BTreeMap<u64, RunInventory> = BTreeMap::new();
    for name in file_names(folder.as_ref(), convention)? {
        match RunFile::classify(&name, convention) {
            Some(RunFile::Info { seed }) => runs.entry(seed).or_default().info = true,
            Some(RunFile::Species { seed, step }) => {
                runs.entry(seed).or_default().steps.insert(step);
            }
            Some(RunFile::Network { seed }) => runs.entry(seed).or_default().network = true,
            None => debug!(file = %name, "not a run file"),
        }
    }
    Ok(runs)
}

/// Names of the regular files in `folder`.
///
/// A name that carries the run-file extension but is not valid UTF-8 would
/// qualify without being parseable, so it aborts the scan; any other
/// non-UTF-8 name is ignored like the rest of the noise.
fn file_names(folder: &Path, convention: &Convention) -> Result<Vec<String>, ScanError> {
    let suffix = convention.suffix();
    let mut names = Vec::new();
    let entries = fs::read_dir(folder).map_err(|source| ScanError::folder(folder, source))?;
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::folder(folder, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| ScanError::folder(folder, source))?;
        if !file_type.is_file() {
            debug!(entry = %entry.path().display(), "skipping non-file entry");
            continue;
        }
        let raw = entry.file_name();
        match raw.to_str() {
            Some(name) => names.push(name.to_owned()),
            None if raw.as_encoded_bytes().ends_with(suffix.as_bytes()) => {
                return Err(ScanError::NonUtf8Name {
                    file: raw.to_string_lossy().into_owned(),
                });
            }
            None => {}
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs::File;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    fn touch(folder: &Path, name: &str) {
        File::create(folder.join(name)).unwrap();
    }

    #[test]
    fn collects_unmarked_xml_files_only() {
        let dir = tempdir().unwrap();
        for name in ["xx0001.xml", "xx0002.xml", "xxs003.xml", "xx0004.txt"] {
            touch(dir.path(), name);
        }
        let seeds = grab_seeds(dir.path()).unwrap();
        assert_eq!(seeds, BTreeSet::from([1, 2]));
    }

    #[test]
    fn empty_folder_yields_empty_set() {
        let dir = tempdir().unwrap();
        assert!(grab_seeds(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn equal_seeds_collapse_to_one_entry() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "xx0007.xml");
        touch(dir.path(), "yz0007.xml");
        let seeds = grab_seeds(dir.path()).unwrap();
        assert_eq!(seeds, BTreeSet::from([7]));
    }

    #[test]
    fn missing_folder_is_an_access_error() {
        let err = grab_seeds("/no/such/folder/anywhere").unwrap_err();
        assert!(matches!(err, ScanError::Folder { .. }));
    }

    #[test]
    fn non_numeric_field_aborts_the_scan() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "xx0001.xml");
        touch(dir.path(), "xxabcd.xml");
        let err = grab_seeds(dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::BadSeed { .. }));
    }

    #[test]
    fn short_names_abort_the_scan() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "x.xml");
        let err = grab_seeds(dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::NoSeedField { .. }));
    }

    #[test]
    fn working_directory_is_untouched() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "xx0042.xml");
        let before = env::current_dir().unwrap();
        grab_seeds(dir.path()).unwrap();
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn directories_do_not_qualify() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("zz9999.xml")).unwrap();
        touch(dir.path(), "xx0001.xml");
        let seeds = grab_seeds(dir.path()).unwrap();
        assert_eq!(seeds, BTreeSet::from([1]));
    }

    #[test]
    fn leading_zeros_are_plain_base_10() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "xx000900.xml");
        let seeds = grab_seeds(dir.path()).unwrap();
        assert_eq!(seeds, BTreeSet::from([900]));
    }

    #[test]
    fn custom_conventions_drive_the_filter() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "run128.dat");
        touch(dir.path(), "runx99.dat");
        touch(dir.path(), "run7.xml");
        let convention = Convention {
            prefix_len: 3,
            marker: 'x',
            extension: "dat".to_owned(),
        };
        let seeds = grab_seeds_with(dir.path(), &convention).unwrap();
        assert_eq!(seeds, BTreeSet::from([128]));
    }

    #[test]
    fn inventory_groups_files_by_seed() {
        let dir = tempdir().unwrap();
        for name in [
            "w-42.xml",
            "w-species-42-t2.xml",
            "w-species-42-t4.xml",
            "w-network-42.graphml",
            "w-7.xml",
            "README.md",
        ] {
            touch(dir.path(), name);
        }
        let runs = scan_runs(dir.path(), &Convention::default()).unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs[&42].info);
        assert!(runs[&42].network);
        assert_eq!(runs[&42].steps, BTreeSet::from([2, 4]));
        assert!(runs[&7].info);
        assert!(!runs[&7].network);
        assert!(runs[&7].steps.is_empty());
    }

    #[test]
    fn snapshots_never_count_as_seeds_on_their_own() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "w-species-42-t2.xml");
        touch(dir.path(), "w-network-42.graphml");
        assert!(grab_seeds(dir.path()).unwrap().is_empty());
    }
}
