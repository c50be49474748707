//! Puzzle inputs on disk, laid out as `<dir>/<year>/dayNN.txt`

use crate::error::InputError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct InputStore {
    dir: PathBuf,
    /// Used for every year/day when set
    file_override: Option<PathBuf>,
}

impl InputStore {
    pub fn new(dir: PathBuf, file_override: Option<PathBuf>) -> Self {
        Self { dir, file_override }
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.file_override {
            Some(path) => path.clone(),
            None => self.dir.join(year.to_string()).join(format!("day{:02}.txt", day)),
        }
    }

    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        read_file(&path)
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_layout() {
        let store = InputStore::new(PathBuf::from("inputs"), None);
        assert_eq!(store.path(2023, 5), PathBuf::from("inputs/2023/day05.txt"));
        assert_eq!(store.path(2023, 16), PathBuf::from("inputs/2023/day16.txt"));
    }

    #[test]
    fn test_read_existing() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("2023")).unwrap();
        std::fs::write(temp.path().join("2023/day01.txt"), "1abc2\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), None);
        assert_eq!(store.read(2023, 1).unwrap(), "1abc2\n");
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);
        let err = store.read(2023, 2).unwrap_err();
        assert!(matches!(err, InputError::NotFound(p) if p.ends_with("2023/day02.txt")));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("2023/day03.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);
        assert!(matches!(store.read(2023, 3), Err(InputError::Io { .. })));
    }

    #[test]
    fn test_override_wins() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        std::fs::write(&file, "custom").unwrap();

        let store = InputStore::new(PathBuf::from("does-not-exist"), Some(file.clone()));
        assert_eq!(store.path(2023, 9), file);
        assert_eq!(store.read(2023, 9).unwrap(), "custom");
    }
}
