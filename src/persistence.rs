// File: src/persistence.rs
use crate::core::result::LogOddsResult;
use crate::core::types::Granularity;
use crate::error::{LogOddsError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory of stored results, one file per granularity.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, granularity: Granularity) -> PathBuf {
        self.dir
            .join(format!("log-odd-ratios-{}.bin", granularity.as_str()))
    }

    /// Writes the result under its own granularity, replacing any previous
    /// one. Returns the file written.
    pub fn save(&self, result: &LogOddsResult) -> Result<PathBuf> {
        let path = self.path_for(result.granularity());
        save_to_disk(result, &path)?;
        tracing::info!("Saved {} log-odd ratios to {}", result.len(), path.display());
        Ok(path)
    }

    pub fn load(&self, granularity: Granularity) -> Result<LogOddsResult> {
        let path = self.path_for(granularity);
        tracing::info!("Loading {} log-odd ratios from {}", granularity, path.display());
        let result = load_from_disk(&path)?;
        if result.granularity() != granularity {
            return Err(LogOddsError::GranularityMismatch {
                expected: granularity,
                found: result.granularity(),
            });
        }
        Ok(result)
    }
}

/// Bincode keeps `f64` bit-exact, so infinite scores survive the round trip.
/// The file is replaced atomically.
pub fn save_to_disk(result: &LogOddsResult, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, result)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<LogOddsResult> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let result: LogOddsResult = bincode::deserialize_from(reader)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Token;
    use std::collections::HashMap;

    #[test]
    fn file_name_follows_granularity() {
        let store = ResultStore::new("data");
        assert_eq!(
            store.path_for(Granularity::Bigram),
            Path::new("data").join("log-odd-ratios-bigram.bin")
        );
    }

    #[test]
    fn load_rejects_mismatched_granularity() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path());
        let mut scores = HashMap::new();
        scores.insert(Token::from("a"), 1.0);
        let result = LogOddsResult::new(Granularity::Unigram, scores);

        // put a unigram artifact where bigrams are expected
        save_to_disk(&result, &store.path_for(Granularity::Bigram)).unwrap();

        let err = store.load(Granularity::Bigram).unwrap_err();
        assert!(matches!(
            err,
            LogOddsError::GranularityMismatch {
                expected: Granularity::Bigram,
                found: Granularity::Unigram,
            }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path());
        assert!(matches!(
            store.load(Granularity::Unigram),
            Err(LogOddsError::Io(_))
        ));
    }
}
