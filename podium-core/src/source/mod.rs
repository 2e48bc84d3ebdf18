use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::common::error::{PodiumError, Result};
use crate::domain::CompetitionRecord;

/// Supplies the read-only snapshot of competition records.
pub trait RecordSource: Send + Sync {
    fn load(&self) -> Result<Vec<CompetitionRecord>>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Parse a JSON array of competition records.
pub fn parse_records(json: &str) -> Result<Vec<CompetitionRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Records already resident in memory, e.g. a bundled asset.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<CompetitionRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<CompetitionRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_records(json)?))
    }
}

impl RecordSource for StaticSource {
    fn load(&self) -> Result<Vec<CompetitionRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

/// A JSON document on disk, read on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<CompetitionRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|source| PodiumError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let records = parse_records(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded competition records");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_static_source_returns_its_records() {
        let source = StaticSource::from_json(
            r#"[{"title":"Corrida A","distance":"10 km","result":"1º geral","time":"00:40:00","date":"2024-03-15"}]"#,
        )
        .unwrap();
        let records = source.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].distance, "10 km");
    }

    #[test]
    fn test_json_file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"Ultra","date":"2023-08-01"}},{{"title":"Meia","date":"2022-05-01"}}]"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Meia");
    }

    #[test]
    fn test_json_file_source_missing_file_is_io_error() {
        let source = JsonFileSource::new("/definitely/not/here/competitions.json");
        match source.load() {
            Err(PodiumError::Io { path, .. }) => assert!(path.ends_with("competitions.json")),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_array_document_is_json_error() {
        assert!(matches!(parse_records(r#"{"title":"x"}"#), Err(PodiumError::Json(_))));
    }
}
