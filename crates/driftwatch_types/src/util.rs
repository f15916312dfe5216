use crate::error::UtilError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub enum FileName {
    DriftReport,
    DriftSummary,
}

impl FileName {
    pub fn to_str(&self) -> &'static str {
        match self {
            FileName::DriftReport => "drift_report.json",
            FileName::DriftSummary => "drift_summary.json",
        }
    }
}

pub struct ProfileFuncs {}

impl ProfileFuncs {
    pub fn to_pretty_json<T: Serialize>(object: &T) -> Result<String, UtilError> {
        serde_json::to_string_pretty(object).map_err(|e| UtilError::SerializeError(e.to_string()))
    }

    pub fn save_to_json<T>(
        model: &T,
        path: Option<PathBuf>,
        filename: &str,
    ) -> Result<PathBuf, UtilError>
    where
        T: Serialize,
    {
        let json = Self::to_pretty_json(model)?;

        let write_path = if let Some(mut new_path) = path {
            // ensure .json extension
            new_path.set_extension("json");

            if !new_path.exists() {
                let parent_path = new_path.parent().ok_or(UtilError::GetParentPathError)?;

                std::fs::create_dir_all(parent_path)
                    .map_err(|_| UtilError::CreateDirectoryError)?;
            }

            new_path
        } else {
            PathBuf::from(filename)
        };

        std::fs::write(&write_path, json).map_err(|_| UtilError::WriteError)?;

        Ok(write_path)
    }

    pub fn load_from_json<T>(path: &Path) -> Result<T, UtilError>
    where
        T: DeserializeOwned,
    {
        let file = std::fs::read_to_string(path).map_err(|_| UtilError::ReadError)?;

        serde_json::from_str(&file).map_err(|e| UtilError::DeSerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        name: String,
        value: f64,
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot");

        let snapshot = Snapshot {
            name: "psi".to_string(),
            value: 0.42,
        };

        let written = ProfileFuncs::save_to_json(&snapshot, Some(path), "snapshot.json").unwrap();
        assert_eq!(written.extension().unwrap(), "json");

        let loaded: Snapshot = ProfileFuncs::load_from_json(&written).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result: Result<Snapshot, _> =
            ProfileFuncs::load_from_json(Path::new("does_not_exist.json"));
        assert!(matches!(result, Err(UtilError::ReadError)));
    }
}
