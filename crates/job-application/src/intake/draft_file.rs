use std::fs;
use std::path::{Path, PathBuf};

use super::domain::ApplicationDraft;

/// Failure to turn a JSON file on disk into a draft. Both variants keep the path.
#[derive(Debug, thiserror::Error)]
pub enum DraftFileError {
    #[error("failed to read draft {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("draft {path:?} is not a valid application: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl DraftFileError {
    pub fn path(&self) -> &Path {
        match self {
            DraftFileError::Read { path, .. } | DraftFileError::Parse { path, .. } => path,
        }
    }
}

pub fn load_draft(path: &Path) -> Result<ApplicationDraft, DraftFileError> {
    let raw = fs::read_to_string(path).map_err(|source| DraftFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DraftFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
