use inquire::InquireError;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("creation cancelled")]
    Cancelled,

    #[error("unknown template `{id}`, expected one of: {}", .known.join(", "))]
    UnknownTemplate { id: String, known: Vec<&'static str> },

    #[error("no directory for template `{id}` found (searched {})", display_paths(.searched))]
    TemplateNotFound { id: String, searched: Vec<PathBuf> },

    #[error("{} exists but is not a directory", .0.display())]
    DestinationNotDirectory(PathBuf),

    #[error("failed to create {}: {source}", .path.display())]
    CreateRoot {
        path: PathBuf,
        source: fs_extra::error::Error,
    },

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<InquireError> for ScaffoldError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                ScaffoldError::Cancelled
            }
            other => ScaffoldError::Prompt(other.to_string()),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".into();
    }

    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
