//! Mirrors a template directory onto disk.

use std::{
    ffi::OsStr,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use crate::{error::ScaffoldError, trace, warn};

/// Entries stored under a placeholder name in templates, so that packaging
/// tools do not act on them, and the name they get in the project.
pub const RENAMED_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub dirs: usize,
}

/// Name an entry called `name` in a template gets in the project.
#[must_use]
pub fn destination_name(name: &OsStr) -> &OsStr {
    RENAMED_FILES
        .iter()
        .find(|(from, _)| name == *from)
        .map_or(name, |(_, to)| OsStr::new(to))
}

/// Copies every entry of `template` into `root`, creating `root` if needed.
///
/// Files are copied byte for byte, in file name order, and entries listed in
/// [`RENAMED_FILES`] are renamed. Nothing is undone on failure.
///
/// # Errors
///
/// [`ScaffoldError::DestinationNotDirectory`] if `root` exists and is not a
/// directory, otherwise any IO error met on the way.
pub fn materialize(template: &Path, root: &Path) -> Result<Summary, ScaffoldError> {
    fs::metadata(template).map_err(|e| ScaffoldError::io(template, e))?;
    prepare_root(root)?;

    let mut summary = Summary::default();

    for entry in WalkDir::new(template)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template).to_path_buf();
            ScaffoldError::Io {
                path,
                source: e.into(),
            }
        })?;

        let Ok(relative) = entry.path().strip_prefix(template) else {
            continue;
        };
        let target = root.join(destination_path(relative));

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::io(&target, e))?;
            summary.dirs += 1;
        } else {
            trace!("{} -> {}", entry.path().display(), target.display());

            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::io(&target, e))?;
            summary.files += 1;
        }
    }

    Ok(summary)
}

fn destination_path(relative: &Path) -> PathBuf {
    relative
        .components()
        .map(|c| destination_name(c.as_os_str()))
        .collect()
}

fn prepare_root(root: &Path) -> Result<(), ScaffoldError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {
            let occupied = fs::read_dir(root)
                .map_err(|e| ScaffoldError::io(root, e))?
                .next()
                .is_some();

            if occupied {
                warn!(
                    "{} is not empty, existing files may be overwritten",
                    root.display()
                );
            }

            Ok(())
        }
        Ok(_) => Err(ScaffoldError::DestinationNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => fs_extra::dir::create_all(root, false)
            .map_err(|source| ScaffoldError::CreateRoot {
                path: root.to_path_buf(),
                source,
            }),
        Err(e) => Err(ScaffoldError::io(root, e)),
    }
}
