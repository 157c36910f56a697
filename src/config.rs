use derive_builder::Builder;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::{error::ScaffoldError, trace};

/// Prefix of every template directory name, `template-<id>`.
pub const TEMPLATE_DIR_PREFIX: &str = "template-";

/// Places where template directories may live.
#[derive(Builder, Debug, Clone, Default)]
#[builder(default)]
pub struct TemplateDirs {
    /// Explicit `--templates-dir`. When set, nothing else is searched.
    #[builder(setter(into, strip_option))]
    override_dir: Option<PathBuf>,
    /// Directory holding the running executable.
    #[builder(setter(into, strip_option))]
    install_dir: Option<PathBuf>,
    /// Per-user data directory.
    #[builder(setter(into, strip_option))]
    data_dir: Option<PathBuf>,
    /// Templates shipped alongside the crate sources.
    #[builder(setter(into, strip_option))]
    bundled_dir: Option<PathBuf>,
}

impl TemplateDirs {
    /// Create a new [`TemplateDirs`] builder
    #[must_use]
    pub fn builder() -> TemplateDirsBuilder {
        TemplateDirsBuilder::create_empty()
    }

    /// Default search locations, preceded by `override_dir` when given.
    #[must_use]
    pub fn default_paths(override_dir: Option<PathBuf>) -> Self {
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let data_dir = ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.data_dir().to_path_buf());

        Self {
            override_dir,
            install_dir,
            data_dir,
            bundled_dir: Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")),
        }
    }

    /// Roots searched for `template-<id>` directories, in order.
    ///
    /// - `--templates-dir`, exclusively, if given
    /// - `<exe dir>/templates`
    /// - `<exe dir>/../share/create-template/templates`
    /// - `<data dir>/templates`
    /// - the `templates` directory of the crate sources
    #[must_use]
    pub fn roots(&self) -> Vec<PathBuf> {
        if let Some(dir) = &self.override_dir {
            return vec![dir.clone()];
        }

        let mut roots = Vec::new();

        if let Some(install) = &self.install_dir {
            roots.push(install.join("templates"));
            roots.push(
                install
                    .join("..")
                    .join("share")
                    .join(env!("CARGO_PKG_NAME"))
                    .join("templates"),
            );
        }
        if let Some(data) = &self.data_dir {
            roots.push(data.join("templates"));
        }
        if let Some(bundled) = &self.bundled_dir {
            roots.push(bundled.clone());
        }

        roots
    }

    /// Returns the directory of template `id` from the first root that has it.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::TemplateNotFound`] if no root contains a
    /// `template-<id>` directory.
    pub fn locate(&self, id: &str) -> Result<PathBuf, ScaffoldError> {
        let roots = self.roots();
        let dir_name = format!("{TEMPLATE_DIR_PREFIX}{id}");

        for root in &roots {
            let candidate = root.join(&dir_name);
            trace!("Looking for template at {}", candidate.display());

            if candidate.is_dir() {
                return Ok(candidate);
            }
        }

        Err(ScaffoldError::TemplateNotFound {
            id: id.to_string(),
            searched: roots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_exclusive() {
        let dirs = TemplateDirs::builder()
            .override_dir("/custom")
            .install_dir("/opt/bin")
            .build()
            .unwrap();

        assert_eq!(dirs.roots(), [PathBuf::from("/custom")]);
    }

    #[test]
    fn search_order() {
        let dirs = TemplateDirs::builder()
            .install_dir("/opt/bin")
            .data_dir("/home/me/.local/share/create-template")
            .bundled_dir("/src/templates")
            .build()
            .unwrap();

        assert_eq!(
            dirs.roots(),
            [
                PathBuf::from("/opt/bin/templates"),
                PathBuf::from("/opt/bin/../share/create-template/templates"),
                PathBuf::from("/home/me/.local/share/create-template/templates"),
                PathBuf::from("/src/templates"),
            ]
        );
    }

    #[test]
    fn locate_first_match() {
        let install = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(install.path().join("templates/template-react")).unwrap();
        std::fs::create_dir(bundled.path().join("template-react")).unwrap();
        std::fs::create_dir(bundled.path().join("template-vue")).unwrap();

        let dirs = TemplateDirs::builder()
            .install_dir(install.path())
            .bundled_dir(bundled.path())
            .build()
            .unwrap();

        assert_eq!(
            dirs.locate("react").unwrap(),
            install.path().join("templates/template-react")
        );
        assert_eq!(dirs.locate("vue").unwrap(), bundled.path().join("template-vue"));
    }

    #[test]
    fn locate_missing() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("template-vue"), "not a directory").unwrap();

        let dirs = TemplateDirs::builder()
            .override_dir(root.path())
            .build()
            .unwrap();

        match dirs.locate("vue") {
            Err(ScaffoldError::TemplateNotFound { id, searched }) => {
                assert_eq!(id, "vue");
                assert_eq!(searched, [root.path().to_path_buf()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn bundled_templates_exist() {
        let dirs = TemplateDirs::default_paths(None);

        for id in crate::registry::template_ids() {
            assert!(dirs.locate(id).is_ok(), "template-{id} is missing");
        }
    }
}
