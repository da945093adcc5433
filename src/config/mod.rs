//! Run configuration.
//!
//! [`LinkConfig`] is the explicit, fully-resolved input to a link
//! operation. It is assembled from command-line flags layered over an
//! optional TOML [`Settings`] file.
pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Fully-resolved input to a link operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Directory whose entries are linked.
    pub source: PathBuf,
    /// Directory that receives the links.
    pub dest: PathBuf,
    /// When `false`, directory entries are skipped.
    pub recursive: bool,
    /// Names linked even without a leading dot. Duplicates are allowed.
    pub whitelist: Vec<String>,
}

impl LinkConfig {
    /// Config with recursion enabled and an empty whitelist.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            recursive: true,
            whitelist: Vec::new(),
        }
    }

    /// Set the recursive flag.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Append whitelist names.
    #[must_use]
    pub fn with_whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Contents of a settings file. Every field is optional.
///
/// ```toml
/// source = "~/dotfiles"
/// dest = "/home/me"
/// recursive = false
/// whitelist = ["Brewfile"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Source directory.
    pub source: Option<PathBuf>,
    /// Destination directory.
    pub dest: Option<PathBuf>,
    /// Recursive flag.
    pub recursive: Option<bool>,
    /// Extra whitelist names.
    pub whitelist: Vec<String>,
}

impl Settings {
    /// Default settings path: `$XDG_CONFIG_HOME/dotgo/config.toml`, or
    /// `~/.config/dotgo/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(base.join("dotgo").join("config.toml"))
    }

    /// Load settings from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `path` does not exist, or the
    /// read/parse error from [`toml_loader::load_config`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        toml_loader::load_config(path)
    }

    /// Load settings from `explicit`, or from [`default_path`](Self::default_path)
    /// when it exists, or return empty settings.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`load`](Self::load) and from parsing the default file.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::default_path().map_or_else(
                || Ok(Self::default()),
                |path| toml_loader::load_config(&path),
            ),
        }
    }

    /// Layer `overrides` on top of `self`: set fields win, whitelists are unioned.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        self.source = overrides.source.or(self.source);
        self.dest = overrides.dest.or(self.dest);
        self.recursive = overrides.recursive.or(self.recursive);
        self.whitelist.extend(overrides.whitelist);
        self
    }

    /// Resolve into a [`LinkConfig`].
    ///
    /// `dest` falls back to `home`; `recursive` defaults to `true`. A leading
    /// `~` in either path is replaced with `home`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSource`] if no source is set, and
    /// [`ConfigError::HomeDirUnavailable`] if `home` is needed but `None`.
    pub fn into_link_config(self, home: Option<&Path>) -> Result<LinkConfig, ConfigError> {
        let source = self.source.ok_or(ConfigError::MissingSource)?;
        let source = expand_home(&source, home)?;
        let dest = match self.dest {
            Some(dest) => expand_home(&dest, home)?,
            None => home
                .map(Path::to_path_buf)
                .ok_or(ConfigError::HomeDirUnavailable)?,
        };
        Ok(LinkConfig {
            source,
            dest,
            recursive: self.recursive.unwrap_or(true),
            whitelist: self.whitelist,
        })
    }
}

/// Replace a leading `~` component with `home`.
fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~") {
        Ok(rest) => home
            .map(|h| h.join(rest))
            .ok_or(ConfigError::HomeDirUnavailable),
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn settings(source: Option<&str>, dest: Option<&str>) -> Settings {
        Settings {
            source: source.map(PathBuf::from),
            dest: dest.map(PathBuf::from),
            ..Settings::default()
        }
    }

    #[test]
    fn link_config_builder_defaults() {
        let config = LinkConfig::new("/src", "/dst");
        assert!(config.recursive);
        assert!(config.whitelist.is_empty());

        let config = config.with_recursive(false).with_whitelist(["a", "b"]);
        assert!(!config.recursive);
        assert_eq!(config.whitelist, vec!["a", "b"]);
    }

    #[test]
    fn dest_defaults_to_home() {
        let config = settings(Some("/dots"), None)
            .into_link_config(Some(Path::new("/home/me")))
            .unwrap();
        assert_eq!(config.source, PathBuf::from("/dots"));
        assert_eq!(config.dest, PathBuf::from("/home/me"));
        assert!(config.recursive);
    }

    #[test]
    fn missing_source_is_rejected() {
        let err = settings(None, Some("/d"))
            .into_link_config(Some(Path::new("/home/me")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSource));
    }

    #[test]
    fn missing_home_is_rejected_only_when_needed() {
        assert!(
            settings(Some("/s"), Some("/d"))
                .into_link_config(None)
                .is_ok()
        );
        let err = settings(Some("/s"), None).into_link_config(None).unwrap_err();
        assert!(matches!(err, ConfigError::HomeDirUnavailable));
    }

    #[test]
    fn tilde_expands_to_home() {
        let config = settings(Some("~/dotfiles"), Some("~"))
            .into_link_config(Some(Path::new("/home/me")))
            .unwrap();
        assert_eq!(config.source, PathBuf::from("/home/me/dotfiles"));
        assert_eq!(config.dest, PathBuf::from("/home/me"));
    }

    #[test]
    fn tilde_inside_name_is_literal() {
        let config = settings(Some("~dots"), Some("/d"))
            .into_link_config(Some(Path::new("/home/me")))
            .unwrap();
        assert_eq!(config.source, PathBuf::from("~dots"));
    }

    #[test]
    fn merge_prefers_overrides_and_unions_whitelist() {
        let file = Settings {
            source: Some("/file/src".into()),
            dest: Some("/file/dst".into()),
            recursive: Some(false),
            whitelist: vec!["Brewfile".into()],
        };
        let flags = Settings {
            source: Some("/flag/src".into()),
            dest: None,
            recursive: None,
            whitelist: vec!["Makefile".into()],
        };
        let merged = file.merge(flags);
        assert_eq!(merged.source, Some(PathBuf::from("/flag/src")));
        assert_eq!(merged.dest, Some(PathBuf::from("/file/dst")));
        assert_eq!(merged.recursive, Some(false));
        assert_eq!(merged.whitelist, vec!["Brewfile", "Makefile"]);
    }

    #[test]
    fn load_requires_explicit_file_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_parses_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "source = \"~/dotfiles\"\nrecursive = false\nwhitelist = [\"Brewfile\"]\n",
        )
        .unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s.source, Some(PathBuf::from("~/dotfiles")));
        assert_eq!(s.dest, None);
        assert_eq!(s.recursive, Some(false));
        assert_eq!(s.whitelist, vec!["Brewfile"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sources = \"/x\"\n").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn discover_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.toml");
        std::fs::write(&path, "dest = \"/d\"\n").unwrap();
        let s = Settings::discover(Some(&path)).unwrap();
        assert_eq!(s.dest, Some(PathBuf::from("/d")));
    }
}
