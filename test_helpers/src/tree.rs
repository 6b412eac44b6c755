//! Temporary directory layouts mimicking a machine with system, user and
//! project configuration.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary root holding `etc/`, `home/` and `work/` directories.
///
/// The directory tree is deleted when the value is dropped.
///
/// # Examples
///
/// ```
/// use moose_config_test_helpers::ConfigTree;
///
/// # fn run() -> anyhow::Result<()> {
/// let tree = ConfigTree::new()?;
/// let path = tree.write_user("moapp", "moapp.yml", "server: example.com\n")?;
/// assert!(path.ends_with(".config/moapp/moapp.yml"));
/// # Ok(())
/// # }
/// # run().expect("tree");
/// ```
#[derive(Debug)]
pub struct ConfigTree {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl ConfigTree {
    /// Creates the tree with empty `etc`, `home` and `work` directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created or its
    /// path is not valid UTF-8.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temporary config tree")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("temporary path is not UTF-8: {}", path.display()))?;
        for dir in ["etc", "home", "work"] {
            std::fs::create_dir_all(root.join(dir)).with_context(|| format!("create {dir}"))?;
        }
        Ok(Self { _temp: temp, root })
    }

    /// Root of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Directory standing in for `/etc`, the system configuration base.
    #[must_use]
    pub fn etc(&self) -> Utf8PathBuf {
        self.root.join("etc")
    }

    /// Directory standing in for `$HOME`.
    #[must_use]
    pub fn home(&self) -> Utf8PathBuf {
        self.root.join("home")
    }

    /// Directory standing in for the working directory.
    #[must_use]
    pub fn work(&self) -> Utf8PathBuf {
        self.root.join("work")
    }

    /// Writes `contents` to `relative` under the root, creating parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Writes a system layer at `etc/{app}/{file}`.
    ///
    /// # Errors
    ///
    /// See [`ConfigTree::write`].
    pub fn write_system(&self, app: &str, file: &str, contents: &str) -> Result<Utf8PathBuf> {
        self.write(&format!("etc/{app}/{file}"), contents)
    }

    /// Writes a user layer at `home/.config/{app}/{file}`.
    ///
    /// # Errors
    ///
    /// See [`ConfigTree::write`].
    pub fn write_user(&self, app: &str, file: &str, contents: &str) -> Result<Utf8PathBuf> {
        self.write(&format!("home/.config/{app}/{file}"), contents)
    }

    /// Writes a local layer at `work/{file}`.
    ///
    /// # Errors
    ///
    /// See [`ConfigTree::write`].
    pub fn write_local(&self, file: &str, contents: &str) -> Result<Utf8PathBuf> {
        self.write(&format!("work/{file}"), contents)
    }
}
