//! Options controlling how a [`crate::Localizer`] loads, imports and writes.

use serde::Deserialize;

/// How an import reacts to a bad row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Validate every row first, then apply all of them.
    #[default]
    Atomic,
    /// Apply rows as they are read; earlier rows survive a later failure.
    Streaming,
}

/// Run options for [`crate::Localizer`].
///
/// Deserializable so front ends can read them from a config file; missing
/// keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalizerOptions {
    /// Explicit locale list. Empty means discover from `values-*` directories.
    pub locales: Vec<String>,
    pub import_mode: ImportMode,
    /// Keep the previous `strings.xml` as `strings.xml.bak` before overwriting.
    pub backup: bool,
}

impl Default for LocalizerOptions {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            import_mode: ImportMode::default(),
            backup: true,
        }
    }
}

impl LocalizerOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit locale list.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_import_mode(mut self, import_mode: ImportMode) -> Self {
        self.import_mode = import_mode;
        self
    }

    /// Enables/disables backups on overwrite.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}
