//! Locale registry: the ordered set of locales a run works with.

use std::{fs, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Id of the locale held in the unqualified `values` directory.
pub const DEFAULT_LOCALE: &str = "def";

lazy_static! {
    // `values-fr`, `values-pt-rBR`, `values-es-r419`, `values-b+sr+Latn`
    static ref LOCALE_DIR_REGEX: Regex = Regex::new(
        r"^values-([a-z]{2,3}(?:-r(?:[A-Z]{2}|[0-9]{3}))?|b\+[A-Za-z0-9]+(?:\+[A-Za-z0-9]+)*)$"
    )
    .unwrap();
}

/// Ordered, duplicate-free list of locale ids with the default locale first.
///
/// The registry only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<String>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// Creates a registry holding only the default locale.
    pub fn new() -> Self {
        Self {
            locales: vec![DEFAULT_LOCALE.to_string()],
        }
    }

    /// Creates a registry from an explicit list; no discovery happens.
    pub fn with_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for locale in locales {
            registry.register(locale.as_ref());
        }
        registry
    }

    /// Appends `id` unless it is empty or already registered.
    ///
    /// Returns `true` if the locale was added.
    pub fn register(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || self.contains(id) {
            return false;
        }
        debug!(locale = id, "registered locale");
        self.locales.push(id.to_string());
        true
    }

    /// Registers every locale qualifier found as a `values-<locale>`
    /// subdirectory of `base_dir`, in directory-name order.
    ///
    /// A directory that cannot be read counts as holding no locales.
    /// Returns the number of newly registered locales.
    pub fn discover<P: AsRef<Path>>(&mut self, base_dir: P) -> usize {
        let base_dir = base_dir.as_ref();
        let entries = match fs::read_dir(base_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %base_dir.display(), error = %e, "locale scan skipped");
                return 0;
            }
        };

        let mut found: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| locale_from_dir_name(&name).map(str::to_string))
            .collect();
        found.sort();

        found.iter().filter(|locale| self.register(locale)).count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locales.iter().any(|l| l == id)
    }

    pub fn is_default(&self, id: &str) -> bool {
        id == DEFAULT_LOCALE
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Always false: the default locale is never removed.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// All locales, default first.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.locales.iter()
    }

    /// All locales except the default one.
    pub fn translations(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().skip(1).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }
}

/// Whether `id` is usable as a `values-<id>` locale qualifier.
pub fn is_locale_qualifier(id: &str) -> bool {
    locale_from_dir_name(&format!("values-{id}")).is_some()
}

/// Extracts the locale qualifier from a resource directory name such as
/// `values-fr`. Directories with non-locale qualifiers (`values-night`,
/// `values-v21`) yield `None`.
pub fn locale_from_dir_name(name: &str) -> Option<&str> {
    LOCALE_DIR_REGEX
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
