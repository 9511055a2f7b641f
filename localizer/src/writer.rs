//! Resource writer: flushes translations back into `values-<locale>/strings.xml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    error::Error,
    formats::{AndroidStringsFormat, android_strings::StringResource},
    layout::{ResourceLayout, backup_file},
    locale::{DEFAULT_LOCALE, LocaleRegistry},
    options::LocalizerOptions,
    traits::Parser,
    types::StringTable,
};

/// Files produced by [`write`], in locale order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub files: Vec<PathBuf>,
}

/// Builds the `strings.xml` content for one translation locale.
///
/// Holds every translatable record in table order. A record without a
/// value in `locale` carries the default locale's text instead.
pub fn locale_format(table: &StringTable, locale: &str) -> AndroidStringsFormat {
    let strings = table
        .translatable()
        .map(|record| {
            let value = record
                .value(locale)
                .or_else(|| record.value(DEFAULT_LOCALE))
                .unwrap_or_default();
            StringResource::new(record.name(), value)
        })
        .collect();
    AndroidStringsFormat::new(strings)
}

/// Writes one file per registered locale except the default one.
///
/// The first failure stops the run; files already written stay on disk.
pub fn write(
    table: &StringTable,
    registry: &LocaleRegistry,
    layout: &ResourceLayout,
    options: &LocalizerOptions,
) -> Result<WriteReport, Error> {
    let mut report = WriteReport::default();

    for locale in registry.translations() {
        let path = layout.strings_file(locale);
        write_locale(table, locale, &layout.locale_dir(locale), &path, options.backup)
            .map_err(|e| Error::write_error(locale, &path, e))?;
        report.files.push(path);
    }

    info!(files = report.files.len(), "wrote translations");
    Ok(report)
}

fn write_locale(
    table: &StringTable,
    locale: &str,
    dir: &Path,
    path: &Path,
    backup: bool,
) -> Result<(), Error> {
    fs::create_dir_all(dir)?;
    if backup && path.exists() {
        let backup_path = backup_file(path);
        if let Err(e) = fs::rename(path, &backup_path) {
            warn!(path = %path.display(), error = %e, "could not back up resource file");
        }
    }

    let format = locale_format(table, locale);
    format.write_to(path)?;
    debug!(locale, strings = format.strings.len(), path = %path.display(), "wrote resource file");
    Ok(())
}
