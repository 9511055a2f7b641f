//! Resource loader: reads every locale's `strings.xml` into one table.

use tracing::{debug, info};

use crate::{
    error::Error,
    formats::AndroidStringsFormat,
    layout::ResourceLayout,
    locale::LocaleRegistry,
    traits::Parser,
    types::StringTable,
};

/// Loads the string table for every locale in `registry`, in registry order.
///
/// The default locale's file must exist. A missing file for any other
/// locale contributes nothing; that locale simply has no values yet.
/// Malformed files fail the whole load.
pub fn load(layout: &ResourceLayout, registry: &LocaleRegistry) -> Result<StringTable, Error> {
    let mut table = StringTable::new();

    for locale in registry.iter() {
        let path = layout.strings_file(locale);
        if !path.is_file() {
            if registry.is_default(locale) {
                return Err(Error::invalid_path(
                    layout.resources_dir(),
                    format!("missing default resource file {}", path.display()),
                ));
            }
            debug!(locale = %locale, path = %path.display(), "no resource file for locale");
            continue;
        }

        let format = AndroidStringsFormat::read_from(&path).map_err(|e| match e {
            Error::Io(_) => e,
            other => Error::parse_error(&path, other),
        })?;
        debug!(locale = %locale, strings = format.strings.len(), "loaded resource file");

        for sr in format.strings {
            let translatable = sr.is_translatable();
            table.upsert(&sr.name, locale, sr.value, translatable);
        }
    }

    info!(
        strings = table.len(),
        locales = registry.len(),
        dir = %layout.resources_dir().display(),
        "loaded resources"
    );
    Ok(table)
}
