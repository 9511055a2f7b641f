//! Table exporter: turns the string table into CSV rows.

use std::{fs, io::Write, path::Path};

use tracing::{info, warn};

use crate::{
    error::Error,
    formats::csv::{ID_COLUMN, write_rows},
    locale::LocaleRegistry,
    types::{StringRecord, StringTable},
};

/// Lazy sequence of export rows: the header first, then one row per
/// translatable record.
///
/// Borrows the table and registry, so it reflects them as they were when
/// it was created. It is consumed in a single pass.
pub struct ExportRows<'a> {
    locales: &'a [String],
    records: std::slice::Iter<'a, StringRecord>,
    header_pending: bool,
}

impl<'a> Iterator for ExportRows<'a> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            let mut header = Vec::with_capacity(self.locales.len() + 1);
            header.push(ID_COLUMN.to_string());
            header.extend(self.locales.iter().cloned());
            return Some(header);
        }

        let record = self.records.by_ref().find(|r| r.translatable)?;
        let mut row = Vec::with_capacity(self.locales.len() + 1);
        row.push(record.name().to_string());
        row.extend(
            self.locales
                .iter()
                .map(|l| record.value(l).unwrap_or_default().to_string()),
        );
        Some(row)
    }
}

/// Starts an export of `table` with one column per registered locale.
pub fn export<'a>(table: &'a StringTable, registry: &'a LocaleRegistry) -> ExportRows<'a> {
    ExportRows {
        locales: registry.as_slice(),
        records: table.iter(),
        header_pending: true,
    }
}

/// Writes the whole export to `writer`. Returns the number of data rows.
pub fn export_to_writer<W: Write>(
    table: &StringTable,
    registry: &LocaleRegistry,
    writer: W,
) -> Result<usize, Error> {
    let written = write_rows(writer, export(table, registry))?;
    Ok(written.saturating_sub(1))
}

/// Creates or truncates `path` and writes the export to it.
///
/// On failure the partly written file is removed, best effort.
pub fn export_to_file<P: AsRef<Path>>(
    table: &StringTable,
    registry: &LocaleRegistry,
    path: P,
) -> Result<usize, Error> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    match export_to_writer(table, registry, file) {
        Ok(rows) => {
            info!(path = %path.display(), rows, locales = registry.len(), "exported strings");
            Ok(rows)
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %rm, "could not remove partial export");
            }
            Err(e)
        }
    }
}
