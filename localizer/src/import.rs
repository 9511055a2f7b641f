//! Table importer: applies translated CSV columns back onto the string table.

use std::io::Read;

use tracing::{debug, info};

use crate::{
    error::Error,
    formats::csv::{ID_COLUMN, parse_header, reader},
    locale::{DEFAULT_LOCALE, LocaleRegistry, is_locale_qualifier},
    options::ImportMode,
    types::StringTable,
};

/// What an import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Data rows applied.
    pub rows: usize,
    /// Individual locale values written.
    pub values_set: usize,
    /// Header locales that were not registered before.
    pub locales_added: Vec<String>,
}

/// Reads a CSV table from `source` and overwrites the translations it holds.
///
/// The header must start with `id,def`; the remaining header cells name
/// locale qualifiers, which get registered. Every data row must name a record that
/// already exists in `table`. The `def` column is never written back: the
/// resource files stay authoritative for it. An empty cell clears the value.
///
/// With [`ImportMode::Atomic`] the whole table is validated before anything
/// changes. With [`ImportMode::Streaming`] rows are applied as they are
/// read, so rows before a failing one stay applied.
pub fn import<R: Read>(
    source: R,
    table: &mut StringTable,
    registry: &mut LocaleRegistry,
    mode: ImportMode,
) -> Result<ImportReport, Error> {
    let mut rdr = reader(source);
    let mut rows = rdr.records();

    let header = match rows.next() {
        Some(header) => header?,
        None => {
            return Err(Error::Format {
                column: 1,
                expected: ID_COLUMN.to_string(),
                found: String::new(),
            });
        }
    };
    let columns = locale_columns(&parse_header(&header)?)?;
    debug!(?columns, ?mode, "import header accepted");

    let mut report = ImportReport::default();
    match mode {
        ImportMode::Atomic => {
            let mut staged = Vec::new();
            for row in rows {
                let row = row?;
                check_known(table, &row)?;
                staged.push(row);
            }
            report.locales_added = register_columns(registry, &columns);
            for row in &staged {
                report.values_set += apply_row(table, row, &columns)?;
                report.rows += 1;
            }
        }
        ImportMode::Streaming => {
            report.locales_added = register_columns(registry, &columns);
            for row in rows {
                let row = row?;
                report.values_set += apply_row(table, &row, &columns)?;
                report.rows += 1;
            }
        }
    }

    info!(
        rows = report.rows,
        values = report.values_set,
        locales_added = ?report.locales_added,
        "imported table"
    );
    Ok(report)
}

/// Maps header labels to `(cell index, locale)`.
///
/// Labels are trimmed. Blank labels and a repeated `def` are skipped; any
/// other label must be a locale qualifier since it becomes a directory name.
fn locale_columns(header_locales: &[String]) -> Result<Vec<(usize, String)>, Error> {
    let mut columns = Vec::with_capacity(header_locales.len());
    for (i, label) in header_locales.iter().enumerate() {
        let index = i + 2;
        let locale = label.trim();
        if locale.is_empty() || locale == DEFAULT_LOCALE {
            continue;
        }
        if !is_locale_qualifier(locale) {
            return Err(Error::Format {
                column: index + 1,
                expected: "a locale qualifier".to_string(),
                found: label.clone(),
            });
        }
        columns.push((index, locale.to_string()));
    }
    Ok(columns)
}

fn register_columns(registry: &mut LocaleRegistry, columns: &[(usize, String)]) -> Vec<String> {
    columns
        .iter()
        .filter(|(_, locale)| registry.register(locale))
        .map(|(_, locale)| locale.clone())
        .collect()
}

fn check_known(table: &StringTable, row: &csv::StringRecord) -> Result<(), Error> {
    let name = row.get(0).unwrap_or_default();
    if table.contains(name) {
        Ok(())
    } else {
        Err(Error::UnknownKey(name.to_string()))
    }
}

fn apply_row(
    table: &mut StringTable,
    row: &csv::StringRecord,
    columns: &[(usize, String)],
) -> Result<usize, Error> {
    let name = row.get(0).unwrap_or_default();
    let record = table
        .get_mut(name)
        .ok_or_else(|| Error::UnknownKey(name.to_string()))?;
    for (index, locale) in columns {
        record.set_value(locale.as_str(), row.get(*index).unwrap_or_default());
    }
    Ok(columns.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (StringTable, LocaleRegistry) {
        let mut table = StringTable::new();
        table.upsert("hello", "def", "Hello", true);
        table.upsert("hello", "fr", "Bonjour", true);
        table.upsert("bye", "def", "Bye", true);
        table.upsert("bye", "fr", "Au revoir", true);
        (table, LocaleRegistry::with_locales(["fr"]))
    }

    fn run(content: &str, mode: ImportMode) -> (Result<ImportReport, Error>, StringTable, LocaleRegistry) {
        let (mut table, mut registry) = sample();
        let result = import(content.as_bytes(), &mut table, &mut registry, mode);
        (result, table, registry)
    }

    #[test]
    fn test_import_overwrites_translations() {
        let (result, table, _) = run(
            "id,def,fr\nhello,IGNORED,Salut\n",
            ImportMode::Atomic,
        );
        let report = result.unwrap();
        assert_eq!(report.rows, 1);
        assert_eq!(report.values_set, 1);
        let hello = table.get("hello").unwrap();
        assert_eq!(hello.value("fr"), Some("Salut"));
        assert_eq!(hello.value("def"), Some("Hello"));
        assert_eq!(table.get("bye").unwrap().value("fr"), Some("Au revoir"));
    }

    #[test]
    fn test_empty_cell_clears_value() {
        let (result, table, _) = run("id,def,fr\nhello,Hello,\n", ImportMode::Atomic);
        result.unwrap();
        assert_eq!(table.get("hello").unwrap().value("fr"), Some(""));
    }

    #[test]
    fn test_new_locale_from_header() {
        let (result, table, registry) = run(
            "id,def,fr,de\nhello,Hello,Salut,Hallo\n",
            ImportMode::Atomic,
        );
        assert_eq!(result.unwrap().locales_added, vec!["de"]);
        assert_eq!(registry.as_slice(), &["def", "fr", "de"]);
        assert_eq!(table.get("hello").unwrap().value("de"), Some("Hallo"));
        assert_eq!(table.get("bye").unwrap().value("de"), None);
    }

    #[test]
    fn test_header_validation() {
        for content in ["key,def,fr\n", "id,en,fr\n", "def,id\n", "id\n", ""] {
            let (result, _, _) = run(content, ImportMode::Atomic);
            assert!(
                matches!(result, Err(Error::Format { .. })),
                "expected format error for {content:?}"
            );
        }
    }

    #[test]
    fn test_unknown_key_atomic_changes_nothing() {
        let (result, table, registry) = run(
            "id,def,fr,de\nhello,Hello,Salut,Hallo\nmissing,x,y,z\n",
            ImportMode::Atomic,
        );
        match result {
            Err(Error::UnknownKey(name)) => assert_eq!(name, "missing"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(table.get("hello").unwrap().value("fr"), Some("Bonjour"));
        assert!(!registry.contains("de"));
    }

    #[test]
    fn test_unknown_key_streaming_keeps_prior_rows() {
        let (result, table, registry) = run(
            "id,def,fr\nhello,Hello,Salut\nmissing,x,y\nbye,Bye,Ciao\n",
            ImportMode::Streaming,
        );
        assert!(matches!(result, Err(Error::UnknownKey(_))));
        assert_eq!(table.get("hello").unwrap().value("fr"), Some("Salut"));
        assert_eq!(table.get("bye").unwrap().value("fr"), Some("Au revoir"));
        assert!(registry.contains("fr"));
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let (result, _, _) = run("id,def,fr\nhello,Hello\n", ImportMode::Atomic);
        assert!(matches!(result, Err(Error::CsvParse(_))));
    }

    #[test]
    fn test_repeated_default_column_is_ignored() {
        let (result, table, registry) = run("id,def,def\nhello,A,B\n", ImportMode::Atomic);
        assert_eq!(result.unwrap().values_set, 0);
        assert_eq!(table.get("hello").unwrap().value("def"), Some("Hello"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_quoted_cells() {
        let (result, table, _) = run(
            "id,def,fr\nhello,Hello,\"Salut, \"\"toi\"\"\nça va\"\n",
            ImportMode::Atomic,
        );
        result.unwrap();
        assert_eq!(
            table.get("hello").unwrap().value("fr"),
            Some("Salut, \"toi\"\nça va")
        );
    }

    #[test]
    fn test_header_labels_are_trimmed() {
        let (result, table, registry) = run(
            "id,def, fr ,de\nhello,Hello,Salut,Hallo\n",
            ImportMode::Atomic,
        );
        assert_eq!(result.unwrap().locales_added, vec!["de"]);
        assert_eq!(registry.as_slice(), &["def", "fr", "de"]);
        let hello = table.get("hello").unwrap();
        assert_eq!(hello.value("fr"), Some("Salut"));
        assert_eq!(hello.value(" fr "), None);
    }

    #[test]
    fn test_non_qualifier_header_is_rejected() {
        for mode in [ImportMode::Atomic, ImportMode::Streaming] {
            let (result, table, registry) = run(
                "id,def,fr,x/../../escaped\nhello,Hello,Salut,Pwn\n",
                mode,
            );
            match result {
                Err(Error::Format { column, found, .. }) => {
                    assert_eq!(column, 4);
                    assert_eq!(found, "x/../../escaped");
                }
                other => panic!("unexpected result: {other:?}"),
            }
            assert_eq!(table.get("hello").unwrap().value("fr"), Some("Bonjour"));
            assert_eq!(registry.len(), 2);
        }
    }

    #[test]
    fn test_bom_prefixed_table() {
        let (mut table, mut registry) = sample();
        let content = b"\xEF\xBB\xBFid,def,fr\nhello,Hello,Salut\n";
        import(&content[..], &mut table, &mut registry, ImportMode::Atomic).unwrap();
        assert_eq!(table.get("hello").unwrap().value("fr"), Some("Salut"));
    }
}
