//! Support for the CSV exchange table.
//!
//! The first row is the header `id,def,<locale>...`; every other row holds
//! one string's name followed by its value in each header locale.

use std::io::{Read, Write};

use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};

use crate::{error::Error, locale::DEFAULT_LOCALE};

/// Label of the first header cell.
pub const ID_COLUMN: &str = "id";

/// Opens a CSV reader over `source`.
///
/// A leading BOM is honoured and stripped, so tables saved by spreadsheet
/// tools as "CSV UTF-8" or UTF-16 read the same as plain UTF-8.
pub fn reader<R: Read>(source: R) -> csv::Reader<DecodeReaderBytes<R, Vec<u8>>> {
    let decoded = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .bom_override(true)
        .build(source);
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(decoded)
}

/// Checks the header contract and returns the locale columns after `def`.
pub fn parse_header(header: &csv::StringRecord) -> Result<Vec<String>, Error> {
    for (column, expected) in [ID_COLUMN, DEFAULT_LOCALE].into_iter().enumerate() {
        let found = header.get(column).unwrap_or_default();
        if found != expected {
            return Err(Error::Format {
                column: column + 1,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(header.iter().skip(2).map(str::to_string).collect())
}

/// Writes every row with standard CSV quoting and flushes the writer.
pub fn write_rows<W, I>(writer: W, rows: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    let mut count = 0;
    for row in rows {
        wtr.write_record(&row)?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}
