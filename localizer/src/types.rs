//! The in-memory string table shared by loading, import, export and write-back.

use std::collections::HashMap;

/// One named string and its per-locale values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    name: String,

    /// Locale id to text. Sparse: a locale may have no value.
    pub values: HashMap<String, String>,

    /// Whether the string takes part in export, import and write-back.
    pub translatable: bool,
}

impl StringRecord {
    /// Creates a translatable record with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
            translatable: true,
        }
    }

    /// The record identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the value for a specific locale.
    pub fn value(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    /// Sets the value for a specific locale, replacing any previous one.
    pub fn set_value(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.values.insert(locale.into(), value.into());
    }
}

/// Every string of a project keyed by name.
///
/// Records keep the order in which their names were first seen, so the
/// default locale's file order drives export and write-back order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    records: Vec<StringRecord>,
    index: HashMap<String, usize>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StringRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StringRecord> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    /// Iterates all records in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, StringRecord> {
        self.records.iter()
    }

    /// Iterates records that take part in export and write-back.
    pub fn translatable(&self) -> impl Iterator<Item = &StringRecord> {
        self.records.iter().filter(|r| r.translatable)
    }

    /// Merges one locale's value for `name` into the table.
    ///
    /// The first call for a name creates the record; later calls only set
    /// their locale's value. A `false` flag sticks: no later call can make
    /// the record translatable again.
    pub fn upsert(
        &mut self,
        name: &str,
        locale: &str,
        value: impl Into<String>,
        translatable: bool,
    ) -> &mut StringRecord {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.records.push(StringRecord::new(name));
                let i = self.records.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        let record = &mut self.records[i];
        record.set_value(locale, value);
        record.translatable &= translatable;
        record
    }
}

impl<'a> IntoIterator for &'a StringTable {
    type Item = &'a StringRecord;
    type IntoIter = std::slice::Iter<'a, StringRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
