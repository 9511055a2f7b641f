use localizer::{
    DEFAULT_LOCALE, ImportMode, LocaleRegistry, StringTable, export::export_to_writer, import,
    writer::locale_format,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?\"\n]{0,30}").expect("valid value regex")
}

/// name -> (default value, optional fr value, translatable)
type Dataset = BTreeMap<String, (String, Option<String>, bool)>;

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::btree_map(
        key_strategy(),
        (
            value_strategy(),
            prop::option::of(value_strategy()),
            prop::bool::weighted(0.8),
        ),
        1..10,
    )
}

fn build_table(data: &Dataset) -> StringTable {
    let mut table = StringTable::new();
    for (name, (def, fr, translatable)) in data {
        table.upsert(name, DEFAULT_LOCALE, def.clone(), *translatable);
        if let Some(fr) = fr {
            table.upsert(name, "fr", fr.clone(), *translatable);
        }
    }
    table
}

proptest! {
    #[test]
    fn prop_export_import_restores_values(data in dataset_strategy()) {
        let table = build_table(&data);
        let registry = LocaleRegistry::with_locales(["fr"]);

        let mut csv = Vec::new();
        export_to_writer(&table, &registry, &mut csv).unwrap();

        // Import into a copy whose translations were wiped.
        let mut target = build_table(&data);
        for record in data.keys() {
            target.get_mut(record).unwrap().values.remove("fr");
        }
        let mut target_registry = registry.clone();
        import(&csv[..], &mut target, &mut target_registry, ImportMode::Atomic).unwrap();

        for (name, (def, fr, translatable)) in &data {
            let record = target.get(name).unwrap();
            prop_assert_eq!(record.value(DEFAULT_LOCALE), Some(def.as_str()));
            if *translatable {
                prop_assert_eq!(record.value("fr"), Some(fr.as_deref().unwrap_or("")));
            } else {
                prop_assert_eq!(record.value("fr"), None);
            }
        }
    }

    #[test]
    fn prop_written_locale_falls_back_to_default(data in dataset_strategy()) {
        let table = build_table(&data);
        let format = locale_format(&table, "fr");

        let expected: Vec<_> = data
            .iter()
            .filter(|(_, (_, _, translatable))| *translatable)
            .map(|(name, (def, fr, _))| (name.clone(), fr.clone().unwrap_or_else(|| def.clone())))
            .collect();
        let actual: Vec<_> = format
            .strings
            .iter()
            .map(|sr| (sr.name.clone(), sr.value.clone()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
