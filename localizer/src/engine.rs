//! This module provides the `Localizer` struct: the per-run context that
//! owns the resolved resource layout, the locale registry and the string
//! table, and exposes the export, import and save operations over them.
//!
//! A run opens one `Localizer`, uses it and drops it.

use std::{fs::File, io::Read, io::Write, path::Path};

use crate::{
    error::Error,
    export::{self, ExportRows},
    import::{self, ImportReport},
    layout::ResourceLayout,
    loader,
    locale::LocaleRegistry,
    options::LocalizerOptions,
    types::StringTable,
    writer::{self, WriteReport},
};

pub struct Localizer {
    layout: ResourceLayout,
    locales: LocaleRegistry,
    strings: StringTable,
    options: LocalizerOptions,
}

impl Localizer {
    /// Opens a project and loads its strings.
    ///
    /// `project_dir` may be a Gradle project root (its `app/src/main/res`
    /// is used) or a `res` directory. Locales come from
    /// `options.locales` when given, otherwise from the `values-*`
    /// directories found next to `values`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use localizer::{Localizer, LocalizerOptions};
    ///
    /// let localizer = Localizer::open("MyApp", LocalizerOptions::new())?;
    /// localizer.export_to_file("strings.csv")?;
    /// # Ok::<(), localizer::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(project_dir: P, options: LocalizerOptions) -> Result<Self, Error> {
        let layout = ResourceLayout::resolve(project_dir)?;
        let mut locales = LocaleRegistry::with_locales(&options.locales);
        if options.locales.is_empty() {
            locales.discover(layout.resources_dir());
        }
        let strings = loader::load(&layout, &locales)?;
        Ok(Self {
            layout,
            locales,
            strings,
            options,
        })
    }

    /// Rebuilds the string table from the files on disk.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.strings = loader::load(&self.layout, &self.locales)?;
        Ok(())
    }

    /// Registers a locale; it is written on the next [`Localizer::save`].
    pub fn add_locale(&mut self, locale: &str) -> &mut Self {
        self.locales.register(locale);
        self
    }

    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn options(&self) -> &LocalizerOptions {
        &self.options
    }

    pub fn resources_dir(&self) -> &Path {
        self.layout.resources_dir()
    }

    /// Lazy export rows, header first.
    pub fn export_rows(&self) -> ExportRows<'_> {
        export::export(&self.strings, &self.locales)
    }

    /// Writes the CSV export to `writer`, returning the number of data rows.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<usize, Error> {
        export::export_to_writer(&self.strings, &self.locales, writer)
    }

    /// Writes the CSV export to a file, creating or truncating it.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<usize, Error> {
        export::export_to_file(&self.strings, &self.locales, path)
    }

    /// Applies a CSV table read from `reader` using `options.import_mode`.
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> Result<ImportReport, Error> {
        import::import(
            reader,
            &mut self.strings,
            &mut self.locales,
            self.options.import_mode,
        )
    }

    /// Applies a CSV table read from a file.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportReport, Error> {
        let file = File::open(path)?;
        self.import_from_reader(file)
    }

    /// Writes every non-default locale back to its `strings.xml`.
    pub fn save(&self) -> Result<WriteReport, Error> {
        writer::write(&self.strings, &self.locales, &self.layout, &self.options)
    }
}
