#![forbid(unsafe_code)]
//! Round-trip Android string resources through CSV tables.
//!
//! Translators work on a flat `id,def,<locale>...` table in any spreadsheet
//! tool; the results are merged back into `res/values-<locale>/strings.xml`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use localizer::{Localizer, LocalizerOptions};
//!
//! // Export every translatable string of a project
//! let localizer = Localizer::open("MyApp", LocalizerOptions::new())?;
//! localizer.export_to_file("strings.csv")?;
//!
//! // Bring the translated table back and rewrite the locale files
//! let mut localizer = Localizer::open("MyApp", LocalizerOptions::new())?;
//! localizer.import_from_file("strings.csv")?;
//! localizer.save()?;
//! # Ok::<(), localizer::Error>(())
//! ```
//!
//! # Layout
//!
//! - `values/strings.xml` holds the default locale, named `def` in tables.
//! - `values-<locale>/strings.xml` holds each translation.
//! - Strings marked `translatable="false"` in any locale are never exported
//!   or written back.

pub mod engine;
pub mod error;
pub mod export;
pub mod formats;
pub mod import;
pub mod layout;
pub mod loader;
pub mod locale;
pub mod options;
pub mod traits;
pub mod types;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    engine::Localizer,
    error::Error,
    export::{ExportRows, export},
    import::{ImportReport, import},
    layout::ResourceLayout,
    loader::load,
    locale::{DEFAULT_LOCALE, LocaleRegistry},
    options::{ImportMode, LocalizerOptions},
    types::{StringRecord, StringTable},
    writer::{WriteReport, write},
};
