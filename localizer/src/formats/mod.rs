//! File formats handled by localizer.
//!
//! - [`android_strings`]: Android `strings.xml` resource files.
//! - [`csv`]: the `id,def,<locale>...` exchange table.

pub mod android_strings;
pub mod csv;

// Reexporting the formats for easier access
pub use android_strings::Format as AndroidStringsFormat;
