use localizer::locale::is_locale_qualifier;
use std::path::Path;

/// Validate project path exists and is a directory
pub fn validate_project_path(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Project path does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Project path is not a directory: {}", path.display()));
    }

    Ok(())
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &Path) -> Result<(), String> {
    if path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Err(format!("Cannot create output directory: {}", e));
            }
        }
    }

    Ok(())
}

/// Validate a locale uses the Android resource qualifier form (`fr`, `pt-rBR`, `b+sr+Latn`)
pub fn validate_locale(locale: &str) -> Result<(), String> {
    if locale.is_empty() {
        return Err("Locale cannot be empty".to_string());
    }

    if !is_locale_qualifier(locale) {
        return Err(format!(
            "Invalid locale: {}. Expected an Android resource qualifier such as fr, pt-rBR or b+sr+Latn",
            locale
        ));
    }

    Ok(())
}
