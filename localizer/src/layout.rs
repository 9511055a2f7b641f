//! Where resource files live inside an Android project.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{error::Error, locale::DEFAULT_LOCALE};

pub const STRINGS_FILE: &str = "strings.xml";
pub const VALUES_DIR: &str = "values";
pub const BACKUP_EXTENSION: &str = "bak";

/// Resource directory relative to a Gradle project root.
const PROJECT_RES_DIR: [&str; 4] = ["app", "src", "main", "res"];

/// A resolved `res` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    resources_dir: PathBuf,
}

impl ResourceLayout {
    /// Uses `resources_dir` as is, without checking it.
    pub fn new<P: Into<PathBuf>>(resources_dir: P) -> Self {
        Self {
            resources_dir: resources_dir.into(),
        }
    }

    /// Finds the resource directory of a project.
    ///
    /// `<project>/app/src/main/res` is tried first, then `project_dir`
    /// itself. A candidate qualifies when it is a directory holding
    /// `values/strings.xml`.
    pub fn resolve<P: AsRef<Path>>(project_dir: P) -> Result<Self, Error> {
        let project_dir = project_dir.as_ref();
        let nested: PathBuf = PROJECT_RES_DIR
            .iter()
            .fold(project_dir.to_path_buf(), |p, c| p.join(c));

        if check_resources_dir(&nested).is_ok() {
            return Ok(Self::new(nested));
        }
        check_resources_dir(project_dir)?;
        Ok(Self::new(project_dir))
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Directory holding a locale's `strings.xml`.
    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        if locale == DEFAULT_LOCALE {
            self.resources_dir.join(VALUES_DIR)
        } else {
            self.resources_dir.join(format!("{VALUES_DIR}-{locale}"))
        }
    }

    pub fn strings_file(&self, locale: &str) -> PathBuf {
        self.locale_dir(locale).join(STRINGS_FILE)
    }
}

/// `strings.xml` -> `strings.xml.bak`
pub fn backup_file(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_EXTENSION);
    PathBuf::from(name)
}

fn check_resources_dir(dir: &Path) -> Result<(), Error> {
    let meta = fs::metadata(dir).map_err(|e| Error::invalid_path(dir, e.to_string()))?;
    if !meta.is_dir() {
        return Err(Error::invalid_path(dir, "not a directory"));
    }
    let strings = dir.join(VALUES_DIR).join(STRINGS_FILE);
    if !strings.is_file() {
        return Err(Error::invalid_path(
            dir,
            format!("missing default resource file {}", strings.display()),
        ));
    }
    Ok(())
}
