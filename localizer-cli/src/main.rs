use clap::{CommandFactory, Parser, ValueEnum};
use localizer::{ImportMode, Localizer};
use localizer_cli::{
    Overrides, apply_overrides, load_options, logging,
    validation::{validate_file_path, validate_locale, validate_output_path, validate_project_path},
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Export Android string resources to CSV for translators, and import the
/// translated table back into `values-<locale>/strings.xml`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Android project root or its `res` directory
    project: Option<PathBuf>,

    /// Export translatable strings to this CSV file
    #[arg(short, long, value_name = "PATH", conflicts_with = "import")]
    export: Option<PathBuf>,

    /// Import translations from this CSV file and rewrite the locale files
    #[arg(short, long, value_name = "PATH")]
    import: Option<PathBuf>,

    /// Comma-separated locales to use instead of discovering `values-*` directories
    #[arg(short, long, value_delimiter = ',')]
    locales: Vec<String>,

    /// How a failing import row is handled
    #[arg(long, value_enum)]
    import_mode: Option<ImportModeArg>,

    /// Do not keep `strings.xml.bak` when overwriting a locale file
    #[arg(long)]
    no_backup: bool,

    /// Config file (defaults to `<PROJECT>/localizer.toml` when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ImportModeArg {
    /// Validate the whole table before changing anything
    Atomic,
    /// Apply rows as they are read
    Streaming,
}

impl From<ImportModeArg> for ImportMode {
    fn from(value: ImportModeArg) -> Self {
        match value {
            ImportModeArg::Atomic => ImportMode::Atomic,
            ImportModeArg::Streaming => ImportMode::Streaming,
        }
    }
}

fn print_usage() {
    let _ = Args::command().print_help();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors, --help and --version all end here; none is a failure.
            let _ = e.print();
            return;
        }
    };
    logging::init(args.verbose);

    let Some(project) = args.project.as_deref() else {
        print_usage();
        return;
    };
    if args.export.is_none() && args.import.is_none() {
        print_usage();
        return;
    }

    if let Err(e) = run(&args, project) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, project: &Path) -> Result<(), String> {
    validate_project_path(project)?;

    let options = load_options(args.config.as_deref(), project)?;
    let options = apply_overrides(
        options,
        Overrides {
            locales: args.locales.clone(),
            import_mode: args.import_mode.map(Into::into),
            no_backup: args.no_backup,
        },
    );
    // Covers locales from both the command line and the config file.
    for locale in &options.locales {
        validate_locale(locale)?;
    }

    let mut localizer = Localizer::open(project, options).map_err(|e| e.to_string())?;
    info!(
        dir = %localizer.resources_dir().display(),
        locales = ?localizer.locales().as_slice(),
        "opened project"
    );

    if let Some(path) = &args.export {
        validate_output_path(path)?;
        let rows = localizer
            .export_to_file(path)
            .map_err(|e| format!("Error exporting to {}: {}", path.display(), e))?;
        println!(
            "Exported {} strings in {} locales to {}",
            rows,
            localizer.locales().len(),
            path.display()
        );
    } else if let Some(path) = &args.import {
        validate_file_path(path)?;
        let report = localizer
            .import_from_file(path)
            .map_err(|e| format!("Error importing {}: {}", path.display(), e))?;
        let written = localizer.save().map_err(|e| e.to_string())?;
        if !report.locales_added.is_empty() {
            println!("Added locales: {}", report.locales_added.join(", "));
        }
        println!(
            "Imported {} rows and wrote {} locale files",
            report.rows,
            written.files.len()
        );
    }

    Ok(())
}
