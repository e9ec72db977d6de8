use clap::Parser;
use database::ImportError;
use database::db::create_connection;
use database::services::import_college::CollegeImportService;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DATA_DIR: &str = "data/colleges";

/// Imports college files linking programs and subjects to colleges
#[derive(Parser, Debug)]
#[command(name = "import_colleges")]
#[command(about = "Import college YAML files")]
struct Args {
    /// College ids to import (resolved to {dir}/{id}.yml)
    #[arg(long, num_args = 1.., value_name = "ID", conflicts_with_all = ["all", "validate"])]
    colleges: Vec<String>,

    /// Import every YAML file in the data directory
    #[arg(long, conflicts_with = "validate")]
    all: bool,

    /// Validate files without touching the database; no ids means all files
    #[arg(long, num_args = 0.., value_name = "ID")]
    validate: Option<Vec<String>>,

    /// Directory containing the college YAML files
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn find_yaml_files(dir: &Path, ids: &[String]) -> Result<Vec<PathBuf>, ImportError> {
    if !ids.is_empty() {
        let mut files = Vec::new();
        for id in ids {
            let path = dir.join(format!("{}.yml", id.to_lowercase()));
            if !path.exists() {
                return Err(ImportError::Config(format!(
                    "no YAML file for {id} at {}",
                    path.display()
                )));
            }
            files.push(path);
        }
        return Ok(files);
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ImportError::Io {
        path: dir.display().to_string(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yml" | "yaml")
            )
        })
        .collect();
    files.sort();
    Ok(files)
}

async fn run(args: Args) -> Result<(), ImportError> {
    if let Some(ids) = &args.validate {
        let files = find_yaml_files(&args.dir, ids)?;
        let mut failures = 0u32;
        for path in &files {
            match CollegeImportService::load_file(path) {
                Ok(file) => info!(
                    "{}: college {} is valid ({} programs, {} subjects)",
                    path.display(),
                    file.college.id,
                    file.programs.len(),
                    file.subjects.len()
                ),
                Err(e) => {
                    error!("{e}");
                    failures += 1;
                }
            }
        }
        if failures > 0 {
            return Err(ImportError::Config(format!(
                "{failures} of {} files failed validation",
                files.len()
            )));
        }
        return Ok(());
    }

    if args.colleges.is_empty() && !args.all {
        return Err(ImportError::Config(
            "one of --colleges, --all, or --validate is required".to_string(),
        ));
    }
    let files = find_yaml_files(&args.dir, &args.colleges)?;
    if files.is_empty() {
        return Err(ImportError::Config(format!(
            "no YAML files found in {}",
            args.dir.display()
        )));
    }

    let db = create_connection().await?;
    Migrator::up(&db, None).await?;

    let mut failures = 0u32;
    for path in &files {
        match CollegeImportService::import_file(&db, path).await {
            Ok(()) => info!("{}: imported", path.display()),
            Err(e) => {
                error!("{}: {e}", path.display());
                failures += 1;
            }
        }
    }
    if failures > 0 {
        return Err(ImportError::Config(format!(
            "{failures} of {} files failed to import",
            files.len()
        )));
    }
    Ok(())
}
