use clap::Parser;
use database::ImportError;
use database::db::create_connection;
use database::services::import_course::{CourseImportService, ImportStats};
use database::services::resolve_combined::CombinedGroupResolver;
use datafetcher::client::CatalogClient;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use models::semester::Semester;
use std::process::ExitCode;

/// Imports one semester of the course catalog into the database
#[derive(Parser, Debug)]
#[command(name = "import_courses")]
#[command(about = "Import the course catalog for one semester")]
struct Args {
    /// Semester code, e.g. FA25
    #[arg(short, long, env = "IMPORT_SEMESTER")]
    semester: String,

    /// Restrict the import to these subject codes
    #[arg(long)]
    subjects: Vec<String>,

    /// Skip combined-group resolution after the import
    #[arg(long)]
    skip_combined: bool,

    /// Override the catalog API base URL
    #[arg(long, env = "CATALOG_API_BASE")]
    base_url: Option<String>,
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

async fn run(args: Args) -> Result<(), ImportError> {
    if !Semester::is_valid(&args.semester) {
        return Err(ImportError::Config(format!(
            "invalid semester code: {}",
            args.semester
        )));
    }

    let db = create_connection().await?;
    Migrator::up(&db, None).await?;

    let client = match &args.base_url {
        Some(url) => CatalogClient::with_base_url(url),
        None => CatalogClient::new(),
    };

    let raw_subjects = client.fetch_subjects(&args.semester).await;
    if raw_subjects.is_empty() {
        return Err(ImportError::Config(format!(
            "no subjects available for {}",
            args.semester
        )));
    }

    let mut subjects = CourseImportService::initialize_subjects(&db, &raw_subjects).await?;
    if !args.subjects.is_empty() {
        subjects.retain(|s| args.subjects.contains(s));
    }

    let mut total = ImportStats::default();
    for (idx, subject) in subjects.iter().enumerate() {
        info!("[{}/{}] importing subject {subject}", idx + 1, subjects.len());
        let classes = client.fetch_courses(&args.semester, subject).await;
        let stats = CourseImportService::import_subject(&db, &args.semester, &classes).await?;
        total.absorb(&stats);
    }
    info!("import finished: {total}");

    if !args.skip_combined {
        CombinedGroupResolver::resolve(&db, &args.semester).await?;
    }

    Ok(())
}
