use clap::Parser;
use database::ImportError;
use database::db::create_connection;
use datafetcher::client::CatalogClient;
use datafetcher::integrity::IntegrityChecker;
use log::error;
use models::semester::Semester;
use std::process::ExitCode;

/// Cross-checks the database against the catalog API for one semester
#[derive(Parser, Debug)]
#[command(name = "verify_integrity")]
#[command(about = "Compare imported data against the catalog API")]
struct Args {
    /// Semester code, e.g. FA25
    #[arg(short, long, env = "IMPORT_SEMESTER")]
    semester: String,

    /// Restrict the check to these subject codes
    #[arg(long)]
    subjects: Vec<String>,

    /// Override the catalog API base URL
    #[arg(long, env = "CATALOG_API_BASE")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<bool, ImportError> {
    if !Semester::is_valid(&args.semester) {
        return Err(ImportError::Config(format!(
            "invalid semester code: {}",
            args.semester
        )));
    }

    let db = create_connection().await?;
    let client = match &args.base_url {
        Some(url) => CatalogClient::with_base_url(url),
        None => CatalogClient::new(),
    };

    let report = IntegrityChecker::check(&db, &client, &args.semester, &args.subjects).await?;
    println!("{report}");
    Ok(report.is_clean())
}
