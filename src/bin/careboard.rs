//! Command-line entry point for careboard.
//!
//! Usage:
//!
//! ```text
//! careboard register-user --email ada@example.com --username Ada
//! careboard create-record --owner ada@example.com --name "Blood work"
//! careboard analyze --record <uuid> scan.png
//! careboard structure --record <uuid>
//! careboard board --record <uuid>
//! careboard move --record <uuid> --task 3 --to done
//! careboard metrics --owner ada@example.com
//! ```
//!
//! Configuration is read from the environment (and `.env`, when present);
//! see [`careboard::config`]. The database schema in `migrations/` must be
//! applied beforehand.

use careboard::{
    assistant::adapters::GeminiModel,
    config::AppConfig,
    kanban::{
        domain::{ColumnId, Kanban, TaskKey},
        services::ScreeningBoardService,
    },
    metrics::services::DashboardMetricsService,
    record::{
        adapters::postgres::PostgresRecordRepository,
        domain::{OwnerEmail, RecordId, UserProfile},
        services::RecordCatalogService,
    },
    telemetry,
    treatment::{
        domain::ReportUpload,
        services::{PlanStructuringService, ReportAnalysisService},
    },
};
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "careboard")]
#[command(about = "Treatment plans turned into screening boards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a user profile
    RegisterUser {
        /// Email address identifying the user
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        username: String,
        /// Age in years
        #[arg(long)]
        age: Option<u16>,
        /// Free-text location
        #[arg(long)]
        location: Option<String>,
    },
    /// Create an empty record for a registered user
    CreateRecord {
        /// Owner email
        #[arg(long)]
        owner: String,
        /// Record name
        #[arg(long)]
        name: String,
    },
    /// List a user's records
    Records {
        /// Owner email
        #[arg(long)]
        owner: String,
    },
    /// Analyse a report file into a treatment plan
    Analyze {
        /// Record UUID
        #[arg(long)]
        record: Uuid,
        /// Report file (image or PDF)
        file: PathBuf,
        /// MIME type; guessed from the extension when omitted
        #[arg(long)]
        mime_type: Option<String>,
    },
    /// Structure a record's treatment plan into a screening board
    Structure {
        /// Record UUID
        #[arg(long)]
        record: Uuid,
    },
    /// Show a record's screening board
    Board {
        /// Record UUID
        #[arg(long)]
        record: Uuid,
    },
    /// Move a task to another column
    Move {
        /// Record UUID
        #[arg(long)]
        record: Uuid,
        /// Task id
        #[arg(long)]
        task: String,
        /// Target column: todo, doing or done
        #[arg(long)]
        to: String,
    },
    /// Show dashboard metrics for a user
    Metrics {
        /// Owner email
        #[arg(long)]
        owner: String,
        /// Print the raw counters as JSON
        #[arg(long)]
        json: bool,
    },
}

struct App {
    config: AppConfig,
    repository: Arc<PostgresRecordRepository>,
    clock: Arc<DefaultClock>,
}

impl App {
    fn model(&self) -> Result<Arc<GeminiModel>> {
        let model = GeminiModel::from_settings(&self.config.model)
            .wrap_err("GEMINI_API_KEY must be set for commands that call the model")?;
        Ok(Arc::new(model))
    }

    fn boards(&self) -> ScreeningBoardService<PostgresRecordRepository, DefaultClock> {
        ScreeningBoardService::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }

    fn catalog(&self) -> RecordCatalogService<PostgresRecordRepository, DefaultClock> {
        RecordCatalogService::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init()?;
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let repository = Arc::new(
        PostgresRecordRepository::connect(&config.database_url)
            .wrap_err("failed to connect to the records database")?,
    );
    let app = App {
        config,
        repository,
        clock: Arc::new(DefaultClock),
    };

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::RegisterUser {
            email,
            username,
            age,
            location,
        } => register_user(&app, &mut out, &email, &username, age, location).await,
        Command::CreateRecord { owner, name } => {
            let record = app
                .catalog()
                .create_record(&OwnerEmail::new(owner)?, &name)
                .await?;
            writeln!(out, "{}", record.id())?;
            Ok(())
        }
        Command::Records { owner } => list_records(&app, &mut out, &owner).await,
        Command::Analyze {
            record,
            file,
            mime_type,
        } => analyze(&app, &mut out, RecordId::from_uuid(record), &file, mime_type).await,
        Command::Structure { record } => {
            let service = PlanStructuringService::new(
                Arc::clone(&app.repository),
                app.model()?,
                Arc::clone(&app.clock),
            )
            .with_settings(app.config.pipeline);
            let board = service.structure_plan(RecordId::from_uuid(record)).await?;
            write_board(&mut out, &board)
        }
        Command::Board { record } => {
            let board = app.boards().load_board(RecordId::from_uuid(record)).await?;
            write_board(&mut out, &board)
        }
        Command::Move { record, task, to } => {
            let target = ColumnId::try_from(to.as_str())?;
            let moved = app
                .boards()
                .move_task(RecordId::from_uuid(record), &TaskKey::new(task), target)
                .await?;
            writeln!(
                out,
                "[{}] {} -> {}",
                moved.id(),
                moved.content(),
                moved.column_id()
            )?;
            Ok(())
        }
        Command::Metrics { owner, json } => show_metrics(&app, &mut out, &owner, json).await,
    }
}

async fn register_user(
    app: &App,
    out: &mut impl Write,
    email: &str,
    username: &str,
    age: Option<u16>,
    location: Option<String>,
) -> Result<()> {
    let mut profile = UserProfile::new(OwnerEmail::new(email)?, username)?;
    if let Some(years) = age {
        profile = profile.with_age(years);
    }
    if let Some(place) = location {
        profile = profile.with_location(place);
    }
    app.catalog().register_user(&profile).await?;
    writeln!(out, "registered {}", profile.email())?;
    Ok(())
}

async fn list_records(app: &App, out: &mut impl Write, owner: &str) -> Result<()> {
    let records = app.catalog().records_for(&OwnerEmail::new(owner)?).await?;
    for record in records {
        let status = match (record.has_analysis(), record.has_board()) {
            (_, true) => "structured",
            (true, false) => "analysed",
            (false, false) => "empty",
        };
        writeln!(
            out,
            "{}  {:<10}  {}  {}",
            record.id(),
            status,
            record.created_at().format("%Y-%m-%d"),
            record.record_name()
        )?;
    }
    Ok(())
}

async fn analyze(
    app: &App,
    out: &mut impl Write,
    record_id: RecordId,
    file: &Path,
    mime_type: Option<String>,
) -> Result<()> {
    let mime = match mime_type {
        Some(explicit) => explicit,
        None => file
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ReportUpload::mime_type_for_extension)
            .map(str::to_owned)
            .ok_or_else(|| {
                eyre!(
                    "cannot guess the MIME type of {}; pass --mime-type",
                    file.display()
                )
            })?,
    };
    let content =
        std::fs::read(file).wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let upload = ReportUpload::new(file_name, &mime, content)?;

    let service = ReportAnalysisService::new(
        Arc::clone(&app.repository),
        app.model()?,
        Arc::clone(&app.clock),
    )
    .with_settings(app.config.pipeline);
    let record = service.analyze_report(record_id, &upload).await?;
    writeln!(out, "{}", record.analysis_result())?;
    Ok(())
}

async fn show_metrics(app: &App, out: &mut impl Write, owner: &str, json: bool) -> Result<()> {
    let service = DashboardMetricsService::new(Arc::clone(&app.repository));
    let metrics = service.dashboard_for(&OwnerEmail::new(owner)?).await?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&metrics)?)?;
        return Ok(());
    }
    for card in metrics.cards() {
        writeln!(out, "{:<32} {}", card.title, card.value)?;
    }
    Ok(())
}

fn write_board(out: &mut impl Write, board: &Kanban) -> Result<()> {
    for column in board.columns() {
        writeln!(out, "{}", column.title())?;
        for task in board.tasks_by_column(column.id()) {
            writeln!(out, "  [{}] {}", task.id(), task.content())?;
        }
    }
    let mut overdue = board.tasks_by_column(ColumnId::Overdue).peekable();
    if overdue.peek().is_some() {
        writeln!(out, "{}", ColumnId::Overdue.default_title())?;
        for task in overdue {
            writeln!(out, "  [{}] {}", task.id(), task.content())?;
        }
    }
    Ok(())
}
