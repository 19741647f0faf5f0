use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod burnout;
mod db;
mod models;
mod placement;
mod readiness;
mod recommend;
mod report;
mod store;

use db::PgStore;
use models::{BurnoutInput, DepartmentReportInput, DerivedOverrides, PlacementFeatures};

#[derive(Parser)]
#[command(name = "placement-readiness-engine")]
#[command(about = "Student readiness, burnout and placement analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load realistic seed data
    Seed,
    /// Import mark rows from a CSV file
    ImportMarks {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Import attendance rows from a CSV file
    ImportAttendance {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Import learning resources from a CSV file
    ImportResources {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Score skill readiness from academic signals
    Readiness {
        #[arg(long)]
        avg_marks: f64,
        #[arg(long)]
        attendance_pct: f64,
        #[arg(long)]
        lab_score: f64,
        #[arg(long)]
        skill_coverage_pct: f64,
        #[arg(long, default_value_t = 0)]
        project_count: u32,
        #[arg(long = "missing-skill")]
        missing_skills: Vec<String>,
    },
    /// Estimate burnout risk from trend and delay signals
    Burnout {
        #[arg(long)]
        attendance_trend: f64,
        #[arg(long)]
        marks_trend: f64,
        #[arg(long, default_value_t = 0)]
        delays: u32,
        #[arg(long, default_value_t = 0)]
        high_attendance_low_marks: i32,
    },
    /// Predict placement probability
    Placement {
        #[command(subcommand)]
        strategy: PlacementStrategy,
    },
    /// Recommend learning resources for missing skills
    Recommend {
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Generate a department accreditation report from a JSON input file
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum PlacementStrategy {
    /// All seven features supplied on the command line
    Direct {
        #[arg(long)]
        skill_readiness_score: f64,
        #[arg(long, default_value_t = 0)]
        project_count: u32,
        #[arg(long, default_value_t = false)]
        internship_status: bool,
        #[arg(long, default_value = "None")]
        internship_type: String,
        #[arg(long, default_value_t = 0)]
        internship_duration: u32,
        #[arg(long)]
        communication_rating: f64,
        #[arg(long)]
        core_subject_marks: f64,
    },
    /// Marks and attendance derived from the student's stored history
    Derived {
        #[arg(long)]
        student: Uuid,
        #[arg(long, default_value_t = 0.0)]
        skill_readiness_score: f64,
        #[arg(long, default_value_t = 0)]
        project_count: u32,
        #[arg(long, default_value_t = false)]
        internship_status: bool,
        #[arg(long, default_value = "None")]
        internship_type: String,
        #[arg(long, default_value_t = 0)]
        internship_duration: u32,
        #[arg(long, default_value_t = 0.0)]
        communication_rating: f64,
    },
}

async fn connect() -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to a Postgres instance")?;

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::InitDb => {
            let pool = connect().await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect().await?;
            db::seed(&pool).await?;
            println!("Seed data inserted.");
        }
        Commands::ImportMarks { csv } => {
            let pool = connect().await?;
            let inserted = db::import_marks_csv(&pool, &csv).await?;
            println!("Inserted {inserted} mark rows from {}.", csv.display());
        }
        Commands::ImportAttendance { csv } => {
            let pool = connect().await?;
            let inserted = db::import_attendance_csv(&pool, &csv).await?;
            println!(
                "Inserted {inserted} attendance rows from {}.",
                csv.display()
            );
        }
        Commands::ImportResources { csv } => {
            let pool = connect().await?;
            let inserted = db::import_resources_csv(&pool, &csv).await?;
            println!("Inserted {inserted} resource rows from {}.", csv.display());
        }
        Commands::Readiness {
            avg_marks,
            attendance_pct,
            lab_score,
            skill_coverage_pct,
            project_count,
            missing_skills,
        } => {
            let result = readiness::score(
                avg_marks,
                attendance_pct,
                lab_score,
                skill_coverage_pct,
                project_count,
                missing_skills,
            );
            print_json(&result)?;
        }
        Commands::Burnout {
            attendance_trend,
            marks_trend,
            delays,
            high_attendance_low_marks,
        } => {
            let result = burnout::predict(&BurnoutInput {
                weekly_attendance_trend: attendance_trend,
                marks_decline_trend: marks_trend,
                lab_submission_delays: delays,
                high_attendance_low_marks,
            });
            print_json(&result)?;
        }
        Commands::Placement { strategy } => match strategy {
            PlacementStrategy::Direct {
                skill_readiness_score,
                project_count,
                internship_status,
                internship_type,
                internship_duration,
                communication_rating,
                core_subject_marks,
            } => {
                let result = placement::predict_direct(&PlacementFeatures {
                    skill_readiness_score,
                    project_count,
                    internship_status,
                    internship_type,
                    internship_duration,
                    communication_rating,
                    core_subject_marks,
                });
                print_json(&result)?;
            }
            PlacementStrategy::Derived {
                student,
                skill_readiness_score,
                project_count,
                internship_status,
                internship_type,
                internship_duration,
                communication_rating,
            } => {
                let pool = connect().await?;
                let store = PgStore::new(pool);
                let overrides = DerivedOverrides {
                    skill_readiness_score,
                    project_count,
                    internship_status,
                    internship_type,
                    internship_duration,
                    communication_rating,
                };
                let result = placement::predict_for_student(&store, student, &overrides).await?;
                print_json(&result)?;
            }
        },
        Commands::Recommend { skills } => {
            let pool = connect().await?;
            let store = PgStore::new(pool);
            let recommendations = recommend::recommend(&store, &skills).await?;
            print_json(&recommendations)?;
        }
        Commands::Report { input } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let department: DepartmentReportInput = serde_json::from_str(&raw)
                .with_context(|| format!("invalid report input in {}", input.display()))?;
            let report = report::generate(&department);
            print_json(&report)?;
        }
    }

    Ok(())
}
