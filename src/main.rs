use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use reflection_journal::{
    config::Config,
    error::AppError,
    model::submission::{StudentSubmission, SubmitReflectionParam},
    service::{
        course::CourseService, feedback::gemini::GeminiFeedbackProvider,
        schedule::ScheduleService, submission::SubmissionService,
    },
    startup,
};

#[derive(Parser)]
#[command(name = "reflection-journal", about = "Reflection schedule maintenance")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Regenerate all reflections of a course from its configuration
    Regenerate { course_id: i32 },
    /// Reconcile a course's reflections to the given start dates (YYYY-MM-DD)
    Select {
        course_id: i32,
        #[arg(required = true)]
        dates: Vec<NaiveDate>,
    },
    /// List a course's reflections in sequence order
    List { course_id: i32 },
    /// Show submitted entries per reflection of a course
    Overview { course_id: i32 },
    /// Submit a reflection on behalf of a student
    Submit {
        reflection_id: i32,
        student_id: i32,
        content: String,
    },
    /// Show a student's submission and any released feedback
    Feedback { reflection_id: i32, student_id: i32 },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    match command {
        Command::Migrate => {
            tracing::info!("Migrations applied");
        }
        Command::Regenerate { course_id } => {
            let outcome = ScheduleService::with_db(&db).regenerate(course_id).await?;
            println!(
                "created {}, updated {}, deleted {}, protected {}",
                outcome.created, outcome.updated, outcome.deleted, outcome.protected
            );
        }
        Command::Select { course_id, dates } => {
            let outcome = ScheduleService::with_db(&db)
                .select_dates(course_id, &dates)
                .await?;
            println!(
                "created {}, updated {}, deleted {}, protected {}",
                outcome.created, outcome.updated, outcome.deleted, outcome.protected
            );
        }
        Command::List { course_id } => {
            for reflection in CourseService::new(&db).reflections(course_id).await? {
                println!(
                    "{:>3}  {}  {}  due {}",
                    reflection.sequence_number,
                    reflection.start_date,
                    reflection.display_name,
                    reflection.due_date.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }
        Command::Overview { course_id } => {
            for entry in CourseService::new(&db).overview(course_id).await? {
                println!(
                    "{:>5}  {}  {} submitted",
                    entry.reflection_id, entry.display_name, entry.submissions_received
                );
            }
        }
        Command::Submit {
            reflection_id,
            student_id,
            content,
        } => {
            let http = startup::setup_reqwest_client(&config)?;
            let provider = GeminiFeedbackProvider::from_config(http, &config);
            let submission = SubmissionService::new(&db, &provider)
                .submit(
                    SubmitReflectionParam {
                        reflection_id,
                        student_id,
                        content,
                    },
                    Utc::now(),
                )
                .await?;
            print_student_submission(&StudentSubmission::from(submission));
        }
        Command::Feedback {
            reflection_id,
            student_id,
        } => {
            let http = startup::setup_reqwest_client(&config)?;
            let provider = GeminiFeedbackProvider::from_config(http, &config);
            match SubmissionService::new(&db, &provider)
                .for_student(reflection_id, student_id)
                .await?
            {
                Some(submission) => print_student_submission(&submission),
                None => println!("not submitted"),
            }
        }
    }

    Ok(())
}

fn print_student_submission(submission: &StudentSubmission) {
    match submission.submitted_at {
        Some(at) => println!("submitted {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("draft"),
    }
    match &submission.feedback {
        Some(feedback) => println!("{}", feedback),
        None => println!("feedback not released yet"),
    }
}
