use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};

use edulink::config::{ConfigError, EdulinkConfig};
use edulink::landing::{self, Navigation};
use edulink::models::{Difficulty, LengthFilter, UploadedFile, VideoFilter};
use edulink::notice::Notices;
use edulink::panels::{AssignTarget, Submission};
use edulink::{Collaborators, PanelError, StudentDashboard, TeacherDashboard, TeacherSession};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Panel(#[from] PanelError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} was ignored: a job is already pending")]
    Ignored(&'static str),
    #[error("{0} was cancelled")]
    Cancelled(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "edulink", about = "EduLink study tools from the command line")]
struct Cli {
    /// Skip simulated delays.
    #[arg(long, env = "EDULINK_INSTANT")]
    instant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the landing page.
    Landing {
        #[arg(long)]
        menu_open: bool,
    },
    Student(StudentCommand),
    Teacher(TeacherCommand),
}

#[derive(Args, Debug)]
struct StudentCommand {
    #[command(subcommand)]
    command: StudentSubcommand,
}

#[derive(Subcommand, Debug)]
enum StudentSubcommand {
    GenerateTest {
        topic: String,
        #[arg(long, default_value = "intermediate")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 5)]
        mcq: u32,
        #[arg(long, default_value_t = 3)]
        short: u32,
        #[arg(long, default_value_t = 2)]
        long: u32,
        #[arg(long, default_value_t = 30)]
        duration: u32,
    },
    Chat {
        message: String,
    },
    AnalyzePdf {
        name: String,
        #[arg(long, default_value = "application/pdf")]
        mime: String,
        #[arg(long, default_value_t = 2_516_582)]
        size_bytes: u64,
    },
    SearchVideos {
        query: String,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long, value_enum, default_value_t = LengthArg::All)]
        length: LengthArg,
    },
    Overview,
}

#[derive(Args, Debug)]
struct TeacherCommand {
    /// Session JSON blob with `name`, `subject` and `school`.
    #[arg(long, env = "EDULINK_TEACHER_SESSION")]
    session: Option<String>,

    #[command(subcommand)]
    command: TeacherSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeacherSubcommand {
    GenerateTest {
        topic: String,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long, default_value_t = 5)]
        mcq: u32,
        #[arg(long, default_value_t = 3)]
        true_false: u32,
        #[arg(long, default_value_t = 2)]
        short: u32,
        #[arg(long, default_value_t = 1)]
        essay: u32,
        #[arg(long, default_value_t = 60)]
        duration: u32,
    },
    /// Generate a test and assign it in one go.
    Assign {
        topic: String,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Comma-separated student names.
        #[arg(long, conflicts_with = "classes")]
        students: Option<String>,
        /// Comma-separated class names.
        #[arg(long)]
        classes: Option<String>,
        #[arg(long)]
        due: String,
        #[arg(long, default_value = "")]
        instructions: String,
    },
    Overview,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LengthArg {
    All,
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for LengthFilter {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::All => Self::All,
            LengthArg::Short => Self::Short,
            LengthArg::Medium => Self::Medium,
            LengthArg::Long => Self::Long,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = if cli.instant { EdulinkConfig::instant() } else { EdulinkConfig::from_env()? };
    let collab = Collaborators::canned();

    match cli.command {
        Command::Landing { menu_open } => {
            print!("{}", landing::render(&Navigation { menu_open }));
            Ok(())
        }
        Command::Student(student) => run_student(student, &collab, &config).await,
        Command::Teacher(teacher) => run_teacher(teacher, &collab, &config).await,
    }
}

async fn run_student(cmd: StudentCommand, collab: &Collaborators, config: &EdulinkConfig) -> Result<(), CliError> {
    let dash = StudentDashboard::new(collab, config);
    match cmd.command {
        StudentSubcommand::GenerateTest { topic, difficulty, mcq, short, long, duration } => {
            let panel = &dash.test_generator;
            panel.update_form(|f| {
                f.with_topic(topic)
                    .with_difficulty(difficulty)
                    .with_mcq_count(mcq)
                    .with_short_answer_count(short)
                    .with_long_answer_count(long)
                    .with_duration(duration)
            });
            let result = panel.generate().await;
            let test = outcome("generate-test", panel.notices(), result)?;
            print_json(&json!({ "test": test, "total_points": test.total_points(), "notices": panel.notices().drain() }))
        }
        StudentSubcommand::Chat { message } => {
            let panel = &dash.chat;
            let result = panel.send(&message).await;
            outcome("chat", panel.notices(), result)?;
            print_json(&json!({ "messages": panel.messages() }))
        }
        StudentSubcommand::AnalyzePdf { name, mime, size_bytes } => {
            let panel = &dash.pdf_analyzer;
            let result = panel.upload(Some(UploadedFile::new(name, mime, size_bytes))).await;
            let doc = outcome("analyze-pdf", panel.notices(), result)?;
            print_json(&json!({ "document": doc, "notices": panel.notices().drain() }))
        }
        StudentSubcommand::SearchVideos { query, difficulty, length } => {
            let panel = &dash.videos;
            panel.set_query(query);
            let result = panel.search().await;
            outcome("search-videos", panel.notices(), result)?;
            panel.set_filter(VideoFilter::default().with_difficulty(difficulty).with_length(length.into()));
            print_json(&json!({ "videos": panel.visible() }))
        }
        StudentSubcommand::Overview => print_json(&serde_json::to_value(dash.overview())?),
    }
}

async fn run_teacher(cmd: TeacherCommand, collab: &Collaborators, config: &EdulinkConfig) -> Result<(), CliError> {
    let session = TeacherSession::from_json(cmd.session.as_deref());
    let dash = TeacherDashboard::new(session, collab, config);
    let panel = &dash.tests;
    match cmd.command {
        TeacherSubcommand::GenerateTest { topic, difficulty, mcq, true_false, short, essay, duration } => {
            panel.update_form(|f| {
                f.with_topic(topic)
                    .with_difficulty(difficulty)
                    .with_mcq_count(mcq)
                    .with_true_false_count(true_false)
                    .with_short_answer_count(short)
                    .with_essay_count(essay)
                    .with_duration(duration)
            });
            let result = panel.generate().await;
            let test = outcome("generate-test", panel.notices(), result)?;
            print_json(&json!({ "test": test, "total_points": test.total_points(), "notices": panel.notices().drain() }))
        }
        TeacherSubcommand::Assign { topic, difficulty, students, classes, due, instructions } => {
            panel.update_form(|f| f.with_topic(topic).with_difficulty(difficulty));
            let result = panel.generate().await;
            let test = outcome("assign", panel.notices(), result)?;

            let target = if classes.is_some() { AssignTarget::Class } else { AssignTarget::Individual };
            panel.update_assignment(|a| {
                a.with_selected_test(test.id)
                    .with_target(target)
                    .with_students(students.unwrap_or_default())
                    .with_classes(classes.unwrap_or_default())
                    .with_due_date(due)
                    .with_instructions(instructions)
            });
            let assigned = panel.assign().inspect_err(|_| report(panel.notices()))?;
            print_json(&json!({ "test": assigned, "notices": panel.notices().drain() }))
        }
        TeacherSubcommand::Overview => print_json(&serde_json::to_value(dash.overview())?),
    }
}

/// Unwrap a completed submission, printing the panel's notices on failure.
fn outcome<T>(action: &'static str, notices: &Notices, result: Result<Submission<T>, PanelError>) -> Result<T, CliError> {
    match result {
        Ok(Submission::Completed(value)) => Ok(value),
        Ok(Submission::Ignored) => Err(CliError::Ignored(action)),
        Ok(Submission::Cancelled) => Err(CliError::Cancelled(action)),
        Err(e) => {
            report(notices);
            Err(e.into())
        }
    }
}

fn report(notices: &Notices) {
    for notice in notices.drain() {
        eprintln!("{}: {}", notice.title, notice.description);
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
