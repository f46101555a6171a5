use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use stronger_client::ApiClient;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the dashboard charts: big three progress and the calories
    /// of the last week.
    Dashboard(DashboardArgs),

    /// Render the nutrition charts: bodyweight, calories and macros.
    Nutrition(NutritionArgs),

    /// Render the charts summarizing the recent workouts.
    Workouts(WorkoutsArgs),

    /// Render the charts of a single workout.
    Workout(WorkoutArgs),

    /// Render the history and records charts of a single exercise.
    Exercise(ExerciseArgs),

    /// Render the exercises index charts: big three progress and the
    /// most popular exercises.
    Exercises(ExercisesArgs),

    /// Render the profile charts of a user.
    Profile(ProfileArgs),

    /// Log a bodyweight entry.
    LogBodyweight(LogBodyweightArgs),

    /// Start following another user.
    Follow(FollowArgs),

    /// Stop following another user.
    Unfollow(UnfollowArgs),

    /// Join a group.
    JoinGroup(JoinGroupArgs),
}

#[derive(Args)]
pub(crate) struct ApiArgs {
    /// The base URL of the stronger server.
    #[arg(short, long, default_value = "http://localhost:8000")]
    pub(crate) base_url: String,

    /// Seed the anti-forgery token cookie used by requests that
    /// mutate state.
    #[arg(long)]
    pub(crate) csrf_token: Option<String>,
}

impl ApiArgs {
    pub(crate) fn client(&self) -> Result<ApiClient, CliError> {
        let api = ApiClient::new(&self.base_url)?;

        if let Some(token) = &self.csrf_token {
            api.set_csrf_token(token);
        }

        Ok(api)
    }
}

#[derive(Args)]
pub(crate) struct ReportArgs {
    /// Specify the path where the generated report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DashboardArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The user whose lift progress is charted.
    #[arg(short, long)]
    pub(crate) username: String,
}

#[derive(Args)]
pub(crate) struct NutritionArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The id of the user whose bodyweight is charted.
    #[arg(short, long)]
    pub(crate) user: u64,

    /// How many days of nutrition history to summarize.
    #[arg(short, long, default_value_t = 14)]
    pub(crate) days_back: u32,
}

#[derive(Args)]
pub(crate) struct WorkoutsArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// How many days of workout history to summarize.
    #[arg(short, long, default_value_t = 14)]
    pub(crate) days_back: u32,
}

#[derive(Args)]
pub(crate) struct WorkoutArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The id of the workout.
    #[arg(short, long)]
    pub(crate) workout: u64,
}

#[derive(Args)]
pub(crate) struct ExerciseArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The name of the exercise.
    #[arg(short, long)]
    pub(crate) name: String,

    /// The rep range the progression chart is filtered to.
    #[arg(short, long, default_value_t = 1)]
    pub(crate) reps: u32,
}

#[derive(Args)]
pub(crate) struct ExercisesArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The user whose lift progress is charted.
    #[arg(short, long)]
    pub(crate) username: String,
}

#[derive(Args)]
pub(crate) struct ProfileArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    #[command(flatten)]
    pub(crate) report: ReportArgs,

    /// The user whose profile is charted.
    #[arg(short = 'n', long)]
    pub(crate) username: String,

    /// The id of the same user, for the bodyweight endpoint.
    #[arg(short, long)]
    pub(crate) user: u64,
}

#[derive(Args)]
pub(crate) struct LogBodyweightArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    /// The bodyweight in kilograms.
    #[arg(short = 'w', long)]
    pub(crate) bodyweight: f64,

    /// The date of the measurement.
    #[arg(short, long)]
    pub(crate) date: NaiveDate,

    /// The id of the user the measurement belongs to.
    #[arg(short, long)]
    pub(crate) user: u64,
}

#[derive(Args)]
pub(crate) struct FollowArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    /// The id of the following user.
    #[arg(short, long)]
    pub(crate) user: u64,

    /// The id of the user to follow.
    #[arg(short, long)]
    pub(crate) friend: u64,
}

#[derive(Args)]
pub(crate) struct UnfollowArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    /// The id of the friendship to delete.
    #[arg(short, long)]
    pub(crate) friendship: u64,
}

#[derive(Args)]
pub(crate) struct JoinGroupArgs {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    /// The id of the joining user.
    #[arg(short, long)]
    pub(crate) user: u64,

    /// The name of the group to join.
    #[arg(short, long)]
    pub(crate) group: String,

    /// The date the membership starts on.
    #[arg(short, long)]
    pub(crate) joined: NaiveDate,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
