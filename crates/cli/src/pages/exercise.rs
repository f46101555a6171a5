use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::chart::Tooltip;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload::MetricPayload;
use stronger_charts::report::ChartPage;

use crate::cli::ExerciseArgs;
use crate::error::CliError;
use crate::pages;

pub(crate) fn render(args: ExerciseArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new(format!("Exercise {name}", name = args.name));

    match api.exercise_charts(&args.name, args.reps) {
        Ok(envelope) => {
            if let Some(data) = pages::section(&envelope, "exercise-progress") {
                pages::add_chart(&mut page, "exercise-progress", progression_chart(data));
            }
            if let Some(data) = pages::section(&envelope, "exercise-records") {
                pages::add_chart(&mut page, "exercise-records", records_chart(data));
            }
        }
        Err(error) => warn!("fetching the exercise charts failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

fn progression_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Exercise History")
        .y_title("Weight (kg)")
        .series_name("Rep History")
        .build(payload)
}

fn records_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::Records, "Rep Records")
        .y_title("Weight (kg)")
        .tooltip(Tooltip::point(
            "{series.name} - <b>{point.x}RM</b> is <b>{point.y}</b>",
        ))
        .build(payload)
}
