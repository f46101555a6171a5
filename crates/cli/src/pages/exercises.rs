use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload;
use stronger_charts::payload::MetricPayload;
use stronger_charts::report::ChartPage;

use crate::cli::ExercisesArgs;
use crate::error::CliError;
use crate::pages;

pub(crate) fn render(args: ExercisesArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new("Exercises");

    match api.big_three_progress(&args.username) {
        Ok(data) => pages::add_chart(&mut page, "big-three", big_three_chart(&data)),
        Err(error) => warn!("fetching the big three progress failed: {error}"),
    }

    match api.popular_exercises() {
        Ok(data) => pages::add_chart(&mut page, "popular-exercises", popular_chart(&data)),
        Err(error) => warn!("fetching the popular exercises failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

fn big_three_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Big Three History")
        .y_title("Weight (kg)")
        .legend()
        .build(payload)
}

/// The popular exercises arrive grouped by exercise kind; the groups are
/// flattened in order into one column per exercise.
fn popular_chart(grouped: &MetricPayload) -> ChartResult<BuiltChart> {
    let flat = payload::flatten_groups(grouped);

    ChartBuilder::new(ChartKind::Breakdown, "Popular Exercises (All Users)")
        .y_title("Sets")
        .series_name("Popular Exercises")
        .build(&flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronger_charts::series::ChartPoint;

    #[test]
    fn popular_exercises_flatten_across_groups() {
        let grouped: MetricPayload = serde_json::from_str(
            r#"{
                "compound": { "Deadlift": 42, "Squat": 40 },
                "isolation": { "Curl": 12 }
            }"#,
        )
        .unwrap();

        let chart = popular_chart(&grouped).unwrap();

        assert_eq!(
            chart.spec.x_axis.categories,
            Some(vec![
                String::from("Deadlift"),
                String::from("Squat"),
                String::from("Curl")
            ])
        );
        assert_eq!(
            chart.spec.series[0].data,
            vec![
                ChartPoint::Value(42.0),
                ChartPoint::Value(40.0),
                ChartPoint::Value(12.0),
            ]
        );
    }
}
