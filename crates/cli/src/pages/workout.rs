use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::chart::ChartSpec;
use stronger_charts::chart::Title;
use stronger_charts::chart::Tooltip;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload::MetricPayload;
use stronger_charts::payload::RowCell;
use stronger_charts::report::ChartPage;
use stronger_charts::series::ChartPoint;
use stronger_charts::series::ChartSeries;

use crate::cli::WorkoutArgs;
use crate::error::CliError;
use crate::pages;

pub(crate) fn render(args: WorkoutArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new(format!("Workout {id}", id = args.workout));

    match api.workout_charts(args.workout) {
        Ok(envelope) => {
            if let Some(sets) = envelope.get("sets").and_then(|node| node.as_row()) {
                page.add("sets", set_timeline_chart(sets));
            } else {
                warn!("the server response has no `sets` section");
            }

            if let Some(data) = pages::section(&envelope, "rep-ranges") {
                pages::add_chart(&mut page, "rep-ranges", set_share_chart(data, "Rep Ranges"));
            }
            if let Some(data) = pages::section(&envelope, "muscle-groups") {
                pages::add_chart(
                    &mut page,
                    "muscle-groups",
                    set_share_chart(data, "Muscle Groups"),
                );
            }
            if let Some(data) = pages::section(&envelope, "rep-ranges-per-muscle") {
                page.add("rep-ranges-per-muscle", rep_ranges_per_muscle_chart(data));
            }
        }
        Err(error) => warn!("fetching the workout charts failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

/// The reps of every set of the workout, in performed order, with the
/// exercise and weight carried into the tooltip.
fn set_timeline_chart(sets: &[RowCell]) -> BuiltChart {
    let points = sets
        .iter()
        .filter_map(|set| {
            let RowCell::Cells(cells) = set else {
                return None;
            };

            Some(ChartPoint::WorkoutSet {
                exercise: cells.first()?.as_text()?.to_string(),
                y: cells.get(1)?.as_number()?,
                weight: cells.get(2)?.as_number()?,
            })
        })
        .collect();

    let mut spec = ChartSpec::line("Sets During Workout");
    spec.y_axis.title = Some(Title::text("Reps in Set"));
    spec.tooltip = Some(Tooltip::point("{point.exercise} - {point.y}x{point.weight}kg"));
    spec.series = vec![ChartSeries::new("Reps", points)];

    BuiltChart::new(spec)
}

/// A proportional chart of how the workout sets split across a grouping.
fn set_share_chart(payload: &MetricPayload, title: &str) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::Distribution, title)
        .series_name("Muscles Hit")
        .tooltip(Tooltip::point("<b>{point.percentage:.1f}% of sets</b>"))
        .legend()
        .build(payload)
}

/// One column series per rep range over the muscle categories the
/// `muscles` row provides.
fn rep_ranges_per_muscle_chart(payload: &MetricPayload) -> BuiltChart {
    let categories = payload
        .get("muscles")
        .and_then(|node| node.as_row())
        .map(|cells| {
            cells
                .iter()
                .filter_map(|cell| cell.as_text().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    let series = payload
        .iter()
        .filter(|(key, _)| key.as_str() != "muscles")
        .filter_map(|(name, node)| {
            let points = node
                .as_row()?
                .iter()
                .filter_map(RowCell::as_number)
                .map(ChartPoint::Value)
                .collect();

            Some(ChartSeries::new(name.clone(), points))
        })
        .collect();

    let mut spec = ChartSpec::column("Rep Ranges Per Muscle");
    spec.x_axis.categories = Some(categories);
    spec.y_axis.title = Some(Title::text("Sets in rep range"));
    spec.series = series;

    BuiltChart::new(spec)
}
