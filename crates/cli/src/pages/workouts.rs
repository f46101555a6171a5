use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::chart::Axis;
use stronger_charts::chart::ChartSpec;
use stronger_charts::chart::Legend;
use stronger_charts::chart::Tooltip;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload::MetricNode;
use stronger_charts::payload::MetricPayload;
use stronger_charts::payload::RowCell;
use stronger_charts::report::ChartPage;
use stronger_charts::series::ChartPoint;
use stronger_charts::series::ChartSeries;

use crate::cli::WorkoutsArgs;
use crate::error::CliError;
use crate::pages;

const MONTH_CATEGORIES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) fn render(args: WorkoutsArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new("Workouts");

    match api.workouts_summary(args.days_back) {
        Ok(envelope) => {
            if let Some(data) = pages::section(&envelope, "average-workout-count") {
                page.add("average-workout-count", workout_count_chart(data));
            }
            if let Some(data) = pages::section(&envelope, "week-muscle-groups") {
                pages::add_chart(&mut page, "week-muscle-groups", muscle_groups_chart(data));
            }
            if let Some(data) = pages::section(&envelope, "week-rep-ranges") {
                pages::add_chart(&mut page, "week-rep-ranges", rep_ranges_chart(data));
            }
        }
        Err(error) => warn!("fetching the workouts summary failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

/// Personal and site-wide workout counts over the fixed month categories.
fn workout_count_chart(payload: &MetricPayload) -> BuiltChart {
    let series = [
        ("Personal - Workouts in Month", "user_average"),
        ("Site - Workouts in Month", "site_average"),
    ]
    .map(|(name, key)| ChartSeries::new(name, monthly_points(payload.get(key))));

    let mut spec = ChartSpec::line("Workout Count");
    spec.x_axis = Axis {
        categories: Some(MONTH_CATEGORIES.map(String::from).to_vec()),
        tick_interval: Some(1),
        ..Axis::default()
    };
    spec.legend = Some(Legend::horizontal_bottom());
    spec.series = series.to_vec();

    BuiltChart::new(spec)
}

fn monthly_points(node: Option<&MetricNode>) -> Vec<ChartPoint> {
    node.and_then(MetricNode::as_row)
        .map(|cells| {
            cells
                .iter()
                .filter_map(RowCell::as_number)
                .map(ChartPoint::Value)
                .collect()
        })
        .unwrap_or_default()
}

fn muscle_groups_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::Breakdown, "Muscle Groups")
        .series_name("Sets Per Muscle Group")
        .build(payload)
}

fn rep_ranges_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::Distribution, "Rep Ranges")
        .tooltip(Tooltip::point("<b>{point.percentage:.1f}%</b>"))
        .legend()
        .build(payload)
}
