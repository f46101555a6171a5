use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::fallback;
use stronger_charts::payload::MetricNode;
use stronger_charts::payload::MetricPayload;
use stronger_charts::report::ChartPage;

use crate::cli::DashboardArgs;
use crate::error::CliError;
use crate::pages;

pub(crate) fn render(args: DashboardArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new("Dashboard");

    match api.big_three_progress(&args.username) {
        Ok(payload) => pages::add_chart(&mut page, "big-four", big_three_chart(&payload)),
        Err(error) => warn!("fetching the big three progress failed: {error}"),
    }

    match api.nutrition_summary(7) {
        Ok(envelope) => {
            // Older servers key the weekly calories under the general
            // calorie tracker section.
            let calories = envelope
                .get("weekly-calories")
                .or_else(|| envelope.get("calorie-tracker"))
                .and_then(MetricNode::as_group);

            match calories {
                Some(data) => {
                    pages::add_chart(&mut page, "calories-week", calorie_chart(data));
                }
                None => warn!("the server response has no weekly calories section"),
            }
        }
        Err(error) => warn!("fetching the nutrition summary failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

fn big_three_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Big Three History")
        .y_title("Weight (kg)")
        .legend()
        .fallback(fallback::default_lift_data())
        .build(payload)
}

fn calorie_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Calories - 7 Days")
        .y_title("Calories Consumed")
        .series_name("Calories consumed")
        .fallback(fallback::default_calorie_data())
        .build(payload)
}
