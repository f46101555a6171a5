use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::chart::Tooltip;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::fallback;
use stronger_charts::payload::MetricPayload;
use stronger_charts::report::ChartPage;

use crate::cli::ProfileArgs;
use crate::error::CliError;
use crate::pages;

pub(crate) fn render(args: ProfileArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new(format!("Profile {name}", name = args.username));

    match api.bodyweight(args.user) {
        Ok(entries) => {
            let payload = pages::bodyweight_payload(&entries);
            pages::add_chart(&mut page, "bw-chart", bodyweight_chart(&payload));
        }
        Err(error) => warn!("fetching the bodyweight history failed: {error}"),
    }

    match api.big_three_progress(&args.username) {
        Ok(data) => pages::add_chart(&mut page, "big-four", big_three_chart(&data)),
        Err(error) => warn!("fetching the big three progress failed: {error}"),
    }

    pages::write_report(&page, args.report.output_path)
}

fn bodyweight_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Bodyweight History")
        .y_title("Kg")
        .series_name("Bodyweight")
        .tooltip(Tooltip::with_header(
            "<b>{series.name}</b><br>",
            "{point.x:%e. %b}: {point.y:.2f} kg",
        ))
        .fallback(fallback::default_bodyweight_data())
        .build(payload)
}

fn big_three_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Big Three History")
        .y_title("Weight (kg)")
        .legend()
        .fallback(fallback::default_lift_data())
        .build(payload)
}
