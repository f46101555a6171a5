use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::build::ChartBuilder;
use stronger_charts::build::ChartKind;
use stronger_charts::chart::ChartSpec;
use stronger_charts::chart::Legend;
use stronger_charts::chart::Title;
use stronger_charts::chart::Tooltip;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload::MetricPayload;
use stronger_charts::payload::RowCell;
use stronger_charts::report::ChartPage;
use stronger_charts::series::ChartPoint;
use stronger_charts::series::ChartSeries;

use crate::cli::NutritionArgs;
use crate::error::CliError;
use crate::pages;

const MACRO_CATEGORIES: [&str; 3] = ["Protein", "Carbs", "Fats"];

pub(crate) fn render(args: NutritionArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    let mut page = ChartPage::new("Nutrition");

    match api.bodyweight(args.user) {
        Ok(entries) => {
            let payload = pages::bodyweight_payload(&entries);
            pages::add_chart(&mut page, "bw-chart", bodyweight_chart(&payload));
        }
        Err(error) => warn!("fetching the bodyweight history failed: {error}"),
    }

    match api.nutrition_summary(args.days_back) {
        Ok(envelope) => {
            if let Some(data) = pages::section(&envelope, "calorie-tracker") {
                pages::add_chart(&mut page, "calorie-tracker", calorie_chart(data));
            }
            if let Some(data) = pages::section(&envelope, "macros") {
                pages::add_chart(&mut page, "macros", macros_chart(data));
            }
            if let Some(data) = pages::section(&envelope, "macro-breakdown") {
                page.add("macro-breakdown", macro_breakdown_chart(data));
            }
        }
        Err(error) => warn!("fetching the nutrition summary failed: {error}"),
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
        .build(payload)
}

fn calorie_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::History, "Calories Consumed")
        .y_title("kCal")
        .series_name("kCal consumed")
        .build(payload)
}

fn macros_chart(payload: &MetricPayload) -> ChartResult<BuiltChart> {
    ChartBuilder::new(ChartKind::Distribution, "Average Macros")
        .series_name("Macro Nutrition")
        .legend()
        .build(payload)
}

/// One column series per day kind (workout days, rest days) over the
/// fixed macro categories.
fn macro_breakdown_chart(payload: &MetricPayload) -> BuiltChart {
    let series = payload
        .iter()
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

    let mut spec = ChartSpec::column("Workout Macros vs Rest Macros");
    spec.x_axis.categories = Some(MACRO_CATEGORIES.map(String::from).to_vec());
    spec.y_axis.title = Some(Title::text("Grams"));
    spec.legend = Some(Legend::horizontal_bottom());
    spec.series = series;

    BuiltChart::new(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_breakdown_builds_one_series_per_day_kind() {
        let payload: MetricPayload = serde_json::from_str(
            r#"{ "workout_days": [180, 300, 120], "rest_days": [150, 200, 100] }"#,
        )
        .unwrap();

        let chart = macro_breakdown_chart(&payload);

        assert_eq!(chart.spec.series.len(), 2);
        assert_eq!(chart.spec.series[0].name, "workout_days");
        assert_eq!(
            chart.spec.series[1].data,
            vec![
                ChartPoint::Value(150.0),
                ChartPoint::Value(200.0),
                ChartPoint::Value(100.0),
            ]
        );
        assert_eq!(
            chart.spec.x_axis.categories,
            Some(MACRO_CATEGORIES.map(String::from).to_vec())
        );
    }
}
