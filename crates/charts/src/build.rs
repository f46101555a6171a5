//! Builds renderer-ready chart specifications out of raw metric payloads.
//!
//! [ChartBuilder] is the one reusable transformation of the whole
//! application: every page funnels its server responses through it, each
//! chart built independently of its siblings. Building is a pure function
//! of the payload, the chart kind and the per-call labelling; it performs
//! no I/O and keeps no state between calls.

use chrono::NaiveDate;
use chrono::NaiveTime;

use crate::chart::Axis;
use crate::chart::ChartSpec;
use crate::chart::Legend;
use crate::chart::Title;
use crate::chart::Tooltip;
use crate::error::ChartError;
use crate::error::Result;
use crate::payload;
use crate::payload::MetricNode;
use crate::payload::MetricPayload;
use crate::payload::RowCell;
use crate::series::ChartPoint;
use crate::series::ChartSeries;
use crate::series::PointKey;

/// The x-axis categories of a records chart are a fixed list,
/// never derived from the payload.
const REP_CATEGORIES: [&str; 11] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

const PERSONAL_RECORDS_KEY: &str = "personal_records";
const SITE_RECORDS_KEY: &str = "site_records";

/// The semantic category of a chart, determining its transformation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// A time series keyed by calendar dates, sorted chronologically.
    History,

    /// Personal and site-wide records ranked over the fixed rep domain.
    Records,

    /// Nominal categories in payload order, rendered as columns.
    Breakdown,

    /// Nominal categories in payload order, rendered proportionally.
    Distribution,
}

/// A finished chart plus the flag telling the page whether it shows
/// placeholder data.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltChart {
    pub spec: ChartSpec,
    pub used_fallback: bool,
}

impl BuiltChart {
    /// Wraps a page-assembled spec that never goes through the fallback path.
    pub fn new(spec: ChartSpec) -> BuiltChart {
        Self {
            spec,
            used_fallback: false,
        }
    }
}

/// Builds a [ChartSpec] out of a [MetricPayload] for one chart kind.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    kind: ChartKind,
    title: String,
    y_title: Option<String>,
    series_name: Option<String>,
    tooltip: Option<Tooltip>,
    legend: bool,
    fallback: Option<MetricPayload>,
}

impl ChartBuilder {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> ChartBuilder {
        Self {
            kind,
            title: title.into(),
            y_title: None,
            series_name: None,
            tooltip: None,
            legend: false,
            fallback: None,
        }
    }

    /// Sets the y-axis title.
    pub fn y_title(mut self, title: impl Into<String>) -> ChartBuilder {
        self.y_title = Some(title.into());
        self
    }

    /// Names the single series of a flat chart. Defaults to the chart title.
    pub fn series_name(mut self, name: impl Into<String>) -> ChartBuilder {
        self.series_name = Some(name.into());
        self
    }

    /// Overrides the tooltip of the template the chart kind selects.
    pub fn tooltip(mut self, tooltip: Tooltip) -> ChartBuilder {
        self.tooltip = Some(tooltip);
        self
    }

    /// Shows the legend along the bottom of the chart.
    pub fn legend(mut self) -> ChartBuilder {
        self.legend = true;
        self
    }

    /// Substitutes the given placeholder payload when the input is empty.
    ///
    /// The substitution is reported through [BuiltChart::used_fallback] so
    /// the page can visually flag the chart as sample data.
    pub fn fallback(mut self, payload: MetricPayload) -> ChartBuilder {
        self.fallback = Some(payload);
        self
    }

    pub fn build(self, payload: &MetricPayload) -> Result<BuiltChart> {
        let (payload, used_fallback) = match &self.fallback {
            Some(fallback) if payload::is_empty(payload) => (fallback, true),
            _ => (payload, false),
        };

        let mut spec = match self.kind {
            ChartKind::History => self.history(payload)?,
            ChartKind::Records => self.records(payload)?,
            ChartKind::Breakdown => self.breakdown(payload)?,
            ChartKind::Distribution => self.distribution(payload)?,
        };

        if let Some(tooltip) = &self.tooltip {
            spec.tooltip = Some(tooltip.clone());
        }
        if self.legend {
            spec.legend = Some(Legend::horizontal_bottom());
        }

        Ok(BuiltChart {
            spec,
            used_fallback,
        })
    }

    fn history(&self, payload: &MetricPayload) -> Result<ChartSpec> {
        let nested = !payload.is_empty()
            && payload
                .values()
                .all(|node| matches!(node, MetricNode::Group(_)));

        let series = if nested {
            payload
                .iter()
                .filter_map(|(name, node)| node.as_group().map(|group| (name, group)))
                .map(|(name, group)| date_series(name.clone(), group))
                .collect::<Result<Vec<ChartSeries>>>()?
        } else {
            vec![date_series(self.single_series_name(), payload)?]
        };

        let mut spec = ChartSpec::dated_line(&self.title);
        spec.y_axis.title = self.y_title.clone().map(Title::text);
        spec.series = series;

        Ok(spec)
    }

    fn records(&self, payload: &MetricPayload) -> Result<ChartSpec> {
        let personal = rep_series("Personal Records", payload.get(PERSONAL_RECORDS_KEY));
        let site = rep_series("Site Records", payload.get(SITE_RECORDS_KEY));

        let mut spec = ChartSpec::column(&self.title);
        spec.x_axis = Axis {
            min: Some(1.0),
            tick_interval: Some(1),
            title: Some(Title::text("Reps")),
            categories: Some(REP_CATEGORIES.map(String::from).to_vec()),
            ..Axis::default()
        };
        spec.y_axis.title = self.y_title.clone().map(Title::text);
        spec.series = vec![personal, site];

        Ok(spec)
    }

    fn breakdown(&self, payload: &MetricPayload) -> Result<ChartSpec> {
        let mut categories = Vec::with_capacity(payload.len());
        let mut points = Vec::with_capacity(payload.len());

        for (key, node) in payload {
            let value = node.as_number().ok_or_else(|| ChartError::NonNumericValue {
                key: key.clone(),
            })?;

            categories.push(key.clone());
            points.push(ChartPoint::Value(value));
        }

        let mut spec = ChartSpec::column(&self.title);
        spec.x_axis.categories = Some(categories);
        spec.y_axis.title = self.y_title.clone().map(Title::text);
        spec.series = vec![ChartSeries::new(self.single_series_name(), points)];

        Ok(spec)
    }

    fn distribution(&self, payload: &MetricPayload) -> Result<ChartSpec> {
        let mut points = Vec::with_capacity(payload.len());

        for (key, node) in payload {
            let value = node.as_number().ok_or_else(|| ChartError::NonNumericValue {
                key: key.clone(),
            })?;

            if value < 0.0 {
                return Err(ChartError::NegativeValue { key: key.clone() });
            }

            points.push(ChartPoint::Pair(PointKey::Label(key.clone()), value));
        }

        let mut spec = ChartSpec::pie(&self.title);
        spec.series = vec![ChartSeries::pie(self.single_series_name(), points)];

        Ok(spec)
    }

    fn single_series_name(&self) -> String {
        self.series_name.clone().unwrap_or_else(|| self.title.clone())
    }
}

/// Builds one chronologically sorted series out of a date-keyed payload.
fn date_series(name: String, payload: &MetricPayload) -> Result<ChartSeries> {
    let mut points: Vec<(i64, f64)> = Vec::with_capacity(payload.len());

    for (key, node) in payload {
        let stamp = parse_date_key(key)?;
        let value = node.as_number().ok_or_else(|| ChartError::NonNumericValue {
            key: key.clone(),
        })?;

        points.push((stamp, value));
    }

    // The server emits no chronological order guarantee; the sort is
    // stable, so points sharing a timestamp keep their input order.
    points.sort_by_key(|(stamp, _)| *stamp);

    let points = points
        .into_iter()
        .map(|(stamp, value)| ChartPoint::Pair(PointKey::Stamp(stamp), value))
        .collect();

    Ok(ChartSeries::new(name, points))
}

/// Parses a date category key into the UTC millisecond timestamp of its
/// midnight. Only the calendar components are read, so a key never shifts
/// into a neighbouring day whatever the local timezone is.
fn parse_date_key(key: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(key, "%Y/%m/%d"))
        .or_else(|_| {
            chrono::DateTime::parse_from_rfc3339(key).map(|stamp| stamp.to_utc().date_naive())
        })
        .map_err(|_| ChartError::InvalidDateFormat {
            key: key.to_string(),
        })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Builds one rep-ranked series out of a records group.
///
/// A missing or oddly shaped group degrades to an empty series rather
/// than failing the chart. Only the first numeric cell of each record
/// row carries chart data; the remaining cells name the record holder.
/// The `[0, null]` rows the server pads absent records with are omitted,
/// the categorical axis handles the gaps.
fn rep_series(name: &str, node: Option<&MetricNode>) -> ChartSeries {
    let Some(group) = node.and_then(MetricNode::as_group) else {
        return ChartSeries::new(name, Vec::new());
    };

    let mut records: Vec<(u32, f64)> = group
        .iter()
        .filter_map(|(key, node)| {
            let rep: u32 = key.parse().ok()?;
            if !(1..=11).contains(&rep) {
                return None;
            }

            let weight = record_weight(node)?;
            Some((rep, weight))
        })
        .collect();

    records.sort_by_key(|(rep, _)| *rep);

    let points = records
        .into_iter()
        .map(|(rep, weight)| ChartPoint::Pair(PointKey::Index(rep), weight))
        .collect();

    ChartSeries::new(name, points)
}

fn record_weight(node: &MetricNode) -> Option<f64> {
    match node {
        MetricNode::Value(value) => Some(*value),
        MetricNode::Row(cells) => {
            let weight = cells.iter().find_map(RowCell::as_number)?;
            let padded = weight == 0.0 && cells.iter().any(|cell| matches!(cell, RowCell::Empty));
            (!padded).then_some(weight)
        }
        MetricNode::Group(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn payload(json: &str) -> MetricPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn history_sorts_points_chronologically() {
        let payload = payload(r#"{ "2014-09-02": 3800, "2014-09-04": 3500, "2014-09-03": 2500 }"#);

        let chart = ChartBuilder::new(ChartKind::History, "Calories")
            .build(&payload)
            .unwrap();

        let series = &chart.spec.series;
        assert_eq!(series.len(), 1);
        assert_eq!(
            series[0].data,
            vec![
                ChartPoint::Pair(PointKey::Stamp(1409616000000), 3800.0),
                ChartPoint::Pair(PointKey::Stamp(1409702400000), 2500.0),
                ChartPoint::Pair(PointKey::Stamp(1409788800000), 3500.0),
            ]
        );
    }

    #[test]
    fn history_keeps_every_date_key() {
        let payload = payload(
            r#"{ "2014-01-03": 1, "2014-01-01": 2, "2014-01-05": 3, "2014-01-02": 4, "2014-01-04": 5 }"#,
        );

        let chart = ChartBuilder::new(ChartKind::History, "History")
            .build(&payload)
            .unwrap();

        let data = &chart.spec.series[0].data;
        assert_eq!(data.len(), payload.len());

        let stamps: Vec<i64> = data
            .iter()
            .map(|point| match point {
                ChartPoint::Pair(PointKey::Stamp(stamp), _) => *stamp,
                other => panic!("expected a dated pair, got {other:?}"),
            })
            .collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn history_parses_dates_as_utc_midnight() {
        let payload = payload(r#"{ "2014-09-02": 70 }"#);

        let chart = ChartBuilder::new(ChartKind::History, "Bodyweight")
            .build(&payload)
            .unwrap();

        // 2014-09-02T00:00:00Z in milliseconds.
        assert_eq!(
            chart.spec.series[0].data[0],
            ChartPoint::Pair(PointKey::Stamp(1409616000000), 70.0)
        );
    }

    #[test]
    fn history_rejects_an_unparseable_date_key() {
        let payload = payload(r#"{ "last tuesday": 70 }"#);

        let error = ChartBuilder::new(ChartKind::History, "Bodyweight")
            .build(&payload)
            .unwrap_err();

        assert_eq!(
            error,
            ChartError::InvalidDateFormat {
                key: String::from("last tuesday")
            }
        );
    }

    #[test]
    fn nested_history_builds_one_series_per_group() {
        let payload = payload(
            r#"{
                "Deadlift": { "2014-02-01": 150, "2014-01-01": 140 },
                "Squat": { "2014-01-01": 150 }
            }"#,
        );

        let chart = ChartBuilder::new(ChartKind::History, "Big Three History")
            .build(&payload)
            .unwrap();

        let series = &chart.spec.series;
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Deadlift");
        assert_eq!(series[1].name, "Squat");

        // Each sub-series is sorted on its own.
        assert_eq!(
            series[0].data,
            vec![
                ChartPoint::Pair(PointKey::Stamp(1388534400000), 140.0),
                ChartPoint::Pair(PointKey::Stamp(1391212800000), 150.0),
            ]
        );
    }

    #[test]
    fn building_twice_yields_identical_specs() {
        let payload = payload(r#"{ "2014-09-02": 3800, "2014-09-03": 2500 }"#);

        let build = || {
            ChartBuilder::new(ChartKind::History, "Calories")
                .series_name("Calories consumed")
                .y_title("kCal")
                .build(&payload)
                .unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn empty_payload_substitutes_the_fallback() {
        let fallback = payload(r#"{ "2014-01-01": 70 }"#);

        let chart = ChartBuilder::new(ChartKind::History, "Bodyweight History")
            .fallback(fallback.clone())
            .build(&MetricPayload::new())
            .unwrap();

        assert!(chart.used_fallback);

        let direct = ChartBuilder::new(ChartKind::History, "Bodyweight History")
            .build(&fallback)
            .unwrap();
        assert!(!direct.used_fallback);
        assert_eq!(chart.spec, direct.spec);
    }

    #[test]
    fn all_empty_groups_count_as_an_empty_payload() {
        let empty_groups = payload(r#"{ "Deadlift": {}, "Squat": {}, "Bench": {} }"#);

        let chart = ChartBuilder::new(ChartKind::History, "Big Three History")
            .fallback(fallback::default_lift_data())
            .build(&empty_groups)
            .unwrap();

        assert!(chart.used_fallback);
        assert_eq!(chart.spec.series.len(), 3);
    }

    #[test]
    fn records_categories_are_always_the_fixed_rep_domain() {
        let chart = ChartBuilder::new(ChartKind::Records, "Rep Records")
            .build(&MetricPayload::new())
            .unwrap();

        assert_eq!(
            chart.spec.x_axis.categories,
            Some(REP_CATEGORIES.map(String::from).to_vec())
        );
    }

    #[test]
    fn records_build_two_series_ordered_by_rep_count() {
        let payload = payload(
            r#"{
                "personal_records": { "5": [80, "ajax"], "1": [100, "ajax"] },
                "site_records": { "1": [120, "hector"] }
            }"#,
        );

        let chart = ChartBuilder::new(ChartKind::Records, "Rep Records")
            .build(&payload)
            .unwrap();

        let series = &chart.spec.series;
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].name, "Personal Records");
        assert_eq!(
            series[0].data,
            vec![
                ChartPoint::Pair(PointKey::Index(1), 100.0),
                ChartPoint::Pair(PointKey::Index(5), 80.0),
            ]
        );

        assert_eq!(series[1].name, "Site Records");
        assert_eq!(series[1].data, vec![ChartPoint::Pair(PointKey::Index(1), 120.0)]);
    }

    #[test]
    fn records_omit_the_padded_rows() {
        let payload = payload(
            r#"{
                "personal_records": { "1": [100, "ajax"], "2": [0, null], "3": [0, null] },
                "site_records": {}
            }"#,
        );

        let chart = ChartBuilder::new(ChartKind::Records, "Rep Records")
            .build(&payload)
            .unwrap();

        assert_eq!(
            chart.spec.series[0].data,
            vec![ChartPoint::Pair(PointKey::Index(1), 100.0)]
        );
    }

    #[test]
    fn records_tolerate_a_missing_group() {
        let payload = payload(r#"{ "personal_records": { "1": [100, "ajax"] } }"#);

        let chart = ChartBuilder::new(ChartKind::Records, "Rep Records")
            .build(&payload)
            .unwrap();

        let series = &chart.spec.series;
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].data.len(), 1);
        assert_eq!(series[1].name, "Site Records");
        assert!(series[1].data.is_empty());
    }

    #[test]
    fn breakdown_preserves_payload_order() {
        let payload = payload(r#"{ "fats": 120, "carbs": 300, "protein": 180 }"#);

        let chart = ChartBuilder::new(ChartKind::Breakdown, "Average Macros")
            .build(&payload)
            .unwrap();

        assert_eq!(
            chart.spec.x_axis.categories,
            Some(vec![
                String::from("fats"),
                String::from("carbs"),
                String::from("protein")
            ])
        );
        assert_eq!(
            chart.spec.series[0].data,
            vec![
                ChartPoint::Value(120.0),
                ChartPoint::Value(300.0),
                ChartPoint::Value(180.0),
            ]
        );
    }

    #[test]
    fn distribution_rejects_a_negative_portion() {
        let payload = payload(r#"{ "protein": 180, "carbs": -20 }"#);

        let error = ChartBuilder::new(ChartKind::Distribution, "Average Macros")
            .build(&payload)
            .unwrap_err();

        assert_eq!(
            error,
            ChartError::NegativeValue {
                key: String::from("carbs")
            }
        );
    }

    #[test]
    fn distribution_accepts_an_all_zero_payload() {
        let payload = payload(r#"{ "protein": 0, "carbs": 0, "fats": 0 }"#);

        let chart = ChartBuilder::new(ChartKind::Distribution, "Average Macros")
            .build(&payload)
            .unwrap();

        assert_eq!(chart.spec.series[0].data.len(), 3);
    }
}
