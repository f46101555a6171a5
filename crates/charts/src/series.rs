//! Chart series and the points they are made of.

use serde::Serialize;

/// A named ordered sequence of points rendered as one visual trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// The series name shown in the legend and the tooltips.
    pub name: String,

    /// The render type of the series, when it differs from the chart default.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,

    /// The ordered points of the series.
    pub data: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, data: Vec<ChartPoint>) -> ChartSeries {
        Self {
            name: name.into(),
            kind: None,
            data,
        }
    }

    /// A series rendered as a pie, regardless of the chart default.
    pub fn pie(name: impl Into<String>, data: Vec<ChartPoint>) -> ChartSeries {
        Self {
            name: name.into(),
            kind: Some(SeriesKind::Pie),
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Pie,
}

/// A single point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPoint {
    /// An `[x, y]` pair.
    Pair(PointKey, f64),

    /// A bare value positioned by the category order of the x axis.
    Value(f64),

    /// A point of the workout set timeline, carrying tooltip metadata.
    WorkoutSet {
        y: f64,
        exercise: String,
        weight: f64,
    },
}

/// The x position of a chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PointKey {
    /// A UTC millisecond timestamp at the midnight of a calendar date.
    Stamp(i64),

    /// A position on a ranked axis, such as a rep count.
    Index(u32),

    /// A nominal category label, such as a nutrient or a muscle name.
    Label(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_pairs_as_arrays() {
        let series = ChartSeries::new(
            "Bodyweight",
            vec![
                ChartPoint::Pair(PointKey::Stamp(1409616000000), 70.0),
                ChartPoint::Pair(PointKey::Label(String::from("protein")), 180.0),
                ChartPoint::Value(3.0),
            ],
        );

        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Bodyweight","data":[[1409616000000,70.0],["protein",180.0],3.0]}"#
        );
    }

    #[test]
    fn serialize_workout_set_points_with_metadata() {
        let point = ChartPoint::WorkoutSet {
            y: 5.0,
            exercise: String::from("Bench"),
            weight: 100.0,
        };

        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"y":5.0,"exercise":"Bench","weight":100.0}"#);
    }

    #[test]
    fn serialize_pie_series_with_its_type() {
        let series = ChartSeries::pie("Muscles Hit", Vec::new());

        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"name":"Muscles Hit","type":"pie","data":[]}"#);
    }
}
