//! The raw metric payloads served by the stronger backend.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A mapping from a category key to a metric node.
///
/// The category key is a calendar date, a muscle name, a rep count or a
/// nutrient name, depending on the endpoint. Insertion order is the order
/// the server emitted the keys in; it is preserved, but it is not assumed
/// to be chronological for date-keyed data.
pub type MetricPayload = IndexMap<String, MetricNode>;

/// A single node of a metric payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricNode {
    /// A numeric metric value: a weight, a calorie count, a set count.
    Value(f64),

    /// An array-valued node: a record tuple, a per-month count array,
    /// a set timeline.
    Row(Vec<RowCell>),

    /// A nested payload: one sub-mapping per lift, exercise or day kind.
    Group(MetricPayload),
}

impl MetricNode {
    /// Returns the numeric value of this node, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricNode::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the nested payload of this node, if it is one.
    pub fn as_group(&self) -> Option<&MetricPayload> {
        match self {
            MetricNode::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the cells of this node, if it is array-valued.
    pub fn as_row(&self) -> Option<&[RowCell]> {
        match self {
            MetricNode::Row(cells) => Some(cells),
            _ => None,
        }
    }
}

/// A single cell of an array-valued metric node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowCell {
    /// A numeric cell.
    Number(f64),

    /// A textual cell, such as an exercise name or a record holder.
    Text(String),

    /// A nested row, such as one set of a workout timeline.
    Cells(Vec<RowCell>),

    /// A JSON null.
    Empty,
}

impl RowCell {
    /// Returns the numeric value of this cell, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RowCell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text of this cell, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RowCell::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Returns `true` if the payload carries no data points at all.
///
/// A brand new user produces either a payload with no keys or, for the
/// grouped endpoints, a payload whose every group is empty. Both shapes
/// trigger the placeholder fallback.
pub fn is_empty(payload: &MetricPayload) -> bool {
    payload
        .values()
        .all(|node| matches!(node, MetricNode::Group(group) if group.is_empty()))
}

/// Hoists the values of every nested group into one flat payload,
/// preserving the encounter order of the keys.
pub fn flatten_groups(payload: &MetricPayload) -> MetricPayload {
    let mut flat = MetricPayload::new();

    for node in payload.values() {
        if let MetricNode::Group(group) = node {
            for (key, value) in group {
                flat.insert(key.clone(), value.clone());
            }
        }
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_nested_payload() {
        let json = r#"{ "Deadlift": { "2014-09-02": 140.0 }, "Squat": {} }"#;
        let payload: MetricPayload = serde_json::from_str(json).unwrap();

        let deadlift = payload.get("Deadlift").and_then(MetricNode::as_group);
        assert_eq!(
            deadlift.and_then(|g| g.get("2014-09-02")).and_then(MetricNode::as_number),
            Some(140.0)
        );
        assert_eq!(
            payload.get("Squat").and_then(MetricNode::as_group).map(IndexMap::len),
            Some(0)
        );
    }

    #[test]
    fn deserialize_record_rows_with_nulls() {
        let json = r#"{ "1": [100, "ajax"], "2": [0, null] }"#;
        let payload: MetricPayload = serde_json::from_str(json).unwrap();

        let first = payload.get("1").and_then(MetricNode::as_row).unwrap();
        assert_eq!(first[0].as_number(), Some(100.0));
        assert_eq!(first[1].as_text(), Some("ajax"));

        let second = payload.get("2").and_then(MetricNode::as_row).unwrap();
        assert_eq!(second[1], RowCell::Empty);
    }

    #[test]
    fn deserialize_set_timeline() {
        let json = r#"{ "sets": [["Bench", 5, 100], ["Squat", 3, 140]] }"#;
        let payload: MetricPayload = serde_json::from_str(json).unwrap();

        let sets = payload.get("sets").and_then(MetricNode::as_row).unwrap();
        let RowCell::Cells(first) = &sets[0] else {
            panic!("expected a nested row");
        };
        assert_eq!(first[0].as_text(), Some("Bench"));
        assert_eq!(first[1].as_number(), Some(5.0));
    }

    #[test]
    fn empty_checks_cover_the_new_user_shapes() {
        let no_keys = MetricPayload::new();
        assert!(is_empty(&no_keys));

        let empty_groups: MetricPayload =
            serde_json::from_str(r#"{ "Deadlift": {}, "Squat": {} }"#).unwrap();
        assert!(is_empty(&empty_groups));

        let with_data: MetricPayload =
            serde_json::from_str(r#"{ "Deadlift": { "2014-09-02": 140 } }"#).unwrap();
        assert!(!is_empty(&with_data));

        let flat: MetricPayload = serde_json::from_str(r#"{ "2014-09-02": 3800 }"#).unwrap();
        assert!(!is_empty(&flat));
    }

    #[test]
    fn flatten_groups_preserves_encounter_order() {
        let json = r#"{
            "compound": { "Deadlift": 42, "Squat": 40 },
            "isolation": { "Curl": 12 }
        }"#;
        let payload: MetricPayload = serde_json::from_str(json).unwrap();

        let flat = flatten_groups(&payload);
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["Deadlift", "Squat", "Curl"]);
        assert_eq!(flat.get("Curl").and_then(MetricNode::as_number), Some(12.0));
    }
}
