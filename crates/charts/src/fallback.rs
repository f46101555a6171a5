//! Placeholder datasets shown to users who have no data of their own yet.
//!
//! A page passes one of these to [ChartBuilder::fallback] and flags the
//! rendered chart as sample data when the builder reports the
//! substitution.
//!
//! [ChartBuilder::fallback]: crate::build::ChartBuilder::fallback

use crate::payload::MetricNode;
use crate::payload::MetricPayload;

/// A week of sample calorie counts.
pub fn default_calorie_data() -> MetricPayload {
    [
        ("2014-09-02", 3800.0),
        ("2014-09-03", 2500.0),
        ("2014-09-04", 3500.0),
        ("2014-09-05", 3500.0),
        ("2014-09-06", 3100.0),
    ]
    .into_iter()
    .map(|(date, calories)| (date.to_string(), MetricNode::Value(calories)))
    .collect()
}

/// A year of sample bodyweight entries.
pub fn default_bodyweight_data() -> MetricPayload {
    [
        ("2014-01-01", 70.0),
        ("2014-03-01", 74.0),
        ("2014-06-01", 77.0),
        ("2014-09-01", 80.0),
        ("2014-12-01", 82.0),
    ]
    .into_iter()
    .map(|(date, bodyweight)| (date.to_string(), MetricNode::Value(bodyweight)))
    .collect()
}

/// A year of sample progress for the three main lifts, one monthly value
/// each, keyed by the first of the month so the payload flows through the
/// ordinary history path.
pub fn default_lift_data() -> MetricPayload {
    [
        (
            "Deadlift",
            [
                140.0, 150.0, 155.0, 162.5, 170.0, 175.0, 180.0, 182.5, 185.0, 187.5, 190.0, 200.0,
            ],
        ),
        (
            "Squat",
            [
                150.0, 160.0, 170.0, 175.0, 175.0, 180.0, 182.5, 185.0, 187.5, 190.0, 190.0, 195.0,
            ],
        ),
        (
            "Bench",
            [
                80.0, 85.0, 87.5, 92.5, 95.0, 97.5, 102.5, 105.0, 107.5, 110.0, 110.0, 115.0,
            ],
        ),
    ]
    .into_iter()
    .map(|(lift, weights)| (lift.to_string(), MetricNode::Group(monthly(weights))))
    .collect()
}

fn monthly(weights: [f64; 12]) -> MetricPayload {
    weights
        .into_iter()
        .enumerate()
        .map(|(month, weight)| {
            let date = format!("2014-{:02}-01", month + 1);
            (date, MetricNode::Value(weight))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::ChartBuilder;
    use crate::build::ChartKind;

    #[test]
    fn datasets_are_well_formed() {
        assert_eq!(default_calorie_data().len(), 5);
        assert_eq!(default_bodyweight_data().len(), 5);

        let lifts = default_lift_data();
        assert_eq!(lifts.len(), 3);
        for node in lifts.values() {
            assert_eq!(node.as_group().map(MetricPayload::len), Some(12));
        }
    }

    #[test]
    fn datasets_flow_through_the_history_path() {
        for dataset in [
            default_calorie_data(),
            default_bodyweight_data(),
            default_lift_data(),
        ] {
            ChartBuilder::new(ChartKind::History, "placeholder")
                .build(&dataset)
                .unwrap();
        }
    }
}
