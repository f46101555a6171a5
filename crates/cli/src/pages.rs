//! One module per page of the application.
//!
//! Every chart on a page is produced independently: a failed fetch or a
//! failed build logs a warning and leaves that chart slot unrendered,
//! and the sibling charts are unaffected.

pub(crate) mod dashboard;
pub(crate) mod exercise;
pub(crate) mod exercises;
pub(crate) mod nutrition;
pub(crate) mod profile;
pub(crate) mod workout;
pub(crate) mod workouts;

use std::path::PathBuf;

use tracing::warn;

use stronger_charts::build::BuiltChart;
use stronger_charts::error::Result as ChartResult;
use stronger_charts::payload::MetricNode;
use stronger_charts::payload::MetricPayload;
use stronger_charts::report::ChartPage;
use stronger_client::BodyweightEntry;

use crate::cli::PathExt;
use crate::error::CliError;

/// Adds a built chart to the page, or logs why the slot stays empty.
pub(crate) fn add_chart(page: &mut ChartPage, slot: &str, chart: ChartResult<BuiltChart>) {
    match chart {
        Ok(chart) => page.add(slot, chart),
        Err(error) => warn!("skipping the `{slot}` chart: {error}"),
    }
}

/// Looks a chart section up in a response envelope.
pub(crate) fn section<'a>(envelope: &'a MetricPayload, slot: &str) -> Option<&'a MetricPayload> {
    let group = envelope.get(slot).and_then(MetricNode::as_group);

    if group.is_none() {
        warn!("the server response has no `{slot}` section");
    }

    group
}

/// Reshapes bodyweight entries into a date-keyed payload.
pub(crate) fn bodyweight_payload(entries: &[BodyweightEntry]) -> MetricPayload {
    entries
        .iter()
        .map(|entry| {
            let date = entry.date.format("%Y-%m-%d").to_string();
            (date, MetricNode::Value(entry.bodyweight))
        })
        .collect()
}

pub(crate) fn write_report(page: &ChartPage, output_path: Option<PathBuf>) -> Result<(), CliError> {
    let output_path = output_path.or_current_dir()?;
    let path = page.write(&output_path)?;

    println!("The report was written to `{}`.", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn bodyweight_entries_become_a_dated_payload() {
        let entries = vec![
            BodyweightEntry {
                date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
                bodyweight: 70.0,
            },
            BodyweightEntry {
                date: NaiveDate::from_ymd_opt(2014, 3, 1).unwrap(),
                bodyweight: 74.0,
            },
        ];

        let payload = bodyweight_payload(&entries);

        assert_eq!(
            payload.get("2014-01-01").and_then(MetricNode::as_number),
            Some(70.0)
        );
        assert_eq!(
            payload.get("2014-03-01").and_then(MetricNode::as_number),
            Some(74.0)
        );
    }
}
