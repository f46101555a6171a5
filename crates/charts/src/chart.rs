//! The renderer-ready chart configuration model.
//!
//! A [ChartSpec] serializes into the configuration object the Highcharts
//! renderer consumes. The constructors mirror the chart template bases the
//! pages share: plain line, dated line, column and pie.

use serde::Serialize;

use crate::series::ChartSeries;

/// A complete chart configuration: options, title, axes, tooltip,
/// legend, plot options and the series list.
///
/// A spec is constructed fresh per server response and is never mutated
/// after it has been handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartOptions>,

    pub title: Title,

    #[serde(rename = "xAxis")]
    pub x_axis: Axis,

    #[serde(rename = "yAxis")]
    pub y_axis: Axis,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,

    #[serde(rename = "plotOptions", skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,

    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// A line chart with the gridlines and the x axis labels suppressed.
    pub fn line(title: impl Into<String>) -> ChartSpec {
        Self {
            title: Title::text(title),
            x_axis: Axis {
                grid_line_width: Some(0),
                labels: Some(AxisLabels { enabled: false }),
                ..Axis::default()
            },
            y_axis: Axis {
                grid_line_width: Some(0),
                ..Axis::default()
            },
            ..ChartSpec::default()
        }
    }

    /// A line chart over a datetime x axis with day-of-month labels.
    pub fn dated_line(title: impl Into<String>) -> ChartSpec {
        Self {
            title: Title::text(title),
            x_axis: Axis {
                kind: Some(AxisKind::Datetime),
                date_time_label_formats: Some(DateTimeLabelFormats::days()),
                ..Axis::default()
            },
            y_axis: Axis {
                grid_line_width: Some(0),
                ..Axis::default()
            },
            ..ChartSpec::default()
        }
    }

    /// A column chart with a zeroed grid and a legend along the bottom.
    pub fn column(title: impl Into<String>) -> ChartSpec {
        Self {
            chart: Some(ChartOptions {
                kind: Some(RenderKind::Column),
            }),
            title: Title::text(title),
            x_axis: Axis {
                grid_line_width: Some(0),
                ..Axis::default()
            },
            y_axis: Axis {
                grid_line_width: Some(0),
                min: Some(0.0),
                ..Axis::default()
            },
            legend: Some(Legend::horizontal_bottom()),
            plot_options: Some(PlotOptions {
                column: Some(ColumnPlotOptions::default()),
                pie: None,
            }),
            ..ChartSpec::default()
        }
    }

    /// A pie chart with selectable slices listed in the legend box.
    pub fn pie(title: impl Into<String>) -> ChartSpec {
        Self {
            title: Title::text(title),
            plot_options: Some(PlotOptions {
                pie: Some(PiePlotOptions::default()),
                column: None,
            }),
            ..ChartSpec::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ChartOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RenderKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Line,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Title {
    pub fn text(text: impl Into<String>) -> Title {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(rename = "tickInterval", skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<u32>,

    #[serde(rename = "gridLineWidth", skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabels>,

    #[serde(
        rename = "dateTimeLabelFormats",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time_label_formats: Option<DateTimeLabelFormats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Datetime,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub enabled: bool,
}

/// Axis label formats that hide the dummy year of date-bucketed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeLabelFormats {
    pub month: String,
    pub year: String,
}

impl DateTimeLabelFormats {
    pub fn days() -> DateTimeLabelFormats {
        Self {
            month: String::from("%e %b"),
            year: String::from("%b"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Tooltip {
    #[serde(rename = "headerFormat", skip_serializing_if = "Option::is_none")]
    pub header_format: Option<String>,

    #[serde(rename = "pointFormat", skip_serializing_if = "Option::is_none")]
    pub point_format: Option<String>,
}

impl Tooltip {
    pub fn point(format: impl Into<String>) -> Tooltip {
        Self {
            header_format: None,
            point_format: Some(format.into()),
        }
    }

    pub fn with_header(header: impl Into<String>, format: impl Into<String>) -> Tooltip {
        Self {
            header_format: Some(header.into()),
            point_format: Some(format.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(rename = "verticalAlign", skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,

    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

impl Legend {
    /// The legend layout the pages share: horizontal, along the bottom.
    pub fn horizontal_bottom() -> Legend {
        Self {
            enabled: true,
            layout: Some(String::from("horizontal")),
            vertical_align: Some(String::from("bottom")),
            border_width: Some(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PiePlotOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnPlotOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiePlotOptions {
    #[serde(rename = "allowPointSelect")]
    pub allow_point_select: bool,

    pub cursor: String,

    #[serde(rename = "dataLabels")]
    pub data_labels: DataLabels,

    #[serde(rename = "showInLegend")]
    pub show_in_legend: bool,
}

impl Default for PiePlotOptions {
    fn default() -> Self {
        Self {
            allow_point_select: true,
            cursor: String::from("pointer"),
            data_labels: DataLabels { enabled: false },
            show_in_legend: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataLabels {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPlotOptions {
    #[serde(rename = "pointPadding")]
    pub point_padding: f64,

    #[serde(rename = "borderWidth")]
    pub border_width: u32,
}

impl Default for ColumnPlotOptions {
    fn default() -> Self {
        Self {
            point_padding: 0.2,
            border_width: 0,
        }
    }
}
