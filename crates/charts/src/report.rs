//! Writes finished charts into a standalone HTML report page.
//!
//! A page is an ordered list of chart slots, each uniquely addressed by
//! its element id. The page template loads the external chart library,
//! applies the shared theme and passes every slot its serialized
//! configuration object. A slot whose chart was built out of placeholder
//! data is marked with the `opacity` class.

use std::error::Error;
use std::fmt::Display;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tinytemplate::error::Error as TinyTemplateError;

use crate::build::BuiltChart;

/// The result type that uses [RenderError] as the error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// The error type for writing a chart report page.
#[derive(Debug)]
pub enum RenderError {
    /// A [std::io::Error] encountered while writing the report file.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// the page template.
    Template(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing a chart
    /// configuration.
    Json(serde_json::Error),
}

impl Error for RenderError {}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Io(error) => write!(f, "{render_error} I/O error: {error}"),
            RenderError::Template(error) => write!(f, "{render_error} template error: {error}"),
            RenderError::Json(error) => {
                write!(f, "{render_error} chart serialization error: {error}")
            }
        }
    }
}

impl From<IoError> for RenderError {
    fn from(error: IoError) -> Self {
        RenderError::Io(error)
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::Json(error)
    }
}

/// One page of charts, ready to be rendered as an HTML report.
#[derive(Debug)]
pub struct ChartPage {
    title: String,
    slots: Vec<ChartSlot>,
}

/// A chart bound to the page element that displays it.
#[derive(Debug)]
pub struct ChartSlot {
    pub id: String,
    pub chart: BuiltChart,
}

impl ChartPage {
    const TEMPLATE_NAME: &str = "page";

    pub fn new(title: impl Into<String>) -> ChartPage {
        Self {
            title: title.into(),
            slots: Vec::new(),
        }
    }

    /// Appends a chart under the given element id.
    pub fn add(&mut self, id: impl Into<String>, chart: BuiltChart) {
        self.slots.push(ChartSlot {
            id: id.into(),
            chart,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Renders the page into an HTML document.
    pub fn render(&self) -> Result<String> {
        let mut template = TinyTemplate::new();
        template.add_template(Self::TEMPLATE_NAME, include_str!("report/page.html.tt"))?;

        let context = self.context()?;
        let text = template.render(Self::TEMPLATE_NAME, &context)?;

        Ok(text)
    }

    /// Writes the rendered page into `<dir>/<page-slug>.html` and returns
    /// the path of the written file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let file_name = format!("{slug}.html", slug = slug(&self.title));
        let path = dir.join(file_name);

        let text = self.render()?;
        let mut file = File::create(&path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(path)
    }

    fn context(&self) -> Result<PageContext> {
        let charts = self
            .slots
            .iter()
            .map(|slot| {
                let json = serde_json::to_string(&slot.chart.spec)?;
                let class = if slot.chart.used_fallback {
                    "chart opacity"
                } else {
                    "chart"
                };

                Ok(SlotContext {
                    id: slot.id.clone(),
                    class,
                    json,
                })
            })
            .collect::<Result<Vec<SlotContext>>>()?;

        Ok(PageContext {
            title: self.title.clone(),
            charts,
        })
    }
}

#[derive(Serialize)]
struct PageContext {
    title: String,
    charts: Vec<SlotContext>,
}

#[derive(Serialize)]
struct SlotContext {
    id: String,
    class: &'static str,
    json: String,
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::ChartBuilder;
    use crate::build::ChartKind;
    use crate::payload::MetricPayload;

    fn built(fallback: bool) -> BuiltChart {
        let payload: MetricPayload =
            serde_json::from_str(r#"{ "2014-09-02": 3800 }"#).unwrap();

        let builder = ChartBuilder::new(ChartKind::History, "Calories - 7 Days");
        if fallback {
            builder
                .fallback(payload)
                .build(&MetricPayload::new())
                .unwrap()
        } else {
            builder.build(&payload).unwrap()
        }
    }

    #[test]
    fn render_embeds_every_slot_and_its_spec() {
        let mut page = ChartPage::new("Dashboard");
        page.add("big-four", built(false));
        page.add("calories-week", built(false));

        let html = page.render().unwrap();

        assert!(html.contains(r#"<div id="big-four" class="chart"></div>"#));
        assert!(html.contains(r#"<div id="calories-week" class="chart"></div>"#));
        assert!(html.contains(r##"Highcharts.chart("big-four", {"title""##));
        assert!(html.contains(r#""data":[[1409616000000,3800.0]]"#));
    }

    #[test]
    fn render_marks_placeholder_charts() {
        let mut page = ChartPage::new("Dashboard");
        page.add("calories-week", built(true));

        let html = page.render().unwrap();
        assert!(html.contains(r#"<div id="calories-week" class="chart opacity"></div>"#));
    }

    #[test]
    fn slug_flattens_the_page_title() {
        assert_eq!(slug("Dashboard"), "dashboard");
        assert_eq!(slug("Workout 42"), "workout-42");
    }
}
