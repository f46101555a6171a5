use std::fmt::Display;

use stronger_charts::error::ChartError;
use stronger_charts::report::RenderError;
use stronger_client::error::ApiError;

#[derive(Debug)]
pub(crate) enum CliError {
    Api(ApiError),
    Chart(ChartError),
    Render(RenderError),
    Path(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Api(error) => write!(f, "{cli_error} {error}"),
            CliError::Chart(error) => write!(f, "{cli_error} {error}"),
            CliError::Render(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        CliError::Api(error)
    }
}

impl From<ChartError> for CliError {
    fn from(error: ChartError) -> Self {
        CliError::Chart(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}
