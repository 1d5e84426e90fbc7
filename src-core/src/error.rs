use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("File contains no header row")]
    EmptyFile,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error! status: {status}, message: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error("No results returned from API")]
    NoResults,

    #[error("Config error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Text for the blocking alert shown after a failed analysis.
    pub fn alert_message(&self, api_base: &str) -> String {
        format!(
            "Error processing file: {}. Make sure the backend API is running on {}",
            self, api_base
        )
    }
}

impl From<DashboardError> for String {
    fn from(err: DashboardError) -> Self {
        err.to_string()
    }
}
