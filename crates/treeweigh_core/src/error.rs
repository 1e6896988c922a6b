use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The descriptor could not be read as a list of module records
    #[error("malformed bundle descriptor: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("module record at index {index} has no id")]
    MissingModuleId { index: usize },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
