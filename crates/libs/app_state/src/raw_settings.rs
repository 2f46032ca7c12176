use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    /// Folder watched for new video files
    pub ingest: IngestSettings,
    pub publish: PublishSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

/// Defines the watched folder and which files qualify as videos.
#[derive(Debug, Deserialize, Clone)]
pub struct IngestSettings {
    pub video_folder: PathBuf,
    pub file_detection: FileDetectionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileDetectionSettings {
    /// Which extensions are categorized as videos. Matched case-sensitively.
    pub video_extensions: Vec<String>,
}

/// Configuration for the remote publishing API.
#[derive(Debug, Deserialize, Clone)]
pub struct PublishSettings {
    pub base_url: String,
    /// Category every created post is filed under.
    pub category_id: i64,
    /// When true, a failed byte transfer stops the pipeline before post
    /// creation and the local file is kept. When false the pipeline carries
    /// on regardless, matching the historical behavior of this bot.
    pub abort_on_transfer_failure: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub api_token: String,
}
