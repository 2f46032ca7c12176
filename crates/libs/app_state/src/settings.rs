use crate::{IngestSettings, LoggingSettings, PublishSettings, RawSettings, SecretSettings};
use serde::Deserialize;
use std::path::{Path, absolute};

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub ingest: IngestSettings,
    pub publish: PublishSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let video_folder = absolute(&raw.ingest.video_folder).expect("Invalid video_folder");
        let ingest = IngestSettings {
            video_folder,
            file_detection: raw.ingest.file_detection,
        };

        Self {
            ingest,
            publish: raw.publish,
            logging: raw.logging,
            secrets: raw.secrets,
        }
    }
}

impl IngestSettings {
    /// Whether the watcher should pick this file up. The extension list is
    /// matched case-sensitively, so `clip.MP4` does not qualify.
    #[must_use]
    pub fn is_video_file(&self, file: &Path) -> bool {
        let Some(extension) = file.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.file_detection
            .video_extensions
            .iter()
            .any(|e| e == extension)
    }
}
