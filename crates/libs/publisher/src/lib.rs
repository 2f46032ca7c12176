#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod interfaces;
pub mod pipeline;
pub mod progress;

pub use client::PublishClient;
pub use error::{PublishError, PublishResult};
pub use pipeline::publish_video;
pub use progress::UploadProgress;
