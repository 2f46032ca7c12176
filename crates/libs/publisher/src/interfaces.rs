use serde::{Deserialize, Serialize};

/// Write target and content hash handed out by the API for one upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadDestination {
    pub url: String,
    pub hash: String,
}

/// Request body of the post-creation call.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePost {
    pub title: String,
    pub hash: String,
    pub is_available_in_public_feed: bool,
    pub category_id: i64,
}
