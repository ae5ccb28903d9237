//! CMS records: posts, pages, and media assets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post or article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    /// Backend-defined workflow state, e.g. "draft" or "published".
    pub status: String,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    pub status: Option<String>,
}

/// Partial update for a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
}

/// Query filter for post listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// A static site page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub path: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// An uploaded media asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub url: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

/// Query filter for media listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFilter {
    pub content_type: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
