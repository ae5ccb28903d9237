//! CMS client: posts, pages, and media

use braingate_domain::types::cms::{
    MediaAsset, MediaFilter, NewPost, Page, Post, PostFilter, PostPatch,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;
use crate::query::to_query;

const CMS_BASE: &str = "/api/brain/cms";

/// Typed client for the CMS resource family
#[derive(Clone)]
pub struct CmsClient {
    gateway: GatewayClient,
}

impl CmsClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List posts matching the filter.
    pub async fn list_posts(&self, filter: &PostFilter) -> ApiResponse<Vec<Post>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{CMS_BASE}/posts{query}")).await
    }

    /// Fetch one post by id.
    pub async fn get_post(&self, id: Uuid) -> ApiResponse<Post> {
        self.gateway.get(&format!("{CMS_BASE}/posts/{id}")).await
    }

    /// Create a post.
    pub async fn create_post(&self, post: &NewPost) -> ApiResponse<Post> {
        self.gateway.post(&format!("{CMS_BASE}/posts"), post).await
    }

    /// Apply a partial update to a post.
    pub async fn update_post(&self, id: Uuid, patch: &PostPatch) -> ApiResponse<Post> {
        self.gateway.patch(&format!("{CMS_BASE}/posts/{id}"), patch).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: Uuid) -> ApiResponse<()> {
        self.gateway.delete(&format!("{CMS_BASE}/posts/{id}")).await
    }

    /// List the site's static pages.
    pub async fn list_pages(&self) -> ApiResponse<Vec<Page>> {
        self.gateway.get(&format!("{CMS_BASE}/pages")).await
    }

    /// List uploaded media assets.
    pub async fn list_media(&self, filter: &MediaFilter) -> ApiResponse<Vec<MediaAsset>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{CMS_BASE}/media{query}")).await
    }
}
