//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nested author object accepted on the write path.
///
/// Fields are optional so that a missing name is reported as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl AuthorPayload {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// Request body for `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Request body for `PUT /posts/{id}`. Every field is optional; an `id` in the
/// body is ignored in favour of the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Read shape of a blog post. `author` is flattened to `"first last"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Response body for `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub blogposts: Vec<BlogPostResponse>,
}
