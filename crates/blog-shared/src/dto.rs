//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so handlers can report which one is missing
//! instead of a generic deserialization failure.

use serde::{Deserialize, Serialize};

/// Author name as submitted by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorInput>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /posts/{id}`. `id` must repeat the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Public view of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_uses_camel_case_author() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"author":{"firstName":"Jane","lastName":"Doe"},"title":"T","content":"C"}"#,
        )
        .unwrap();

        let author = req.author.unwrap();
        assert_eq!(author.first_name, "Jane");
        assert_eq!(author.last_name, "Doe");
        assert_eq!(req.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_update_request_ignores_unknown_fields() {
        let req: UpdatePostRequest = serde_json::from_str(
            r#"{"id":"abc","content":"Pray","author":{"firstName":"X","lastName":"Y"}}"#,
        )
        .unwrap();

        assert_eq!(req.id.as_deref(), Some("abc"));
        assert!(req.title.is_none());
        assert_eq!(req.content.as_deref(), Some("Pray"));
    }
}
