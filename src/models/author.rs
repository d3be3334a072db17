//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full author record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Author payload for create (POST) and full replace (PUT)
///
/// On create the `id` must be absent: identity is server-assigned exactly
/// once. On full replace the body `id` is ignored, the path id wins.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub id: Option<i64>,
    pub name: String,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial-update request for an author
///
/// A present field overwrites, an absent field keeps the current value.
/// There is no way to clear a field back to empty through this shape.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Condensed author view nested inside a book summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
}

impl Author {
    /// Build the record stored at `id` from a full payload, discarding any
    /// identity carried in the payload itself.
    pub fn from_payload(id: i64, payload: CreateAuthor) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
            description: payload.description,
            image: payload.image,
        }
    }
}

impl UpdateAuthor {
    /// Merge the present fields of this request onto an existing record.
    pub fn apply_to(&self, author: &mut Author) {
        if let Some(name) = &self.name {
            author.name = name.clone();
        }
        if let Some(age) = self.age {
            author.age = Some(age);
        }
        if let Some(description) = &self.description {
            author.description = Some(description.clone());
        }
        if let Some(image) = &self.image {
            author.image = Some(image.clone());
        }
    }
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            image: author.image.clone(),
        }
    }
}
