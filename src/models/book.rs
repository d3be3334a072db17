//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::author::{Author, AuthorSummary};

/// Full book record as stored
///
/// The owning author is carried by value, resolved when the book was last
/// written. The ISBN is the natural key and is never server-generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub author: Author,
}

/// Reference to an author by identity, as carried in an upsert payload.
/// Extra fields a client might send alongside the id are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorRef {
    pub id: i64,
}

/// Upsert payload for `PUT /books/{isbn}`
///
/// The body may carry an ISBN but the path ISBN always wins.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertBook {
    #[serde(default)]
    pub isbn: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub author: AuthorRef,
}

/// Partial-update request for a book
///
/// There is deliberately no author field here: the author reference is
/// immutable once set and cannot be changed by a patch.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Outbound book view with the author condensed to a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub isbn: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub author: AuthorSummary,
}

/// Outcome of an upsert: the stored record plus whether the call created
/// the resource or replaced an existing one.
#[derive(Debug, Clone)]
pub struct BookUpsert {
    pub book: Book,
    pub created: bool,
}

impl Book {
    /// Build the record stored at `isbn` from an upsert payload and its
    /// already-resolved author.
    pub fn from_upsert(isbn: String, payload: UpsertBook, author: Author) -> Self {
        Self {
            isbn,
            title: payload.title,
            description: payload.description,
            image: payload.image,
            author,
        }
    }
}

impl UpdateBook {
    /// Merge the present fields of this request onto an existing record.
    /// The author reference is left untouched.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(description) = &self.description {
            book.description = Some(description.clone());
        }
        if let Some(image) = &self.image {
            book.image = Some(image.clone());
        }
    }
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            description: book.description.clone(),
            image: book.image.clone(),
            author: AuthorSummary::from(&book.author),
        }
    }
}
