// src/application/dto/stories.rs
use crate::domain::story::{Comment, Story};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ANONYMOUS_AUTHOR_NAME: &str = "Anonymous";
pub const ANONYMOUS_AUTHOR_EMAIL: &str = "hidden";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.0,
            author_id: comment.author_id.into(),
            text: comment.text.into_inner(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Author-scoped view of a story: the uploader's id is retained. Used on
/// my-stories and on all mutation responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub story: String,
    pub uploaded_by: i64,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryDto {
    fn from(story: Story) -> Self {
        Self {
            id: story.id.into(),
            title: story.title.into_inner(),
            category: story.category.into_inner(),
            story: story.body.into_inner(),
            uploaded_by: story.uploaded_by.into(),
            comments: story.comments.into_iter().map(CommentDto::from).collect(),
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryAuthorView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Public listing view: the uploader's name and email are always the
/// anonymized placeholders, whoever the underlying patient is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedStoryDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub story: String,
    pub uploaded_by: StoryAuthorView,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for AnonymizedStoryDto {
    fn from(story: Story) -> Self {
        let uploaded_by = StoryAuthorView {
            id: story.uploaded_by.into(),
            name: ANONYMOUS_AUTHOR_NAME.into(),
            email: ANONYMOUS_AUTHOR_EMAIL.into(),
        };
        Self {
            id: story.id.into(),
            title: story.title.into_inner(),
            category: story.category.into_inner(),
            story: story.body.into_inner(),
            uploaded_by,
            comments: story.comments.into_iter().map(CommentDto::from).collect(),
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}
