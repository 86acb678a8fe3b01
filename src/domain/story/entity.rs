// src/domain/story/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::IdentityId;
use crate::domain::story::value_objects::{
    CommentId, CommentText, StoryBody, StoryCategory, StoryId, StoryTitle,
};
use chrono::{DateTime, Utc};

/// A doctor's comment on a story. Lives inside the parent story's comment
/// list and is persisted by re-saving that list as one unit.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: IdentityId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author_id: IdentityId, text: CommentText, now: DateTime<Utc>) -> Self {
        Self {
            id: CommentId::generate(),
            author_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A patient-authored recovery story. `uploaded_by` is fixed at creation;
/// comments are appended in insertion order and never reordered.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    pub title: StoryTitle,
    pub category: StoryCategory,
    pub body: StoryBody,
    pub uploaded_by: IdentityId,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn is_uploaded_by(&self, id: IdentityId) -> bool {
        self.uploaded_by == id
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Replace the text of an existing comment in place.
    pub fn edit_comment(
        &mut self,
        id: CommentId,
        text: CommentText,
        now: DateTime<Utc>,
    ) -> DomainResult<&Comment> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.text = text;
        comment.updated_at = now;
        Ok(comment)
    }

    pub fn remove_comment(&mut self, id: CommentId) -> DomainResult<Comment> {
        let position = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Ok(self.comments.remove(position))
    }
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: StoryTitle,
    pub category: StoryCategory,
    pub body: StoryBody,
    pub uploaded_by: IdentityId,
    pub created_at: DateTime<Utc>,
}

/// Partial story update; only the supplied fields change.
#[derive(Debug, Clone)]
pub struct StoryUpdate {
    pub id: StoryId,
    pub title: Option<StoryTitle>,
    pub category: Option<StoryCategory>,
    pub body: Option<StoryBody>,
    pub updated_at: DateTime<Utc>,
}

impl StoryUpdate {
    pub fn new(id: StoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            category: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: StoryTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_category(mut self, category: StoryCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_body(mut self, body: StoryBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.body.is_none()
    }
}
