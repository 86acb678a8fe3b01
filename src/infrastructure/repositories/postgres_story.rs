// src/infrastructure/repositories/postgres_story.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::IdentityId;
use crate::domain::story::{
    Comment, CommentId, CommentText, NewStory, Story, StoryBody, StoryCategory, StoryId,
    StoryRepository, StoryTitle, StoryUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresStoryRepository {
    pool: PgPool,
}

impl PostgresStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Serialized form of one embedded comment inside the story row's JSONB
/// column. Comments have no table of their own; the whole list is written
/// back with its parent.
#[derive(Debug, Serialize, Deserialize)]
struct CommentRecord {
    id: Uuid,
    author_id: i64,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Comment> for CommentRecord {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            author_id: comment.author_id.into(),
            text: comment.text.as_str().to_owned(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = DomainError;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId(record.id),
            author_id: IdentityId::new(record.author_id)?,
            text: CommentText::new(record.text)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

fn encode_comments(comments: &[Comment]) -> DomainResult<serde_json::Value> {
    let records: Vec<CommentRecord> = comments.iter().map(CommentRecord::from).collect();
    serde_json::to_value(records)
        .map_err(|err| DomainError::Persistence(format!("failed to encode comments: {err}")))
}

fn decode_comments(value: serde_json::Value) -> DomainResult<Vec<Comment>> {
    let records: Vec<CommentRecord> = serde_json::from_value(value)
        .map_err(|err| DomainError::Persistence(format!("failed to decode comments: {err}")))?;
    records.into_iter().map(Comment::try_from).collect()
}

#[derive(Debug, FromRow)]
struct StoryRow {
    id: i64,
    title: String,
    category: String,
    body: String,
    uploaded_by: i64,
    comments: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<StoryRow> for Story {
    type Error = DomainError;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        Ok(Story {
            id: StoryId::new(row.id)?,
            title: StoryTitle::new(row.title)?,
            category: StoryCategory::new(row.category)?,
            body: StoryBody::new(row.body)?,
            uploaded_by: IdentityId::new(row.uploaded_by)?,
            comments: decode_comments(row.comments)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const STORY_COLUMNS: &str = "id, title, category, body, uploaded_by, comments, created_at, updated_at";

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn insert(&self, new_story: NewStory) -> DomainResult<Story> {
        let NewStory {
            title,
            category,
            body,
            uploaded_by,
            created_at,
        } = new_story;

        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "INSERT INTO stories (title, category, body, uploaded_by, comments, created_at, updated_at)
             VALUES ($1, $2, $3, $4, '[]'::jsonb, $5, $5)
             RETURNING {STORY_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(category.as_str())
        .bind(body.as_str())
        .bind(i64::from(uploaded_by))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Story::try_from(row)
    }

    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Story::try_from).transpose()
    }

    async fn list_by_uploader(&self, uploader: IdentityId) -> DomainResult<Vec<Story>> {
        let rows = sqlx::query_as::<_, StoryRow>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE uploaded_by = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(uploader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Story::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Story>> {
        let rows = sqlx::query_as::<_, StoryRow>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Story::try_from).collect()
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "UPDATE stories
             SET title = COALESCE($2, title),
                 category = COALESCE($3, category),
                 body = COALESCE($4, body),
                 updated_at = $5
             WHERE id = $1
             RETURNING {STORY_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.title.as_ref().map(StoryTitle::as_str))
        .bind(update.category.as_ref().map(StoryCategory::as_str))
        .bind(update.body.as_ref().map(StoryBody::as_str))
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        Story::try_from(row)
    }

    async fn replace_comments(
        &self,
        id: StoryId,
        comments: &[Comment],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Story> {
        let encoded = encode_comments(comments)?;

        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "UPDATE stories SET comments = $2, updated_at = $3 WHERE id = $1
             RETURNING {STORY_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(encoded)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        Story::try_from(row)
    }

    async fn delete(&self, id: StoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("story not found".into()));
        }
        Ok(())
    }
}
