// src/domain/story/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::identity::IdentityId;
use crate::domain::story::entity::{Comment, NewStory, Story, StoryUpdate};
use crate::domain::story::value_objects::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn insert(&self, new_story: NewStory) -> DomainResult<Story>;

    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>>;

    /// Stories by one uploader, newest first.
    async fn list_by_uploader(&self, uploader: IdentityId) -> DomainResult<Vec<Story>>;

    /// Every story, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Story>>;

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story>;

    /// Persist the full comment list of one story in a single write.
    /// Comments are embedded in the parent row, so this is the only way a
    /// comment mutation reaches storage.
    async fn replace_comments(
        &self,
        id: StoryId,
        comments: &[Comment],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Story>;

    async fn delete(&self, id: StoryId) -> DomainResult<()>;
}
