// src/application/queries/stories.rs
use std::sync::Arc;

use crate::application::{
    dto::{AnonymizedStoryDto, AuthenticatedUser, StoryDto},
    error::ApplicationResult,
};
use crate::domain::story::StoryRepository;

pub struct StoryQueryService {
    story_repo: Arc<dyn StoryRepository>,
}

impl StoryQueryService {
    pub fn new(story_repo: Arc<dyn StoryRepository>) -> Self {
        Self { story_repo }
    }

    /// The caller's own stories, newest first. Author identity is retained
    /// on this path.
    pub async fn my_stories(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<StoryDto>> {
        let stories = self.story_repo.list_by_uploader(actor.id).await?;
        Ok(stories.into_iter().map(StoryDto::from).collect())
    }

    /// Every story, newest first, with the uploader anonymized. The
    /// redaction is view-level policy of this listing only.
    pub async fn all_stories(&self) -> ApplicationResult<Vec<AnonymizedStoryDto>> {
        let stories = self.story_repo.list_all().await?;
        Ok(stories.into_iter().map(AnonymizedStoryDto::from).collect())
    }
}
