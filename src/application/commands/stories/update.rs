// src/application/commands/stories/update.rs
use super::StoryCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StoryDto},
    error::ApplicationResult,
};
use crate::domain::story::{StoryBody, StoryCategory, StoryTitle, StoryUpdate};

pub struct UpdateStoryCommand {
    pub id: i64,
    pub title: Option<String>,
    pub category: Option<String>,
    pub story: Option<String>,
}

impl StoryCommandService {
    /// Partial update; only supplied fields change, and only for the
    /// uploading patient.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        let story = self.load_story(command.id).await?;
        Self::ensure_uploader(&story, actor)?;

        let mut update = StoryUpdate::new(story.id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(StoryTitle::new(title)?);
        }
        if let Some(category) = command.category {
            update = update.with_category(StoryCategory::new(category)?);
        }
        if let Some(body) = command.story {
            update = update.with_body(StoryBody::new(body)?);
        }

        if update.is_empty() {
            return Ok(story.into());
        }

        let updated = self.story_repo.update(update).await?;
        Ok(updated.into())
    }
}
