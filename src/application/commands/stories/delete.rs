// src/application/commands/stories/delete.rs
use super::StoryCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteStoryCommand {
    pub id: i64,
}

impl StoryCommandService {
    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteStoryCommand,
    ) -> ApplicationResult<()> {
        let story = self.load_story(command.id).await?;
        Self::ensure_uploader(&story, actor)?;

        self.story_repo.delete(story.id).await?;
        Ok(())
    }
}
