// src/application/commands/stories/create.rs
use super::StoryCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StoryDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::story::{NewStory, StoryBody, StoryCategory, StoryTitle};

pub struct UploadStoryCommand {
    pub title: String,
    pub category: String,
    pub story: String,
}

impl StoryCommandService {
    pub async fn upload(
        &self,
        actor: &AuthenticatedUser,
        command: UploadStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        if !actor.is_patient() {
            return Err(ApplicationError::forbidden(
                "only patients can publish stories",
            ));
        }

        let new_story = NewStory {
            title: StoryTitle::new(command.title)?,
            category: StoryCategory::new(command.category)?,
            body: StoryBody::new(command.story)?,
            uploaded_by: actor.id,
            created_at: self.clock.now(),
        };

        let story = self.story_repo.insert(new_story).await?;
        Ok(story.into())
    }
}
