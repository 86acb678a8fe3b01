// src/application/commands/stories/service.rs
use std::sync::Arc;

use crate::application::dto::AuthenticatedUser;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::story::{Story, StoryId, StoryRepository};

pub struct StoryCommandService {
    pub(super) story_repo: Arc<dyn StoryRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StoryCommandService {
    pub fn new(story_repo: Arc<dyn StoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { story_repo, clock }
    }

    pub(super) async fn load_story(&self, id: i64) -> ApplicationResult<Story> {
        let id = StoryId::new(id)?;
        self.story_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))
    }

    /// Ownership gate shared by every story mutation: only the uploading
    /// patient may change or remove a story.
    pub(super) fn ensure_uploader(
        story: &Story,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<()> {
        if !actor.is_patient() || !story.is_uploaded_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "you are not allowed to modify this story",
            ));
        }
        Ok(())
    }
}
