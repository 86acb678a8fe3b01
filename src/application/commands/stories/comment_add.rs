// src/application/commands/stories/comment_add.rs
use super::StoryCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StoryDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::story::{Comment, CommentText};

pub struct AddCommentCommand {
    pub story_id: i64,
    pub text: String,
}

impl StoryCommandService {
    /// Append a doctor's comment to a story. The role gate comes before
    /// any ownership logic; a fresh comment has no owner yet.
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<StoryDto> {
        if !actor.is_doctor() {
            return Err(ApplicationError::forbidden("only doctors can comment"));
        }

        let text = CommentText::new(command.text)?;
        let mut story = self.load_story(command.story_id).await?;

        let now = self.clock.now();
        story.add_comment(Comment::new(actor.id, text, now));

        let saved = self
            .story_repo
            .replace_comments(story.id, &story.comments, now)
            .await?;
        Ok(saved.into())
    }
}
