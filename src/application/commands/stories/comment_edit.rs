// src/application/commands/stories/comment_edit.rs
use super::StoryCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StoryDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::story::{CommentId, CommentText};

pub struct EditCommentCommand {
    pub story_id: i64,
    pub comment_id: String,
    pub text: String,
}

impl StoryCommandService {
    /// Replace a comment's text. Only the doctor who wrote the comment may
    /// edit it; the parent story is re-saved as one unit.
    pub async fn edit_comment(
        &self,
        actor: &AuthenticatedUser,
        command: EditCommentCommand,
    ) -> ApplicationResult<StoryDto> {
        let text = CommentText::new(command.text)?;
        let comment_id = CommentId::parse(&command.comment_id)?;
        let mut story = self.load_story(command.story_id).await?;

        let comment = story
            .comment(comment_id)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !actor.is_doctor() || comment.author_id != actor.id {
            return Err(ApplicationError::forbidden(
                "you are not allowed to modify this comment",
            ));
        }

        let now = self.clock.now();
        story.edit_comment(comment_id, text, now)?;

        let saved = self
            .story_repo
            .replace_comments(story.id, &story.comments, now)
            .await?;
        Ok(saved.into())
    }
}
