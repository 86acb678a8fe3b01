// src/application/commands/stories/comment_delete.rs
use super::StoryCommandService;
use crate::application::{
    dto::{AuthenticatedUser, StoryDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::story::CommentId;

pub struct DeleteCommentCommand {
    pub story_id: i64,
    pub comment_id: String,
}

impl StoryCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<StoryDto> {
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
        story.remove_comment(comment_id)?;

        let saved = self
            .story_repo
            .replace_comments(story.id, &story.comments, now)
            .await?;
        Ok(saved.into())
    }
}
