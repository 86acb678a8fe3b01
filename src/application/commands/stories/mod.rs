mod comment_add;
mod comment_delete;
mod comment_edit;
mod create;
mod delete;
mod service;
mod update;

pub use comment_add::AddCommentCommand;
pub use comment_delete::DeleteCommentCommand;
pub use comment_edit::EditCommentCommand;
pub use create::UploadStoryCommand;
pub use delete::DeleteStoryCommand;
pub use service::StoryCommandService;
pub use update::UpdateStoryCommand;
