pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewStory, Story, StoryUpdate};
pub use repository::StoryRepository;
pub use value_objects::{CommentId, CommentText, StoryBody, StoryCategory, StoryId, StoryTitle};
