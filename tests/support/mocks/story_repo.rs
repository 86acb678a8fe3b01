// tests/support/mocks/story_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use karte_core::domain::errors::{DomainError, DomainResult};
use karte_core::domain::identity::IdentityId;
use karte_core::domain::story::{
    Comment, NewStory, Story, StoryId, StoryRepository, StoryUpdate,
};

pub struct InMemoryStoryRepo {
    inner: Mutex<StoryStore>,
}

struct StoryStore {
    rows: HashMap<i64, Story>,
    next_id: i64,
}

impl InMemoryStoryRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoryStore {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_stories(stories: Vec<Story>) -> Self {
        let next_id = stories.iter().map(|s| i64::from(s.id)).max().unwrap_or(0) + 1;
        let rows = stories.into_iter().map(|s| (i64::from(s.id), s)).collect();
        Self {
            inner: Mutex::new(StoryStore { rows, next_id }),
        }
    }

    pub fn get(&self, id: i64) -> Option<Story> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

fn newest_first(stories: &mut [Story]) {
    stories.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(i64::from(b.id).cmp(&i64::from(a.id)))
    });
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepo {
    async fn insert(&self, new_story: NewStory) -> DomainResult<Story> {
        let mut store = self.inner.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        let story = Story {
            id: StoryId::new(id).unwrap(),
            title: new_story.title,
            category: new_story.category,
            body: new_story.body,
            uploaded_by: new_story.uploaded_by,
            comments: Vec::new(),
            created_at: new_story.created_at,
            updated_at: new_story.created_at,
        };
        store.rows.insert(id, story.clone());
        Ok(story)
    }

    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&i64::from(id)).cloned())
    }

    async fn list_by_uploader(&self, uploader: IdentityId) -> DomainResult<Vec<Story>> {
        let store = self.inner.lock().unwrap();
        let mut stories: Vec<Story> = store
            .rows
            .values()
            .filter(|s| s.uploaded_by == uploader)
            .cloned()
            .collect();
        newest_first(&mut stories);
        Ok(stories)
    }

    async fn list_all(&self) -> DomainResult<Vec<Story>> {
        let store = self.inner.lock().unwrap();
        let mut stories: Vec<Story> = store.rows.values().cloned().collect();
        newest_first(&mut stories);
        Ok(stories)
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let mut store = self.inner.lock().unwrap();
        let story = store
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        if let Some(title) = update.title {
            story.title = title;
        }
        if let Some(category) = update.category {
            story.category = category;
        }
        if let Some(body) = update.body {
            story.body = body;
        }
        story.updated_at = update.updated_at;
        Ok(story.clone())
    }

    async fn replace_comments(
        &self,
        id: StoryId,
        comments: &[Comment],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Story> {
        let mut store = self.inner.lock().unwrap();
        let story = store
            .rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;
        story.comments = comments.to_vec();
        story.updated_at = updated_at;
        Ok(story.clone())
    }

    async fn delete(&self, id: StoryId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("story not found".into()))
    }
}
