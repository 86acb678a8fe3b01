// tests/story_listing_unit.rs
use std::sync::Arc;

mod support;

use karte_core::application::commands::stories::AddCommentCommand;
use karte_core::application::dto::{ANONYMOUS_AUTHOR_EMAIL, ANONYMOUS_AUTHOR_NAME};
use support::mocks::InMemoryStoryRepo;
use support::{StoryBuilder, doctor_actor, patient_actor, story_queries, story_service};

fn seeded_repo() -> Arc<InMemoryStoryRepo> {
    Arc::new(InMemoryStoryRepo::with_stories(vec![
        StoryBuilder::new(1).uploaded_by(1).title("first").build(),
        StoryBuilder::new(2)
            .uploaded_by(2)
            .title("second")
            .created_minutes_later(5)
            .build(),
        StoryBuilder::new(3)
            .uploaded_by(1)
            .title("third")
            .created_minutes_later(10)
            .build(),
    ]))
}

#[tokio::test]
async fn my_stories_returns_only_the_callers_newest_first() {
    let queries = story_queries(seeded_repo());

    let stories = queries.my_stories(&patient_actor(1)).await.unwrap();

    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].title, "third");
    assert_eq!(stories[1].title, "first");
    assert!(stories.iter().all(|s| s.uploaded_by == 1));
}

#[tokio::test]
async fn all_stories_anonymizes_every_uploader() {
    let queries = story_queries(seeded_repo());

    let stories = queries.all_stories().await.unwrap();

    assert_eq!(stories.len(), 3);
    assert_eq!(stories[0].title, "third");
    for story in &stories {
        assert_eq!(story.uploaded_by.name, ANONYMOUS_AUTHOR_NAME);
        assert_eq!(story.uploaded_by.email, ANONYMOUS_AUTHOR_EMAIL);
    }
    // The numeric id survives so clients can still group by author.
    assert_eq!(stories[0].uploaded_by.id, 1);
    assert_eq!(stories[1].uploaded_by.id, 2);
}

#[tokio::test]
async fn comments_ride_along_on_both_listings() {
    let repo = seeded_repo();
    let service = story_service(Arc::clone(&repo));

    service
        .add_comment(
            &doctor_actor(9),
            AddCommentCommand {
                story_id: 1,
                text: "well done".into(),
            },
        )
        .await
        .unwrap();

    let queries = story_queries(repo);

    let mine = queries.my_stories(&patient_actor(1)).await.unwrap();
    let first = mine.iter().find(|s| s.id == 1).unwrap();
    assert_eq!(first.comments.len(), 1);
    assert_eq!(first.comments[0].text, "well done");

    let all = queries.all_stories().await.unwrap();
    let first = all.iter().find(|s| s.id == 1).unwrap();
    assert_eq!(first.comments[0].author_id, 9);
}
