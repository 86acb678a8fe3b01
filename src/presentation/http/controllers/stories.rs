// src/presentation/http/controllers/stories.rs
use crate::application::{
    commands::stories::{
        AddCommentCommand, DeleteCommentCommand, DeleteStoryCommand, EditCommentCommand,
        UpdateStoryCommand, UploadStoryCommand,
    },
    dto::{AnonymizedStoryDto, StoryDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct UploadStoryRequest {
    pub title: String,
    pub category: String,
    pub story: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStoryRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub story: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

pub async fn upload_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UploadStoryRequest>,
) -> HttpResult<(StatusCode, Json<StoryDto>)> {
    let command = UploadStoryCommand {
        title: payload.title,
        category: payload.category,
        story: payload.story,
    };

    let story = state
        .services
        .story_commands
        .upload(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(story)))
}

pub async fn my_stories(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<StoryDto>>> {
    state
        .services
        .story_queries
        .my_stories(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn all_stories(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<AnonymizedStoryDto>>> {
    state
        .services
        .story_queries
        .all_stories()
        .await
        .into_http()
        .map(Json)
}

pub async fn update_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStoryRequest>,
) -> HttpResult<Json<StoryDto>> {
    let command = UpdateStoryCommand {
        id,
        title: payload.title,
        category: payload.category,
        story: payload.story,
    };

    state
        .services
        .story_commands
        .update(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .story_commands
        .delete(&user, DeleteStoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(story_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<StoryDto>> {
    let command = AddCommentCommand {
        story_id,
        text: payload.text,
    };

    state
        .services
        .story_commands
        .add_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn edit_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((story_id, comment_id)): Path<(i64, String)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<StoryDto>> {
    let command = EditCommentCommand {
        story_id,
        comment_id,
        text: payload.text,
    };

    state
        .services
        .story_commands
        .edit_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((story_id, comment_id)): Path<(i64, String)>,
) -> HttpResult<Json<StoryDto>> {
    let command = DeleteCommentCommand {
        story_id,
        comment_id,
    };

    state
        .services
        .story_commands
        .delete_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}
