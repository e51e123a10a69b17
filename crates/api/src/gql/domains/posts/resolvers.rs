use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{posts, posts::CreatePostData};

use super::types::{Post, PostInput};

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Append a post to the user's posts.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        title: String,
        content: String,
    ) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let row = posts::create(
            &state.db,
            CreatePostData {
                user_id,
                title,
                content,
            },
        )
        .gql_err()?;
        tracing::info!(user_id = %row.user_id, title = %row.title, "Post created");

        Ok(row.into())
    }

    /// Delete the first post of the user with the given title.
    async fn delete_post(&self, ctx: &Context<'_>, user_id: String, title: String) -> Result<bool> {
        let state = ctx.data::<AppState>()?;

        posts::delete(&state.db, &user_id, &title).gql_err()?;
        tracing::info!(user_id = %user_id, title = %title, "Post deleted");

        Ok(true)
    }

    /// Update the first post of the user with the given title.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        title: String,
        input: PostInput,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;

        posts::update(&state.db, &user_id, &title, input.into()).gql_err()?;
        tracing::info!(user_id = %user_id, title = %title, "Post updated");

        Ok(true)
    }
}
