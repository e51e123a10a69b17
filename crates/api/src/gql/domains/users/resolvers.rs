use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{users, users::CreateUserData};
use infra::StoreError;

use super::types::{User, UserInput};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// All users, in insertion order.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;

        Ok(users::list(&state.db).into_iter().map(User::from).collect())
    }

    /// Look up a user by id. A missing id is a NOT_FOUND error rather than null.
    async fn user(&self, ctx: &Context<'_>, id: String) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let row = users::get_by_id(&state.db, &id)
            .ok_or_else(StoreError::user_not_found)
            .gql_err()?;

        Ok(row.into())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: String,
        email: String,
    ) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let row = users::create(&state.db, CreateUserData { id, name, email }).gql_err()?;
        tracing::info!(user_id = %row.id, "User created");

        Ok(row.into())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> Result<bool> {
        let state = ctx.data::<AppState>()?;

        let removed = users::delete(&state.db, &id).gql_err()?;
        tracing::info!(user_id = %id, posts = removed.posts.len(), "User deleted");

        Ok(true)
    }

    /// Overwrite the name and/or email of a user. Posts are untouched.
    async fn update_user(&self, ctx: &Context<'_>, id: String, input: UserInput) -> Result<bool> {
        let state = ctx.data::<AppState>()?;

        users::update(&state.db, &id, input.into()).gql_err()?;
        tracing::info!(user_id = %id, "User updated");

        Ok(true)
    }
}
