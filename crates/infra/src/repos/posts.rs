use crate::{
    db::Db,
    error::{StoreError, StoreResult},
    models::PostRow,
};

use super::users;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub fn list_by_user(db: &Db, user_id: &str) -> StoreResult<Vec<PostRow>> {
    db.read(|users| {
        users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.posts.clone())
            .ok_or_else(StoreError::user_not_found)
    })
}

/// Append a post to the end of the owner's post list.
pub fn create(db: &Db, data: CreatePostData) -> StoreResult<PostRow> {
    db.write(|all| {
        let user = users::find_mut(all, &data.user_id)?;

        let row = PostRow {
            user_id: user.id.clone(),
            title: data.title,
            content: data.content,
        };
        user.posts.push(row.clone());
        Ok(row)
    })
}

/// Update the first post of `user_id` titled `title`. Later posts sharing
/// the title are never addressed.
pub fn update(db: &Db, user_id: &str, title: &str, data: UpdatePostData) -> StoreResult<PostRow> {
    db.write(|all| {
        let user = users::find_mut(all, user_id)?;
        let post = user
            .posts
            .iter_mut()
            .find(|p| p.title == title)
            .ok_or_else(StoreError::post_not_found)?;

        if let Some(title) = data.title {
            post.title = title;
        }
        if let Some(content) = data.content {
            post.content = content;
        }

        Ok(post.clone())
    })
}

/// Remove the first post of `user_id` titled `title` and return it.
pub fn delete(db: &Db, user_id: &str, title: &str) -> StoreResult<PostRow> {
    db.write(|all| {
        let user = users::find_mut(all, user_id)?;
        let index = user
            .posts
            .iter()
            .position(|p| p.title == title)
            .ok_or_else(StoreError::post_not_found)?;
        Ok(user.posts.remove(index))
    })
}
