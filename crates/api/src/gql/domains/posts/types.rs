use async_graphql::{InputObject, SimpleObject};

use infra::models::PostRow;
use infra::repos::UpdatePostData;

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            user_id: row.user_id,
            title: row.title,
            content: row.content,
        }
    }
}

/// Partial update for a post; omitted fields are left unchanged.
#[derive(InputObject, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<PostInput> for UpdatePostData {
    fn from(input: PostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
        }
    }
}
