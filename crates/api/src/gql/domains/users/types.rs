use async_graphql::{ComplexObject, InputObject, SimpleObject};

use infra::models::{PostRow, UserRow};
use infra::repos::UpdateUserData;

use crate::gql::domains::posts::Post;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[graphql(skip)]
    pub post_rows: Vec<PostRow>,
}

#[ComplexObject]
impl User {
    /// Posts owned by this user, in creation order.
    async fn posts(&self) -> Vec<Post> {
        self.post_rows.iter().cloned().map(Post::from).collect()
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            post_rows: row.posts,
        }
    }
}

/// Partial update for a user; omitted fields are left unchanged.
#[derive(InputObject, Default)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UserInput> for UpdateUserData {
    fn from(input: UserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}
