use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub posts: Vec<PostRow>,
}

impl UserRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            posts: Vec::new(),
        }
    }
}

/// A post is owned by exactly one user; `user_id` mirrors the parent's id
/// and is never used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
    pub user_id: String,
    pub title: String,
    pub content: String,
}
