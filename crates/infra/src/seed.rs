//! Pre-seeding the store from JSON.
//!
//! The document is an array of users, each with an optional `posts` array:
//!
//! ```json
//! [{ "id": "1", "name": "Alice", "email": "alice@example.com",
//!    "posts": [{ "title": "Hello", "content": "First post" }] }]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{
    db::Db,
    error::{StoreError, StoreResult},
    models::{PostRow, UserRow},
};

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    posts: Vec<SeedPost>,
}

#[derive(Debug, Deserialize)]
struct SeedPost {
    title: String,
    content: String,
}

impl From<SeedUser> for UserRow {
    fn from(seed: SeedUser) -> Self {
        let posts = seed
            .posts
            .into_iter()
            .map(|p| PostRow {
                user_id: seed.id.clone(),
                title: p.title,
                content: p.content,
            })
            .collect();

        Self {
            id: seed.id,
            name: seed.name,
            email: seed.email,
            posts,
        }
    }
}

/// Append the users described by `json` to the store and return how many were added.
///
/// All-or-nothing: a user id that is already stored, or repeated inside the
/// document, fails with `Conflict` and nothing is inserted.
pub fn load_from_str(db: &Db, json: &str) -> StoreResult<usize> {
    let seeds: Vec<SeedUser> = serde_json::from_str(json)?;

    db.write(|users| {
        {
            let mut seen: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
            for seed in &seeds {
                if !seen.insert(seed.id.as_str()) {
                    return Err(StoreError::user_exists(&seed.id));
                }
            }
        }

        let count = seeds.len();
        users.extend(seeds.into_iter().map(UserRow::from));
        Ok(count)
    })
}

pub fn load_from_path(db: &Db, path: impl AsRef<Path>) -> StoreResult<usize> {
    let json = std::fs::read_to_string(path)?;
    load_from_str(db, &json)
}
