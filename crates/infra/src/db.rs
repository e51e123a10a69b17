use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::UserRow;

/// Shared handle to the in-memory user collection.
///
/// Cloning the handle shares the underlying collection. Every repository
/// function takes the lock exactly once, so each operation is atomic with
/// respect to the others.
#[derive(Debug, Clone, Default)]
pub struct Db {
    users: Arc<RwLock<Vec<UserRow>>>,
}

impl Db {
    /// Create an empty, isolated store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&[UserRow]) -> R) -> R {
        let users = self.users.read();
        f(&users)
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Vec<UserRow>) -> R) -> R {
        let mut users = self.users.write();
        f(&mut users)
    }
}
