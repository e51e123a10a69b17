use crate::{
    db::Db,
    error::{StoreError, StoreResult},
    models::UserRow,
};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Snapshot of every user in insertion order.
pub fn list(db: &Db) -> Vec<UserRow> {
    db.read(|users| users.to_vec())
}

pub fn get_by_id(db: &Db, id: &str) -> Option<UserRow> {
    db.read(|users| users.iter().find(|u| u.id == id).cloned())
}

pub fn exists(db: &Db, id: &str) -> bool {
    db.read(|users| users.iter().any(|u| u.id == id))
}

/// Create a user with an empty post list. Fails with `Conflict` when the id is taken.
pub fn create(db: &Db, data: CreateUserData) -> StoreResult<UserRow> {
    db.write(|users| {
        if users.iter().any(|u| u.id == data.id) {
            return Err(StoreError::user_exists(&data.id));
        }

        let row = UserRow::new(data.id, data.name, data.email);
        users.push(row.clone());
        Ok(row)
    })
}

/// Overwrite the fields present in `data`. Posts are never touched.
pub fn update(db: &Db, id: &str, data: UpdateUserData) -> StoreResult<UserRow> {
    db.write(|users| {
        let user = find_mut(users, id)?;

        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(email) = data.email {
            user.email = email;
        }

        Ok(user.clone())
    })
}

/// Remove the first user with `id` and return it.
pub fn delete(db: &Db, id: &str) -> StoreResult<UserRow> {
    db.write(|users| {
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(StoreError::user_not_found)?;
        Ok(users.remove(index))
    })
}

pub(crate) fn find_mut<'a>(users: &'a mut [UserRow], id: &str) -> StoreResult<&'a mut UserRow> {
    users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(StoreError::user_not_found)
}
