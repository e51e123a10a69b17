pub mod posts;
pub mod users;

pub use posts::{CreatePostData, UpdatePostData};
pub use users::{CreateUserData, UpdateUserData};
