pub mod resolvers;
pub mod types;

pub use resolvers::{UserMutation, UserQuery};
pub use types::{User, UserInput};
