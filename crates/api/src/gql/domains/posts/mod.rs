pub mod resolvers;
pub mod types;

pub use resolvers::PostMutation;
pub use types::{Post, PostInput};
