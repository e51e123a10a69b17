use async_graphql::ErrorExtensions;
use infra::StoreError;

/// Error type for GraphQL resolvers.
///
/// async-graphql's blanket `From<T: Display>` would flatten a `StoreError`
/// into a bare message, so store failures go through `GqlError` to pick up
/// an `extensions.code` that clients can branch on:
///   - `NotFound` → `NOT_FOUND`
///   - `Conflict` → `CONFLICT`
///   - seed/IO failures → `INTERNAL_SERVER_ERROR`, detail logged server-side only
#[derive(Debug)]
pub enum GqlError {
    Store(StoreError),
}

impl GqlError {
    pub fn code(&self) -> &'static str {
        match self {
            GqlError::Store(StoreError::NotFound(_)) => "NOT_FOUND",
            GqlError::Store(StoreError::Conflict(_)) => "CONFLICT",
            GqlError::Store(StoreError::Seed(_) | StoreError::Io(_)) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(e @ (StoreError::NotFound(_) | StoreError::Conflict(_))) => {
                write!(f, "{e}")
            }
            GqlError::Store(e) => {
                tracing::error!("Store error: {e}");
                write!(f, "Internal store error")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(e)
    }
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Extension trait that converts a store result into `async_graphql::Result<T>`
/// with the error code attached.
///
/// Usage: `users::delete(&state.db, &id).gql_err()?`
pub trait ResultExt<T> {
    fn gql_err(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for infra::StoreResult<T> {
    fn gql_err(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            let err = GqlError::from(e);
            tracing::debug!(code = err.code(), "{err}");
            err.extend()
        })
    }
}
