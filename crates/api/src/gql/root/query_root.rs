use async_graphql::MergedObject;

use crate::gql::domains::users::UserQuery;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(UserQuery);
