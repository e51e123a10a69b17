use async_graphql::Variables;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_users_query_lists_in_insertion_order() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "2", "Bob");
    create_test_user(&state, "1", "Alice");

    let query = r#"
        query {
            users {
                id
                name
                email
                posts { title }
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(
        response.errors.is_empty(),
        "Users query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["users"],
        json!([
            { "id": "2", "name": "Bob", "email": "bob@test.com", "posts": [] },
            { "id": "1", "name": "Alice", "email": "alice@test.com", "posts": [] }
        ])
    );
}

#[tokio::test]
async fn test_users_query_on_empty_store() {
    let (_, schema) = setup_schema();

    let response = execute_graphql(&schema, "{ users { id } }", None).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["users"], json!([]));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");
    create_test_user(&state, "2", "Bob");

    let query = r#"
        query GetUser($id: String!) {
            user(id: $id) {
                id
                name
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "id": "2" }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "User query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(data["user"], json!({ "id": "2", "name": "Bob" }));
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");

    let query = r#"
        query {
            user(id: "404") {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "User not found");
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_create_user_then_lookup_has_no_posts() {
    let (_, schema) = setup_schema();

    let mutation = r#"
        mutation CreateUser($id: String!, $name: String!, $email: String!) {
            createUser(id: $id, name: $name, email: $email) {
                id
                name
                email
                posts { title }
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "id": "1",
        "name": "Alice",
        "email": "alice@example.com"
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(
        response.errors.is_empty(),
        "Create user should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["createUser"],
        json!({ "id": "1", "name": "Alice", "email": "alice@example.com", "posts": [] })
    );

    let response = execute_graphql(&schema, r#"{ user(id: "1") { posts { title } } }"#, None).await;
    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["user"]["posts"], json!([]));
}

#[tokio::test]
async fn test_create_duplicate_user_is_conflict() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");

    let mutation = r#"
        mutation {
            createUser(id: "1", name: "Mallory", email: "mallory@example.com") {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "User with id 1 already exists"
    );
    assert_eq!(error_code(&response).as_deref(), Some("CONFLICT"));

    let response = execute_graphql(&schema, "{ users { id name } }", None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data["users"], json!([{ "id": "1", "name": "Alice" }]));
}

#[tokio::test]
async fn test_update_user_partial_input() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");

    let mutation = r#"
        mutation UpdateUser($id: String!, $input: UserInput!) {
            updateUser(id: $id, input: $input)
        }
    "#;

    let variables = Variables::from_json(json!({
        "id": "1",
        "input": { "email": "new@example.com" }
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(
        response.errors.is_empty(),
        "Update user should succeed: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert_eq!(data["updateUser"], json!(true));

    let response = execute_graphql(&schema, r#"{ user(id: "1") { name email } }"#, None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["user"],
        json!({ "name": "Alice", "email": "new@example.com" })
    );
}

#[tokio::test]
async fn test_update_user_keeps_posts() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");

    let mutation = r#"
        mutation {
            createPost(userId: "1", title: "T", content: "C") { title }
            updateUser(id: "1", input: { name: "Alicia" })
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response =
        execute_graphql(&schema, r#"{ user(id: "1") { name posts { title } } }"#, None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["user"],
        json!({ "name": "Alicia", "posts": [{ "title": "T" }] })
    );
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let (_, schema) = setup_schema();

    let mutation = r#"
        mutation {
            updateUser(id: "nope", input: { name: "X" })
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_delete_user_removes_it_from_users() {
    let (state, schema) = setup_schema();
    create_test_user(&state, "1", "Alice");
    create_test_user(&state, "2", "Bob");

    let response = execute_graphql(&schema, r#"mutation { deleteUser(id: "1") }"#, None).await;
    assert!(
        response.errors.is_empty(),
        "Delete user should succeed: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert_eq!(data["deleteUser"], json!(true));

    let response = execute_graphql(&schema, "{ users { id } }", None).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data["users"], json!([{ "id": "2" }]));

    let response = execute_graphql(&schema, r#"{ user(id: "1") { id } }"#, None).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));

    let response = execute_graphql(&schema, r#"mutation { deleteUser(id: "1") }"#, None).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}
