use std::time::{Duration, Instant};

use async_graphql::{Request, Response, Variables};
use serde_json::{Value, json};
use user_directory::config::ServerSettings;
use user_directory::graphql::{DirectorySchema, build_schema};
use user_directory::store::{UserStore, seed_users};

fn schema() -> DirectorySchema {
    build_schema(UserStore::seed(), &ServerSettings::default())
}

async fn execute(query: &str, variables: Value) -> Response {
    let request = Request::new(query).variables(Variables::from_json(variables));
    schema().execute(request).await
}

fn data(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

fn first_error(response: &Response) -> String {
    assert!(!response.errors.is_empty(), "expected a validation error");
    response.errors[0].message.clone()
}

const GET_USER: &str = r#"
    query GetUser($id: ID!) {
        getUser(id: $id) {
            id
            name
            email
            age
        }
    }
"#;

const LIST_USERS: &str = r#"
    query ListUsers($limit: Int) {
        listUsers(limit: $limit) {
            id
            name
            email
            age
        }
    }
"#;

fn seed_json() -> Vec<Value> {
    seed_users()
        .into_iter()
        .map(|u| {
            json!({
                "id": u.id,
                "name": u.name,
                "email": u.email,
                "age": u.age,
            })
        })
        .collect()
}

// =============================================================================
// getUser
// =============================================================================

#[tokio::test]
async fn test_get_user_by_valid_id() {
    let response = execute(GET_USER, json!({ "id": "1" })).await;
    assert_eq!(
        data(response)["getUser"],
        json!({
            "id": "1",
            "name": "John Doe",
            "email": "john.doe@example.com",
            "age": 30
        })
    );
}

#[tokio::test]
async fn test_get_user_returns_every_seed_record() {
    for expected in seed_json() {
        let id = expected["id"].clone();
        let response = execute(GET_USER, json!({ "id": id })).await;
        assert_eq!(data(response)["getUser"], expected);
    }
}

#[tokio::test]
async fn test_get_user_without_age() {
    let response = execute(GET_USER, json!({ "id": "4" })).await;
    let data = data(response);
    let user = &data["getUser"];
    assert_eq!(user["name"], "Alice Brown");
    assert_eq!(user["email"], "alice.brown@example.com");
    assert!(user["age"].is_null());
}

#[tokio::test]
async fn test_get_user_unknown_id_returns_null() {
    let response = execute(GET_USER, json!({ "id": "999" })).await;
    assert_eq!(data(response), json!({ "getUser": null }));
}

#[tokio::test]
async fn test_get_user_id_is_exact_match() {
    for id in ["01", "1 ", "", "one"] {
        let response = execute(GET_USER, json!({ "id": id })).await;
        assert_eq!(data(response), json!({ "getUser": null }), "id {:?}", id);
    }
}

// =============================================================================
// listUsers
// =============================================================================

#[tokio::test]
async fn test_list_users_without_limit() {
    let response = execute(LIST_USERS, json!({})).await;
    assert_eq!(data(response)["listUsers"], Value::Array(seed_json()));
}

#[tokio::test]
async fn test_list_users_without_argument() {
    let response = schema().execute("{ listUsers { id } }").await;
    let users = data(response)["listUsers"].as_array().unwrap().clone();
    assert_eq!(users.len(), 5);
}

#[tokio::test]
async fn test_list_users_respects_limit() {
    let response = execute(LIST_USERS, json!({ "limit": 2 })).await;
    assert_eq!(
        data(response)["listUsers"],
        Value::Array(seed_json()[..2].to_vec())
    );
}

#[tokio::test]
async fn test_list_users_non_positive_limit_returns_all() {
    for limit in [0, -1, -100] {
        let response = execute(LIST_USERS, json!({ "limit": limit })).await;
        assert_eq!(
            data(response)["listUsers"],
            Value::Array(seed_json()),
            "limit {}",
            limit
        );
    }
}

#[tokio::test]
async fn test_list_users_null_limit_returns_all() {
    let response = execute(LIST_USERS, json!({ "limit": null })).await;
    assert_eq!(data(response)["listUsers"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_users_limit_beyond_store_truncates() {
    let response = execute(LIST_USERS, json!({ "limit": 10 })).await;
    assert_eq!(data(response)["listUsers"], Value::Array(seed_json()));
}

#[tokio::test]
async fn test_both_queries_in_one_document() {
    let response = schema()
        .execute(r#"{ getUser(id: "3") { name } listUsers(limit: 1) { id } }"#)
        .await;
    assert_eq!(
        data(response),
        json!({
            "getUser": { "name": "Bob Johnson" },
            "listUsers": [{ "id": "1" }]
        })
    );
}

// =============================================================================
// Validation errors
// =============================================================================

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let response = schema()
        .execute(r#"{ getUser(id: "1") { id name invalidField } }"#)
        .await;
    let message = first_error(&response);
    assert!(message.contains("invalidField"), "{}", message);
    assert!(
        message.contains("Unknown field") || message.contains("Cannot query field"),
        "{}",
        message
    );
    assert_eq!(response.data.into_json().unwrap(), Value::Null);
}

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let response = schema().execute("{ getUser { id name } }").await;
    let message = first_error(&response);
    assert!(
        message.contains(r#"Field "getUser" argument "id" of type "ID!" is required"#),
        "{}",
        message
    );
    assert_eq!(response.data.into_json().unwrap(), Value::Null);
}

#[tokio::test]
async fn test_non_integer_limit_literal_is_rejected() {
    for literal in [r#""two""#, "2.5", "true"] {
        let query = format!("{{ listUsers(limit: {}) {{ id }} }}", literal);
        let response = schema().execute(query).await;
        let message = first_error(&response);
        // The engine's wording for "Int cannot represent non-integer value"
        assert!(
            message.contains(r#"Invalid value for argument "limit", expected type "Int""#),
            "{}",
            message
        );
        assert_eq!(response.data.into_json().unwrap(), Value::Null);
    }
}

#[tokio::test]
async fn test_non_integer_limit_variable_is_rejected() {
    let response = execute(LIST_USERS, json!({ "limit": "two" })).await;
    let message = first_error(&response);
    assert!(message.contains("Int"), "{}", message);

    let data = response.data.into_json().unwrap();
    assert!(data.get("listUsers").is_none_or(Value::is_null));
}

#[tokio::test]
async fn test_missing_required_variable_is_rejected() {
    let response = execute(GET_USER, json!({})).await;
    let message = first_error(&response);
    assert!(message.to_lowercase().contains("id"), "{}", message);
}

#[tokio::test]
async fn test_mutations_are_not_supported() {
    let response = schema()
        .execute(r#"mutation { createUser(name: "x") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_sdl_matches_wire_contract() {
    let sdl = schema().sdl();
    assert!(sdl.contains("type User {"), "{}", sdl);
    assert!(sdl.contains("id: ID!"), "{}", sdl);
    assert!(sdl.contains("name: String!"), "{}", sdl);
    assert!(sdl.contains("email: String!"), "{}", sdl);
    assert!(sdl.contains("age: Int\n"), "{}", sdl);
    assert!(sdl.contains("type Query {"), "{}", sdl);
    assert!(sdl.contains("getUser(id: ID!): User\n"), "{}", sdl);
    assert!(sdl.contains("listUsers(limit: Int): [User!]!"), "{}", sdl);
}

#[tokio::test]
async fn test_introspection_lists_query_fields() {
    let response = schema()
        .execute(r#"{ __type(name: "Query") { fields { name } } }"#)
        .await;
    let data = data(response);
    let names: Vec<&str> = data["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"getUser"));
    assert!(names.contains(&"listUsers"));
}

// =============================================================================
// Resolution time
// =============================================================================

const RESOLUTION_BUDGET: Duration = Duration::from_millis(100);

#[tokio::test]
async fn test_get_user_resolves_within_budget() {
    let schema = schema();
    let request = Request::new(GET_USER).variables(Variables::from_json(json!({ "id": "1" })));

    let start = Instant::now();
    let response = schema.execute(request).await;
    let elapsed = start.elapsed();

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert!(elapsed < RESOLUTION_BUDGET, "getUser took {:?}", elapsed);
}

#[tokio::test]
async fn test_list_users_resolves_within_budget() {
    let schema = schema();

    let start = Instant::now();
    let response = schema.execute(LIST_USERS).await;
    let elapsed = start.elapsed();

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert!(elapsed < RESOLUTION_BUDGET, "listUsers took {:?}", elapsed);
}
