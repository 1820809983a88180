use super::*;
use serde_json::{from_str, to_string};

#[test]
fn test_user_record_serialization() {
    // Create a record
    let user = UserRecord {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        public_repos: 8,
        followers: 9000,
    };

    // Serialize to JSON
    let json_str = to_string(&user).expect("Failed to serialize UserRecord");

    // Verify JSON structure
    let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("Failed to parse JSON");
    assert_eq!(parsed["login"], "octocat");
    assert_eq!(parsed["name"], "The Octocat");
    assert_eq!(parsed["public_repos"], 8);
    assert_eq!(parsed["followers"], 9000);
}

#[test]
fn test_user_record_deserialization() {
    // Create JSON
    let json_str = r#"{
        "login": "contributor",
        "name": null,
        "public_repos": 12,
        "followers": 3
    }"#;

    // Deserialize from JSON
    let user: UserRecord = from_str(json_str).expect("Failed to deserialize UserRecord");

    // Verify fields
    assert_eq!(user.login, "contributor");
    assert_eq!(user.name, None);
    assert_eq!(user.public_repos, 12);
    assert_eq!(user.followers, 3);
}

#[test]
fn test_user_record_deserialization_defaults_missing_fields() {
    // Only the unique key is guaranteed by the API contract
    let json_str = r#"{"login": "minimal"}"#;

    let user: UserRecord = from_str(json_str).expect("Failed to deserialize UserRecord");

    assert_eq!(user.login, "minimal");
    assert_eq!(user.name, None);
    assert_eq!(user.public_repos, 0);
    assert_eq!(user.followers, 0);
}

#[test]
fn test_user_record_deserialization_ignores_unknown_fields() {
    // The real API response carries dozens of fields this project never reads
    let json_str = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "public_repos": 8,
        "followers": 9000
    }"#;

    let user: UserRecord = from_str(json_str).expect("Failed to deserialize UserRecord");

    assert_eq!(user.login, "octocat");
    assert_eq!(user.public_repos, 8);
    assert_eq!(user.followers, 9000);
}
