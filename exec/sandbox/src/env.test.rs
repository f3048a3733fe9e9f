use super::*;

#[test]
fn blocks_credential_like_variables() {
    let env = build_sandboxed_env([
        ("AWS_SECRET_ACCESS_KEY".to_string(), "x".to_string()),
        ("GITHUB_TOKEN".to_string(), "x".to_string()),
        ("DB_PASSWORD".to_string(), "x".to_string()),
    ]);
    assert!(env.is_empty());
}

#[test]
fn carries_through_ordinary_variables() {
    let env = build_sandboxed_env([("EDITOR".to_string(), "vim".to_string())]);
    assert_eq!(env.get("EDITOR").map(String::as_str), Some("vim"));
}

#[test]
fn always_allows_path_even_if_it_would_otherwise_match() {
    let env = build_sandboxed_env([("PATH".to_string(), "/usr/bin".to_string())]);
    assert_eq!(env.get("PATH").map(String::as_str), Some("/usr/bin"));
}

#[test]
fn matching_is_case_insensitive() {
    let env = build_sandboxed_env([("my_secret_value".to_string(), "x".to_string())]);
    assert!(env.is_empty());
}
