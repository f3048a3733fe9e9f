use super::*;

#[test]
fn duplicate_tool_name_is_a_hard_error() {
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolMetadata::new("search", ExecutionKind::Server))
        .unwrap();
    let err = registry
        .register(ToolMetadata::new("search", ExecutionKind::Server))
        .unwrap_err();
    assert!(matches!(err, ComError::ToolRegistrationConflict { .. }));
}

#[test]
fn duplicate_alias_is_first_wins() {
    let mut registry = ToolRegistry::new();
    let mut a = ToolMetadata::new("a", ExecutionKind::Server);
    a.aliases.push("shared".to_string());
    let mut b = ToolMetadata::new("b", ExecutionKind::Server);
    b.aliases.push("shared".to_string());
    registry.register(a).unwrap();
    registry.register(b).unwrap();

    assert_eq!(registry.get_by_alias("shared").unwrap().name, "a");
}

#[test]
fn user_audience_tool_excluded_from_model_visible() {
    let mut registry = ToolRegistry::new();
    let mut user_tool = ToolMetadata::new("internal", ExecutionKind::Server);
    user_tool.audience = Audience::User;
    registry.register(user_tool).unwrap();
    registry
        .register(ToolMetadata::new("public", ExecutionKind::Server))
        .unwrap();

    let visible: Vec<&str> = registry.model_visible().map(|t| t.name.as_str()).collect();
    assert_eq!(visible, vec!["public"]);
    // still retrievable by name/alias directly (§4.1 get_tool includes
    // audience=user tools).
    assert!(registry.get("internal").is_some());
}
