use super::*;
use crate::section::Audience;
use crate::section::Section;
use crate::tool::ExecutionKind;
use crate::tool::ToolMetadata;

#[tokio::test]
async fn set_state_emits_state_changed() {
    let com = Com::new();
    let mut rx = com.subscribe();
    com.set_state("foo", serde_json::json!(1)).await;
    let ComEvent::StateChanged(change) = rx.recv().await.unwrap();
    assert_eq!(change.key, "foo");
    assert_eq!(change.new, serde_json::json!(1));
    assert_eq!(change.previous, None);

    com.set_state("foo", serde_json::json!(2)).await;
    let ComEvent::StateChanged(change) = rx.recv().await.unwrap();
    assert_eq!(change.previous, Some(serde_json::json!(1)));
}

#[tokio::test]
async fn resolve_should_continue_is_idempotent_once_drained() {
    let com = Com::new();
    com.request_stop(0, Some("enough".to_string())).await;
    assert!(!com.resolve_should_continue(true).await);
    // Requests were drained; calling again with the same seed is stable.
    assert!(com.resolve_should_continue(true).await);
}

#[tokio::test]
async fn user_audience_section_excluded_from_to_input() {
    let com = Com::new();
    com.upsert_section(Section::new("visible", Audience::Model))
        .await;
    com.upsert_section(Section::new("hidden", Audience::User))
        .await;
    let input = com.to_input().await;
    let ids: Vec<&str> = input.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["visible"]);
}

#[tokio::test]
async fn to_input_filters_tools_to_model_audience() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("public", ExecutionKind::Server))
        .await
        .unwrap();
    let mut internal = ToolMetadata::new("internal", ExecutionKind::Server);
    internal.audience = Audience::User;
    com.register_tool(internal).await.unwrap();

    let input = com.to_input().await;
    assert_eq!(input.tools.len(), 1);
    assert_eq!(input.tools[0].name, "public");
    assert!(com.get_tool("internal").await.is_some());
}

#[test]
fn default_token_estimator_matches_formula() {
    assert_eq!(default_token_estimator(""), 4);
    assert_eq!(default_token_estimator("abcd"), 5);
    assert_eq!(default_token_estimator("abcde"), 6);
}
