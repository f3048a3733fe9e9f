use super::*;
use agentick_com::Audience;
use agentick_com::ExecutionKind;

#[test]
fn flatten_content_joins_text_and_reasoning() {
    let blocks = vec![
        ContentBlock::Reasoning { block_index: 0, text: "thinking".into(), metadata: Default::default() },
        ContentBlock::Text { block_index: 1, text: " answer".into(), metadata: Default::default() },
    ];
    assert_eq!(flatten_content(&blocks), "thinking answer");
}

#[test]
fn flatten_content_renders_tool_calls_as_a_tag() {
    let blocks = vec![ContentBlock::ToolUse {
        block_index: 0,
        id: "call_1".into(),
        name: "search".into(),
        input: serde_json::json!({"q": "rust"}),
    }];
    let flat = flatten_content(&blocks);
    assert!(flat.contains("tool_call"));
    assert!(flat.contains("search"));
}

#[test]
fn project_timeline_gives_tool_results_the_tool_role() {
    let timeline = vec![TimelineEntry::tool_result_ok(
        "call_1",
        vec![ContentBlock::Text { block_index: 0, text: "42".into(), metadata: Default::default() }],
    )];
    let messages = project_timeline(&timeline);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Tool);
    assert!(messages[0].content.contains("42"));
}

#[test]
fn project_tools_carries_name_description_and_parameters() {
    let mut tool = ToolMetadata::new("search", ExecutionKind::Server);
    tool.description = "searches the web".into();
    let defs = project_tools(&[tool]);
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "search");
    assert_eq!(defs[0].description, "searches the web");
}

#[test]
fn project_sections_keys_by_id() {
    let mut section = Section::new("instructions", Audience::Model);
    section.content.push(ContentBlock::Text {
        block_index: 0,
        text: "be helpful".into(),
        metadata: Default::default(),
    });
    let projected = project_sections(&[section]);
    assert_eq!(projected.get("instructions").map(String::as_str), Some("be helpful"));
}

#[test]
fn build_model_input_assembles_every_field() {
    let com_input = ComInput {
        timeline: vec![TimelineEntry::message(Role::User, vec![])],
        system_entries: vec!["sys".into()],
        sections: vec![],
        tools: vec![],
        metadata: serde_json::json!({"session_id": "abc"}),
        ephemeral: serde_json::Value::Null,
    };
    let input = build_model_input(&com_input);
    assert_eq!(input.messages.len(), 1);
    assert_eq!(input.metadata.get("session_id").and_then(|v| v.as_str()), Some("abc"));
    assert_eq!(input.sections.get("system").map(String::as_str), Some("sys"));
}
