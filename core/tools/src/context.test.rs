use super::*;

#[tokio::test]
async fn test_tool_context() {
    let ctx = ToolContext::new("call-1", "session-1", PathBuf::from("/tmp"));

    assert_eq!(ctx.call_id, "call-1");
    assert_eq!(ctx.session_id, "session-1");
    assert!(!ctx.is_cancelled());
}

#[test]
fn test_resolve_path() {
    let ctx = ToolContext::new("call-1", "session-1", PathBuf::from("/home/user/project"));

    assert_eq!(
        ctx.resolve_path("src/main.rs"),
        PathBuf::from("/home/user/project/src/main.rs")
    );

    assert_eq!(ctx.resolve_path("/etc/passwd"), PathBuf::from("/etc/passwd"));
}

#[tokio::test]
async fn test_context_builder() {
    let ctx = ToolContextBuilder::new("call-1", "session-1").cwd("/tmp").build();

    assert_eq!(ctx.cwd, PathBuf::from("/tmp"));
    assert_eq!(ctx.call_id, "call-1");
}

#[tokio::test]
async fn cancellation_propagates_through_the_token() {
    let ctx = ToolContext::new("call-1", "session-1", PathBuf::from("/tmp"));
    ctx.cancel_token.cancel();
    assert!(ctx.is_cancelled());
    ctx.cancelled().await;
}
