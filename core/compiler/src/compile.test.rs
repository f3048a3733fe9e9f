use std::sync::Arc;

use agentick_com::Audience;
use agentick_com::ExecutionKind;
use agentick_com::Section;
use agentick_com::QueuedMessage;
use agentick_com::ToolMetadata;
use async_trait::async_trait;

use super::*;
use crate::component::Component;

struct StaticSection;

#[async_trait]
impl Component for StaticSection {
    async fn render(&self, com: &Com, _tick: &TickState) -> Result<(), CompilerError> {
        com.upsert_section(Section::new("greeting", Audience::Model)).await;
        Ok(())
    }
}

fn tick_state() -> TickState {
    TickState::new(1, None, Vec::<QueuedMessage>::new())
}

#[tokio::test]
async fn stabilizes_in_a_single_pass_when_nobody_requests_recompile() {
    let com = Com::new();
    let tree: ComponentTree = vec![Arc::new(StaticSection)];
    let outcome = compile_until_stable(&tree, &com, &tick_state(), 5).await.unwrap();

    assert_eq!(outcome.iterations, 1);
    assert!(!outcome.forced_stable);
    assert_eq!(outcome.compiled.sections.len(), 1);
    assert_eq!(outcome.compiled.sections[0].id, "greeting");
}

struct LoopForever;

#[async_trait]
impl Component for LoopForever {
    async fn render(&self, com: &Com, _tick: &TickState) -> Result<(), CompilerError> {
        com.upsert_section(Section::new("s", Audience::Model)).await;
        com.request_recompile(Some("always unstable".to_string())).await;
        Ok(())
    }
}

#[tokio::test]
async fn forced_stabilization_bounds_runaway_recompile_requests() {
    let com = Com::new();
    let tree: ComponentTree = vec![Arc::new(LoopForever)];
    let outcome = compile_until_stable(&tree, &com, &tick_state(), 3).await.unwrap();

    assert_eq!(outcome.iterations, 3);
    assert!(outcome.forced_stable);
    assert_eq!(outcome.recompile_reasons.len(), 3);
    assert!(outcome.recompile_reasons.iter().all(|r| r == "always unstable"));
}

#[tokio::test]
async fn repeated_runs_over_unchanged_com_are_deterministic() {
    let tree: ComponentTree = vec![Arc::new(StaticSection)];

    let com_a = Com::new();
    let outcome_a = compile_until_stable(&tree, &com_a, &tick_state(), 5).await.unwrap();

    let com_b = Com::new();
    let outcome_b = compile_until_stable(&tree, &com_b, &tick_state(), 5).await.unwrap();

    assert_eq!(outcome_a.compiled.sections.len(), outcome_b.compiled.sections.len());
    assert_eq!(outcome_a.compiled.sections[0].id, outcome_b.compiled.sections[0].id);
    assert_eq!(outcome_a.iterations, outcome_b.iterations);
}

struct RegistersOneTool;

#[async_trait]
impl Component for RegistersOneTool {
    async fn render(&self, com: &Com, _tick: &TickState) -> Result<(), CompilerError> {
        com.register_tool(ToolMetadata::new("search", ExecutionKind::Server)).await.unwrap();
        Ok(())
    }
}

#[tokio::test]
async fn each_pass_clears_tools_so_a_rerendered_tree_does_not_self_collide() {
    let com = Com::new();
    // Simulate a stray registration from a previous tick/pass that a naive
    // implementation might leave behind.
    com.register_tool(ToolMetadata::new("stale", ExecutionKind::Server)).await.unwrap();

    let tree: ComponentTree = vec![Arc::new(RegistersOneTool)];
    let outcome = compile_until_stable(&tree, &com, &tick_state(), 2).await.unwrap();

    assert_eq!(outcome.compiled.tools.len(), 1);
    assert_eq!(outcome.compiled.tools[0].name, "search");
}

struct FailsToRender;

#[async_trait]
impl Component for FailsToRender {
    async fn render(&self, _com: &Com, _tick: &TickState) -> Result<(), CompilerError> {
        crate::error::compiler_error::RenderSnafu {
            component: "FailsToRender",
            message: "boom",
        }
        .fail()
    }
}

#[tokio::test]
async fn a_failing_component_surfaces_a_render_error_and_aborts_the_pass() {
    let com = Com::new();
    let tree: ComponentTree = vec![Arc::new(FailsToRender)];
    let err = compile_until_stable(&tree, &com, &tick_state(), 2).await.unwrap_err();
    match err {
        CompilerError::Render { component, message, .. } => {
            assert_eq!(component, "FailsToRender");
            assert_eq!(message, "boom");
        }
    }
}
