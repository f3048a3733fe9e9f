//! Compile-until-stable (§4.2): evaluate the component tree against the
//! COM, let components react to the resulting structure, and repeat until
//! nobody requests a recompile or `max_iterations` is exhausted.

use agentick_com::Com;
use agentick_com::TickState;

use crate::component::Component;
use crate::component::ComponentTree;
use crate::component::PassInfo;
use crate::error::CompilerError;
use crate::structure::CompiledStructure;

/// Result of a full `compile_until_stable` run.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub compiled: CompiledStructure,
    /// Number of passes actually run (1 if the tree stabilized immediately).
    pub iterations: u32,
    /// `true` if the loop hit `max_iterations` with a recompile still
    /// pending — the last captured structure is used regardless (§4.2,
    /// Open Question: implementations log and drop).
    pub forced_stable: bool,
    /// All recompile reasons accumulated across every pass, in order.
    pub recompile_reasons: Vec<String>,
}

/// Evaluate `tree` against `com`/`tick`, repeating until no component
/// requests a recompile during a pass's `on_after_compile` hooks, or until
/// `max_iterations` passes have run.
///
/// Each pass starts from a clean sections/tools registry so re-rendering
/// the full tree cannot collide with the previous pass's output; the
/// timeline is left untouched, since only a dedicated timeline component
/// is expected to read/append it (§4.2).
pub async fn compile_until_stable(
    tree: &ComponentTree,
    com: &Com,
    tick: &TickState,
    max_iterations: u32,
) -> Result<CompileOutcome, CompilerError> {
    let mut all_reasons = Vec::new();

    for iteration in 0..max_iterations.max(1) {
        com.clear_sections().await;
        com.clear_tools().await;

        for component in tree {
            component.render(com, tick).await?;
        }

        let compiled = capture(com).await;

        let pass = PassInfo {
            iteration,
            max_iterations,
        };
        for component in tree {
            component.on_after_compile(&compiled, tick, pass).await;
        }

        let (requested, reasons) = com.take_recompile_request().await;
        all_reasons.extend(reasons);

        let is_last_pass = iteration + 1 >= max_iterations.max(1);
        if !requested {
            return Ok(CompileOutcome {
                compiled,
                iterations: iteration + 1,
                forced_stable: false,
                recompile_reasons: all_reasons,
            });
        }
        if is_last_pass {
            tracing::warn!(
                iterations = iteration + 1,
                max_iterations,
                "recompile requested on final pass; forcing stabilization and dropping the request"
            );
            return Ok(CompileOutcome {
                compiled,
                iterations: iteration + 1,
                forced_stable: true,
                recompile_reasons: all_reasons,
            });
        }
    }
    unreachable!("loop always returns on its last iteration")
}

async fn capture(com: &Com) -> CompiledStructure {
    let input = com.to_input().await;
    CompiledStructure {
        sections: input.sections,
        timeline: input.timeline,
        tools: input.tools,
        system_entries: input.system_entries,
        section_collisions: com.take_section_collisions().await,
    }
}

#[cfg(test)]
#[path = "compile.test.rs"]
mod tests;
