use fsm_agent_state::StateMachine;
use fsm_agent_tools::ToolRegistry;

/// Builds the orchestrator briefing embedded into the model's instruction
/// context: current state, valid next states, and the registered tools.
///
/// Purely a formatting function over the machine's and registry's current
/// view; call it again after every transition or registration rather than
/// caching the output.
pub fn generate_orchestrator_guide(machine: &StateMachine, registry: &ToolRegistry) -> String {
    let mut guide = Vec::new();

    guide.push(format!("Current State: {}", machine.current()));

    let next_states = machine.reachable();
    if next_states.is_empty() {
        if machine.is_terminal() {
            guide.push("Valid Next States: None (Terminal State)".to_string());
        } else {
            guide.push("Valid Next States: None".to_string());
        }
    } else {
        guide.push(format!("Valid Next States: {}", next_states.join(", ")));
    }

    let descriptors = registry.descriptors();
    if descriptors.is_empty() {
        guide.push("Available Tools: None".to_string());
    } else {
        guide.push("Available Tools:".to_string());
        for descriptor in descriptors {
            guide.push(format!("- {}: {}", descriptor.name, descriptor.description));
        }
    }

    guide.join("\n")
}
