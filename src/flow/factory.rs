//! Node construction with collision-free id generation.

use super::node::{
    CallFlowNode, ConditionKind, Department, InputMode, MenuOption, NodeKind, NodePayload, Position,
};

/// Monotonic, prefix-scoped id generator.
///
/// Produces `node-1`, `node-2`, ... and never repeats within one editing
/// session; rapid successive calls are safe, unlike wall-clock-derived ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Advances the counter past every `<prefix>-N` id in `existing`, so a
    /// generator adopted into a pre-populated flow cannot collide.
    pub fn seed_past<'a>(&mut self, existing: impl Iterator<Item = &'a str>) {
        for id in existing {
            if let Some(n) = id
                .strip_prefix(self.prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|n| n.parse::<u64>().ok())
            {
                self.next = self.next.max(n + 1);
            }
        }
    }
}

/// Produces a new, fully-initialized node of a requested kind.
///
/// Pure apart from id generation; always succeeds. Fresh nodes are staggered
/// across the canvas so successive additions do not stack on one spot.
#[derive(Debug, Clone)]
pub struct NodeFactory {
    ids: IdGenerator,
    placed: u64,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new("node"),
            placed: 0,
        }
    }

    pub(crate) fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    pub fn create(&mut self, kind: NodeKind) -> CallFlowNode {
        let offset = 40.0 * (self.placed % 8) as f64;
        self.placed += 1;
        CallFlowNode {
            id: self.ids.next_id(),
            position: Position::new(250.0 + offset, 160.0 + offset),
            payload: Self::default_payload(kind),
        }
    }

    /// Default payload literals per kind.
    pub fn default_payload(kind: NodeKind) -> NodePayload {
        match kind {
            NodeKind::Greeting => NodePayload::Greeting {
                message: "Hello! Thank you for calling.".to_string(),
            },
            NodeKind::Message => NodePayload::Message {
                message: "Please hold while we process your request.".to_string(),
            },
            NodeKind::Input => NodePayload::Input {
                question: "How can I help you today?".to_string(),
                input_type: InputMode::Voice,
            },
            NodeKind::Menu => NodePayload::Menu {
                introduction: "Please choose from the following options:".to_string(),
                options: vec![
                    MenuOption::new("1", "Sales"),
                    MenuOption::new("2", "Support"),
                    MenuOption::new("3", "Billing"),
                ],
            },
            NodeKind::Transfer => NodePayload::Transfer {
                message: "Transferring you to an agent now.".to_string(),
                department: Department::Support,
            },
            NodeKind::Condition => NodePayload::Condition {
                condition_type: ConditionKind::InputMatch,
                condition_value: String::new(),
            },
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
