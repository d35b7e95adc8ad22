use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for the six node kinds, without payload.
///
/// Used as the factory input and for palette/preview labels; the payload
/// itself lives in [`NodePayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Greeting,
    Message,
    Input,
    Menu,
    Transfer,
    Condition,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Greeting,
        NodeKind::Message,
        NodeKind::Input,
        NodeKind::Menu,
        NodeKind::Transfer,
        NodeKind::Condition,
    ];

    /// The wire tag, also used as the human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Greeting => "greeting",
            NodeKind::Message => "message",
            NodeKind::Input => "input",
            NodeKind::Menu => "menu",
            NodeKind::Transfer => "transfer",
            NodeKind::Condition => "condition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canvas-relative node position in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// How an `input` node captures the caller's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Voice,
    Dtmf,
    Both,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Voice => "voice",
            InputMode::Dtmf => "dtmf",
            InputMode::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "voice" => Some(InputMode::Voice),
            "dtmf" => Some(InputMode::Dtmf),
            "both" => Some(InputMode::Both),
            _ => None,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination queue for a `transfer` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Sales,
    Support,
    Billing,
    Technical,
    HumanAgent,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Support,
        Department::Billing,
        Department::Technical,
        Department::HumanAgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Sales => "sales",
            Department::Support => "support",
            Department::Billing => "billing",
            Department::Technical => "technical",
            Department::HumanAgent => "human-agent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == value)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a `condition` node branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    InputMatch,
    Sentiment,
    Time,
    QueueLength,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::InputMatch,
        ConditionKind::Sentiment,
        ConditionKind::Time,
        ConditionKind::QueueLength,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::InputMatch => "input-match",
            ConditionKind::Sentiment => "sentiment",
            ConditionKind::Time => "time",
            ConditionKind::QueueLength => "queue-length",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == value)
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single choice of a `menu` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    pub key: String,
    pub description: String,
}

impl MenuOption {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// The variant-specific payload of a node, closed over the six kinds.
///
/// Serializes adjacently tagged as `{ "type": ..., "data": { ... } }` with
/// camelCase field names, matching the dashboard's export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum NodePayload {
    Greeting {
        message: String,
    },
    Message {
        message: String,
    },
    Input {
        question: String,
        input_type: InputMode,
    },
    Menu {
        introduction: String,
        options: Vec<MenuOption>,
    },
    Transfer {
        message: String,
        department: Department,
    },
    Condition {
        condition_type: ConditionKind,
        condition_value: String,
    },
}

impl NodePayload {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Greeting { .. } => NodeKind::Greeting,
            NodePayload::Message { .. } => NodeKind::Message,
            NodePayload::Input { .. } => NodeKind::Input,
            NodePayload::Menu { .. } => NodeKind::Menu,
            NodePayload::Transfer { .. } => NodeKind::Transfer,
            NodePayload::Condition { .. } => NodeKind::Condition,
        }
    }

    /// The primary spoken/displayed text of the payload, if it has one.
    ///
    /// `transfer` and `condition` summaries are synthesized by the preview
    /// instead, so this intentionally skips them.
    pub fn primary_text(&self) -> Option<&str> {
        match self {
            NodePayload::Greeting { message } | NodePayload::Message { message } => Some(message),
            NodePayload::Input { question, .. } => Some(question),
            NodePayload::Menu { introduction, .. } => Some(introduction),
            NodePayload::Transfer { .. } | NodePayload::Condition { .. } => None,
        }
    }
}

/// A typed step in the call flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallFlowNode {
    pub id: String,
    pub position: Position,
    #[serde(flatten)]
    pub payload: NodePayload,
}

impl CallFlowNode {
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }
}
