//! Property-editor adapter glue.
//!
//! The hosting dashboard edits node payloads through generic form widgets.
//! This module is the entire coupling surface between those widgets and the
//! typed payload: [`fields_for`] describes a payload as form fields, and
//! [`apply_field`] writes a single edit back, refusing anything that does
//! not fit the payload's shape.

use itertools::Itertools;

use crate::flow::{ConditionKind, Department, InputMode, MenuOption, NodePayload};

/// What widget a field should render as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// One of a fixed set of values.
    Select { options: Vec<&'static str> },
    /// Newline-separated `key: description` pairs (menu options).
    OptionList,
}

/// A generic form field describing one editable payload attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn text(key: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            value: value.to_string(),
        }
    }

    fn select(
        key: &'static str,
        label: &'static str,
        options: Vec<&'static str>,
        value: String,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select { options },
            value,
        }
    }
}

/// Describes the payload as a list of generic form fields.
pub fn fields_for(payload: &NodePayload) -> Vec<FormField> {
    match payload {
        NodePayload::Greeting { message } => {
            vec![FormField::text("message", "Greeting message", message)]
        }
        NodePayload::Message { message } => {
            vec![FormField::text("message", "Message", message)]
        }
        NodePayload::Input {
            question,
            input_type,
        } => vec![
            FormField::text("question", "Question", question),
            FormField::select(
                "inputType",
                "Input type",
                vec!["voice", "dtmf", "both"],
                input_type.label().to_string(),
            ),
        ],
        NodePayload::Menu {
            introduction,
            options,
        } => vec![
            FormField::text("introduction", "Introduction", introduction),
            FormField {
                key: "options",
                label: "Options",
                kind: FieldKind::OptionList,
                value: format_options(options),
            },
        ],
        NodePayload::Transfer {
            message,
            department,
        } => vec![
            FormField::text("message", "Transfer message", message),
            FormField::select(
                "department",
                "Department",
                Department::ALL.iter().map(|d| d.label()).collect(),
                department.label().to_string(),
            ),
        ],
        NodePayload::Condition {
            condition_type,
            condition_value,
        } => vec![
            FormField::select(
                "conditionType",
                "Condition type",
                ConditionKind::ALL.iter().map(|c| c.label()).collect(),
                condition_type.label().to_string(),
            ),
            FormField::text("conditionValue", "Condition value", condition_value),
        ],
    }
}

/// Writes a single field edit back into the payload.
///
/// Returns `false` and leaves the payload unchanged for keys that do not
/// belong to the variant or values that do not parse into the target enum.
pub fn apply_field(payload: &mut NodePayload, key: &str, value: &str) -> bool {
    match (payload, key) {
        (NodePayload::Greeting { message }, "message")
        | (NodePayload::Message { message }, "message")
        | (NodePayload::Transfer { message, .. }, "message") => {
            *message = value.to_string();
            true
        }
        (NodePayload::Input { question, .. }, "question") => {
            *question = value.to_string();
            true
        }
        (NodePayload::Input { input_type, .. }, "inputType") => match InputMode::parse(value) {
            Some(mode) => {
                *input_type = mode;
                true
            }
            None => false,
        },
        (NodePayload::Menu { introduction, .. }, "introduction") => {
            *introduction = value.to_string();
            true
        }
        (NodePayload::Menu { options, .. }, "options") => {
            *options = parse_options(value);
            true
        }
        (NodePayload::Transfer { department, .. }, "department") => {
            match Department::parse(value) {
                Some(d) => {
                    *department = d;
                    true
                }
                None => false,
            }
        }
        (NodePayload::Condition { condition_type, .. }, "conditionType") => {
            match ConditionKind::parse(value) {
                Some(c) => {
                    *condition_type = c;
                    true
                }
                None => false,
            }
        }
        (NodePayload::Condition {
            condition_value, ..
        }, "conditionValue") => {
            *condition_value = value.to_string();
            true
        }
        _ => false,
    }
}

fn format_options(options: &[MenuOption]) -> String {
    options
        .iter()
        .map(|o| format!("{}: {}", o.key, o.description))
        .join("\n")
}

fn parse_options(value: &str) -> Vec<MenuOption> {
    value
        .lines()
        .filter_map(|line| {
            let (key, description) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some(MenuOption::new(key, description.trim()))
        })
        .collect()
}
