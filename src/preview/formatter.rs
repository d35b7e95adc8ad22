use super::PreviewNode;

/// Formats a preview tree into an indented, human-readable listing.
pub struct PreviewFormatter;

impl PreviewFormatter {
    pub fn format(root: &PreviewNode) -> String {
        let mut out = String::new();
        out.push_str(&Self::line(root));
        out.push('\n');
        Self::format_children(root, "", &mut out);
        out
    }

    fn format_children(node: &PreviewNode, prefix: &str, out: &mut String) {
        let last_index = node.children.len().saturating_sub(1);
        for (index, child) in node.children.iter().enumerate() {
            let is_last = index == last_index;
            let branch = if is_last { "└─ " } else { "├─ " };
            out.push_str(prefix);
            out.push_str(branch);
            out.push_str(&Self::line(child));
            out.push('\n');

            let descent = if is_last { "   " } else { "│  " };
            Self::format_children(child, &format!("{prefix}{descent}"), out);
        }
    }

    fn line(node: &PreviewNode) -> String {
        if node.is_reference {
            format!("[{}] {} (loops back)", node.label, node.summary)
        } else if node.summary.is_empty() {
            format!("[{}]", node.label)
        } else {
            format!("[{}] {}", node.label, node.summary)
        }
    }
}
