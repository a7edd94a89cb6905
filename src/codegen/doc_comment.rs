use super::alias::AliasTable;

/// Builder for JSDoc blocks.
///
/// Tag values are kept on one line so that `metadata` can read them back.
#[derive(Debug, Clone, Default)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.lines.push(doc_text(text));
        self
    }

    pub fn tag(mut self, name: &str, value: &str) -> Self {
        self.lines.push(format!("@{} {}", name, doc_text(value)));
        self
    }

    /// `@mermaid` followed by the diagram, one line per diagram line.
    pub fn mermaid(mut self, diagram: &str) -> Self {
        self.lines.push("@mermaid".to_string());
        self.lines
            .extend(diagram.lines().map(|line| line.replace("*/", "* /")));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, indent: &str) -> String {
        let mut out = format!("{}/**\n", indent);
        for line in &self.lines {
            if line.is_empty() {
                out.push_str(&format!("{} *\n", indent));
            } else {
                out.push_str(&format!("{} * {}\n", indent, line));
            }
        }
        out.push_str(&format!("{} */\n", indent));
        out
    }
}

/// Flatten text so it cannot break out of a comment block or span lines.
pub fn doc_text(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}

// ============================================================================
// Mermaid screen transition diagrams
// ============================================================================

/// `graph LR` diagram of the given transitions, nodes named by alias.
pub fn mermaid_graph(edges: &[(&str, &str)], aliases: &AliasTable) -> String {
    let mut diagram = String::from("graph LR\n");
    for (from, to) in edges {
        diagram.push_str(&format!(
            "  {} --> {}\n",
            mermaid_node(from, aliases),
            mermaid_node(to, aliases)
        ));
    }
    diagram
}

fn mermaid_node(id: &str, aliases: &AliasTable) -> String {
    let alias = aliases.page_object(id);
    if alias == id {
        alias.to_string()
    } else {
        format!("{}[\"{}\"]", alias, id.replace('"', "#quot;"))
    }
}
