use crate::graph::transition_graph::ScreenTransitionGraph;
use crate::operation::element::ElementKind;
use crate::page_object::page_object_model::{PageObject, PageObjectModel};
use crate::scenario::scenario_model::TestSuite;
use crate::test_data::input_collector::FormalArgumentCollector;

use super::alias::AliasTable;
use super::doc_comment::mermaid_graph;
use super::link::markdown_link;

// ============================================================================
// Markdown documentation
// ============================================================================

/// Index page: overall transition diagram, page object table, test suites.
pub fn render_index(
    model: &PageObjectModel,
    graph: &ScreenTransitionGraph,
    suites: &[TestSuite],
    aliases: &AliasTable,
) -> String {
    let mut out = String::from("# Page objects\n\n");

    if graph.edge_count() > 0 {
        out.push_str("```mermaid\n");
        out.push_str(&mermaid_graph(&graph.edges(), aliases));
        out.push_str("```\n\n");
    }

    out.push_str("| Page object | URL | Methods |\n| --- | --- | --- |\n");
    for page_object in model.page_objects() {
        let alias = aliases.page_object(&page_object.id);
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            markdown_link(alias, "pages", alias, "md"),
            table_cell(&page_object.url),
            page_object.methods.len()
        ));
    }

    if !suites.is_empty() {
        out.push_str("\n# Test suites\n\n");
        for suite in suites {
            out.push_str(&format!(
                "- {} ({} test cases)\n",
                suite.name,
                suite.test_cases.len()
            ));
        }
    }

    out
}

/// One page per page object: where it lives and what each method does.
pub fn render_page_document(page_object: &PageObject, aliases: &AliasTable) -> String {
    let alias = aliases.page_object(&page_object.id);
    let mut out = format!("# {}\n\n", alias);

    if alias != page_object.id {
        out.push_str(&format!("Screen: {}\n\n", page_object.id));
    }
    if !page_object.url.is_empty() {
        out.push_str(&format!("URL: {}\n\n", page_object.url));
    }
    if let Some(image) = &page_object.image_url {
        out.push_str(&format!("![{}]({})\n\n", alias, image));
    }

    for method in &page_object.methods {
        let return_alias = aliases.page_object(&method.return_page_object_id);
        out.push_str(&format!(
            "## {}\n\nReturns: {}\n\n",
            aliases.method(&page_object.id, &method.id),
            markdown_link(return_alias, "", return_alias, "md")
        ));

        let arguments = FormalArgumentCollector.collect(method);
        if !arguments.is_empty() {
            out.push_str("| Argument | Kind |\n| --- | --- |\n");
            for argument in &arguments {
                out.push_str(&format!(
                    "| {} | {} |\n",
                    aliases.element(&page_object.id, &argument.name),
                    kind_label(argument.kind)
                ));
            }
            out.push('\n');
        }

        for (i, op) in method.operations.iter().enumerate() {
            let target = if op.target.is_resolved() {
                format!(" `{}`", op.target.locator)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{}. {}{}\n",
                i + 1,
                op.operation_type.as_str(),
                target
            ));
        }
        out.push('\n');
    }

    out
}

fn kind_label(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::RadioButton => "radio button",
        ElementKind::CheckBox => "check box",
        ElementKind::SelectBox => "select box",
        ElementKind::Button => "button",
        ElementKind::Other => "input",
    }
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
