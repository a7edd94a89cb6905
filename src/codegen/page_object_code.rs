use crate::operation::element::{Element, ElementKind};
use crate::operation::operation_model::OperationType;
use crate::page_object::page_object_model::{PageObject, PageObjectMethod, PageObjectOperation};
use crate::test_data::input_collector::{FormalArgument, FormalArgumentCollector};

use super::alias::AliasTable;
use super::doc_comment::{DocComment, mermaid_graph};
use super::metadata::encode_tag_value;

// ============================================================================
// Page object class (TypeScript / WebdriverIO)
// ============================================================================

/// Render a page object as a TypeScript class.
///
/// Layout: imports of destination pages, class doc block, element getters,
/// radio-button accessor blocks, per-element setters, then one async method
/// per page object method.
pub fn render_page_object(page_object: &PageObject, aliases: &AliasTable) -> String {
    let class_name = aliases.page_object(&page_object.id);
    let mut out = String::new();

    let mut imports: Vec<&str> = Vec::new();
    for method in &page_object.methods {
        let target = method.return_page_object_id.as_str();
        if target != page_object.id && !imports.contains(&target) {
            imports.push(target);
        }
    }
    for target in &imports {
        let alias = aliases.page_object(target);
        out.push_str(&format!("import {{ {} }} from \"./{}\";\n", alias, alias));
    }
    if !imports.is_empty() {
        out.push('\n');
    }

    out.push_str(&page_object_doc(page_object, aliases).render(""));
    out.push_str(&format!("export class {} {{\n", class_name));

    let mut members: Vec<String> = Vec::new();
    let elements = page_object.elements();
    let inputs = input_elements(page_object);

    for element in &elements {
        let alias = aliases.element(&page_object.id, &element.identifier);
        if element.kind == ElementKind::RadioButton {
            members.push(render_radio_accessor(alias, element));
        } else {
            members.push(render_getter(alias, element));
        }
    }

    for argument in &inputs {
        if argument.kind == ElementKind::RadioButton {
            continue;
        }
        let alias = aliases.element(&page_object.id, &argument.name);
        members.push(render_setter(alias, argument.kind));
    }

    for method in &page_object.methods {
        members.push(render_method(page_object, method, aliases));
    }

    out.push_str(&members.join("\n"));
    out.push_str("}\n");
    out
}

fn page_object_doc(page_object: &PageObject, aliases: &AliasTable) -> DocComment {
    let mut doc = DocComment::new()
        .tag("namespace", aliases.page_object(&page_object.id))
        .tag("pageObjectId", &encode_tag_value(&page_object.id));

    if !page_object.url.is_empty() {
        doc = doc.tag("url", &page_object.url);
    }
    if let Some(image) = &page_object.image_url {
        doc = doc.tag("image", image);
    }

    let mut edges: Vec<(&str, &str)> = Vec::new();
    for method in &page_object.methods {
        let edge = (page_object.id.as_str(), method.return_page_object_id.as_str());
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }
    if !edges.is_empty() {
        doc = doc.mermaid(&mermaid_graph(&edges, aliases));
    }
    doc
}

/// Elements that receive a value in some method, first use first.
fn input_elements(page_object: &PageObject) -> Vec<FormalArgument> {
    let mut arguments: Vec<FormalArgument> = Vec::new();
    for method in &page_object.methods {
        for argument in FormalArgumentCollector.collect(method) {
            if !arguments.iter().any(|a| a.name == argument.name) {
                arguments.push(argument);
            }
        }
    }
    arguments
}

// ============================================================================
// Members
// ============================================================================

fn render_getter(alias: &str, element: &Element) -> String {
    format!(
        "  get {}() {{\n    return $({});\n  }}\n",
        alias,
        js_string(&element.locator)
    )
}

/// Accessor block for a radio group: `check(value)` clicks the member of
/// the group with that value.
fn render_radio_accessor(alias: &str, element: &Element) -> String {
    let locator = element
        .locator
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");

    format!(
        "  get {alias}() {{\n    return {{\n      check: async (value: string) => {{\n        await $(`{locator}[value=\"${{value}}\"]`).click();\n      }},\n    }};\n  }}\n",
        alias = alias,
        locator = locator,
    )
}

fn render_setter(alias: &str, kind: ElementKind) -> String {
    match kind {
        ElementKind::CheckBox => format!(
            "  async set_{alias}(value: boolean) {{\n    if ((await this.{alias}.isSelected()) !== value) {{\n      await this.{alias}.click();\n    }}\n  }}\n",
            alias = alias
        ),
        ElementKind::SelectBox => format!(
            "  async set_{alias}(value: string) {{\n    await this.{alias}.selectByAttribute(\"value\", value);\n  }}\n",
            alias = alias
        ),
        _ => format!(
            "  async set_{alias}(value: string) {{\n    await this.{alias}.setValue(value);\n  }}\n",
            alias = alias
        ),
    }
}

fn render_method(page_object: &PageObject, method: &PageObjectMethod, aliases: &AliasTable) -> String {
    let method_alias = aliases.method(&page_object.id, &method.id);
    let return_alias = aliases.page_object(&method.return_page_object_id);
    let arguments = FormalArgumentCollector.collect(method);

    let doc = DocComment::new()
        .tag("function", &encode_tag_value(&method.id))
        .tag("returns", &encode_tag_value(&method.return_page_object_id))
        .mermaid(&mermaid_graph(
            &[(method.page_object_id.as_str(), method.return_page_object_id.as_str())],
            aliases,
        ));

    let params = if arguments.is_empty() {
        String::new()
    } else {
        let fields: Vec<String> = arguments
            .iter()
            .map(|a| {
                format!(
                    "{}: {}",
                    aliases.element(&page_object.id, &a.name),
                    argument_type(a.kind)
                )
            })
            .collect();
        format!("args: {{ {} }}", fields.join("; "))
    };

    let mut out = doc.render("  ");
    out.push_str(&format!(
        "  async {}({}): Promise<{}> {{\n",
        method_alias, params, return_alias
    ));
    for op in &method.operations {
        out.push_str(&format!(
            "    {}\n",
            render_statement(&page_object.id, op, aliases)
        ));
    }
    if method.is_self_transition() {
        out.push_str("    return this;\n");
    } else {
        out.push_str(&format!("    return new {}();\n", return_alias));
    }
    out.push_str("  }\n");
    out
}

pub fn argument_type(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::CheckBox => "boolean",
        _ => "string",
    }
}

fn render_statement(page_object_id: &str, op: &PageObjectOperation, aliases: &AliasTable) -> String {
    let alias = aliases.element(page_object_id, &op.target.identifier);
    let resolved = op.target.is_resolved();

    match op.operation_type {
        OperationType::Click | OperationType::Change if !resolved => {
            format!("// {} on an unresolved element", op.operation_type.as_str())
        }
        OperationType::Click | OperationType::Change => match op.target.kind {
            ElementKind::RadioButton => format!("await this.{}.check(args.{});", alias, alias),
            ElementKind::CheckBox => format!("await this.set_{}(args.{});", alias, alias),
            _ if op.operation_type == OperationType::Change => {
                format!("await this.set_{}(args.{});", alias, alias)
            }
            _ => format!("await this.{}.click();", alias),
        },
        OperationType::SwitchWindow => {
            format!("await browser.switchWindow({});", js_string(&op.input))
        }
        OperationType::AcceptAlert => "await browser.acceptAlert();".to_string(),
        OperationType::DismissAlert => "await browser.dismissAlert();".to_string(),
        OperationType::BrowserBack => "await browser.back();".to_string(),
        OperationType::BrowserForward => "await browser.forward();".to_string(),
        OperationType::SkippedOperations => "// skipped operations".to_string(),
        OperationType::Other => format!("// {}", op.operation_type.as_str()),
    }
}

/// Double-quoted string literal.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
