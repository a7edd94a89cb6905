use crate::operation::element::ElementKind;
use crate::page_object::page_object_model::{PageObjectMethod, PageObjectModel};
use crate::scenario::scenario_model::{TestCase, TestSuite};
use crate::test_data::input_collector::{FormalArgumentCollector, InputGroupCollector};
use crate::test_data::test_data_model::{TestDataSet, TestDataVariation};

use super::alias::AliasTable;
use super::page_object_code::js_string;

/// Render a test suite as a mocha `describe` block.
///
/// Each test case becomes one `it` per data set, or a single `it` using
/// the values recorded by each method when the case has no data sets.
pub fn render_test_suite(suite: &TestSuite, model: &PageObjectModel, aliases: &AliasTable) -> String {
    let mut imports: Vec<&str> = vec![suite.top_page_object_id.as_str()];
    for call in suite
        .test_cases
        .iter()
        .flat_map(|c| c.scenario.method_calls.iter())
    {
        for id in [&call.page_object_id, &call.return_page_object_id] {
            if !imports.contains(&id.as_str()) {
                imports.push(id);
            }
        }
    }

    let mut out = String::new();
    for id in &imports {
        let alias = aliases.page_object(id);
        out.push_str(&format!(
            "import {{ {} }} from \"../pages/{}\";\n",
            alias, alias
        ));
    }
    out.push('\n');

    out.push_str(&format!("describe({}, () => {{\n", js_string(&suite.name)));
    let cases: Vec<String> = suite
        .test_cases
        .iter()
        .flat_map(|case| render_test_case(suite, case, model, aliases))
        .collect();
    out.push_str(&cases.join("\n"));
    out.push_str("});\n");
    out
}

fn render_test_case(
    suite: &TestSuite,
    case: &TestCase,
    model: &PageObjectModel,
    aliases: &AliasTable,
) -> Vec<String> {
    if case.test_data.is_empty() {
        return vec![render_it(suite, case, None, model, aliases)];
    }
    case.test_data
        .iter()
        .map(|data| render_it(suite, case, Some(data), model, aliases))
        .collect()
}

fn render_it(
    suite: &TestSuite,
    case: &TestCase,
    data: Option<&TestDataSet>,
    model: &PageObjectModel,
    aliases: &AliasTable,
) -> String {
    let title = match data {
        Some(data) => format!("{} [{}]", case.name, data.name),
        None => case.name.clone(),
    };

    let mut body = vec![
        format!("await browser.url({});", js_string(&suite.top_page_url)),
        format!(
            "const page0 = new {}();",
            aliases.page_object(&suite.top_page_object_id)
        ),
    ];

    // A skipped transition leaves the chain on another page, so the next
    // call starts from a fresh instance of its own page object.
    let mut current = (0usize, suite.top_page_object_id.as_str());
    for (i, call) in case.scenario.method_calls.iter().enumerate() {
        if call.page_object_id != current.1 {
            let fresh = current.0 + 1;
            body.push(format!(
                "const page{} = new {}();",
                fresh,
                aliases.page_object(&call.page_object_id)
            ));
            current = (fresh, call.page_object_id.as_str());
        }

        let method_alias = aliases.method(&call.page_object_id, &call.method_id);
        let args = model
            .method(&call.page_object_id, &call.method_id)
            .map(|method| {
                let recorded = recorded_variation(method);
                let variation = data.and_then(|d| d.arguments_for(i)).unwrap_or(&recorded);
                render_arguments(method, variation, aliases)
            })
            .unwrap_or_default();

        body.push(format!(
            "const page{} = await page{}.{}({});",
            current.0 + 1,
            current.0,
            method_alias,
            args
        ));
        current = (current.0 + 1, call.return_page_object_id.as_str());
    }

    let mut out = format!("  it({}, async () => {{\n", js_string(&title));
    for line in body {
        out.push_str(&format!("    {}\n", line));
    }
    out.push_str("  });\n");
    out
}

fn recorded_variation(method: &PageObjectMethod) -> TestDataVariation {
    TestDataVariation {
        values: InputGroupCollector.collect(method),
    }
}

/// Object literal for a method's `args` parameter; empty when it has none.
fn render_arguments(
    method: &PageObjectMethod,
    variation: &TestDataVariation,
    aliases: &AliasTable,
) -> String {
    let arguments = FormalArgumentCollector.collect(method);
    if arguments.is_empty() {
        return String::new();
    }

    let fields: Vec<String> = arguments
        .iter()
        .map(|argument| {
            let value = variation.get(&argument.name).unwrap_or_default();
            let literal = match argument.kind {
                ElementKind::CheckBox => boolean_literal(value).to_string(),
                _ => string_literal(value),
            };
            format!(
                "{}: {}",
                aliases.element(&method.page_object_id, &argument.name),
                literal
            )
        })
        .collect();

    format!("{{ {} }}", fields.join(", "))
}

fn boolean_literal(value: &str) -> &'static str {
    if value == "true" || value == "on" { "true" } else { "false" }
}

/// Recorded values already carry newlines as `\n` escapes, so only quotes
/// are escaped here.
fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}
