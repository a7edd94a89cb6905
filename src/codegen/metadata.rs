use crate::error::{GenerationError, Result};
use crate::graph::transition_graph::ScreenTransitionGraph;
use crate::page_object::page_object_model::PageObjectModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMetadata {
    pub id: String,
    pub return_page_object_id: String,
}

/// Structure of a page object recovered from its generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageObjectMetadata {
    pub id: String,
    pub methods: Vec<MethodMetadata>,
}

/// Value of an id-carrying tag.
///
/// Plain ids are written as is. Ids that would not survive a trip through a
/// comment line (surrounding whitespace, control characters, `*/`, or a
/// leading quote) are written as a JSON string with `/` after `*` escaped.
pub fn encode_tag_value(id: &str) -> String {
    let plain = !id.is_empty()
        && id.trim() == id
        && !id.starts_with('"')
        && !id.contains("*/")
        && !id.chars().any(char::is_control);
    if plain {
        return id.to_string();
    }
    serde_json::to_string(id)
        .map(|quoted| quoted.replace("*/", "*\\/"))
        .unwrap_or_else(|_| "\"\"".to_string())
}

/// Inverse of [`encode_tag_value`].
pub fn decode_tag_value(value: &str) -> Result<String> {
    let value = value.trim();
    if !value.starts_with('"') {
        return Ok(value.to_string());
    }
    serde_json::from_str::<String>(value).map_err(|e| {
        GenerationError::Metadata(format!("malformed tag value {}: {}", value, e))
    })
}

/// Read the `@pageObjectId`, `@function` and `@returns` tags back out of a
/// rendered page object.
pub fn parse_page_object_metadata(source: &str) -> Result<PageObjectMetadata> {
    let mut id: Option<String> = None;
    let mut methods: Vec<MethodMetadata> = Vec::new();
    let mut pending: Option<String> = None;

    for line in source.lines() {
        let Some(content) = line.trim().strip_prefix('*').map(str::trim) else {
            continue;
        };

        if let Some(value) = content.strip_prefix("@pageObjectId ") {
            if id.is_some() {
                return Err(GenerationError::Metadata(
                    "more than one @pageObjectId".into(),
                ));
            }
            id = Some(decode_tag_value(value)?);
        } else if let Some(value) = content.strip_prefix("@function ") {
            if let Some(unfinished) = pending.take() {
                return Err(GenerationError::Metadata(format!(
                    "method '{}' has no @returns",
                    unfinished
                )));
            }
            pending = Some(decode_tag_value(value)?);
        } else if let Some(value) = content.strip_prefix("@returns ") {
            let method_id = pending.take().ok_or_else(|| {
                GenerationError::Metadata("@returns without @function".into())
            })?;
            methods.push(MethodMetadata {
                id: method_id,
                return_page_object_id: decode_tag_value(value)?,
            });
        }
    }

    if let Some(unfinished) = pending {
        return Err(GenerationError::Metadata(format!(
            "method '{}' has no @returns",
            unfinished
        )));
    }

    let id = id.ok_or_else(|| GenerationError::Metadata("missing @pageObjectId".into()))?;
    Ok(PageObjectMetadata { id, methods })
}

/// Transition graph described by parsed page objects.
pub fn transition_graph_from_metadata(pages: &[PageObjectMetadata]) -> ScreenTransitionGraph {
    let mut graph = ScreenTransitionGraph::new();
    for page in pages {
        graph.add_node(&page.id);
    }
    for page in pages {
        for method in &page.methods {
            graph.add_edge(&page.id, &method.return_page_object_id);
        }
    }
    graph
}

/// Transition graph realised by the methods of a page object model.
pub fn transition_graph_from_model(model: &PageObjectModel) -> ScreenTransitionGraph {
    let mut graph = ScreenTransitionGraph::new();
    for page_object in model.page_objects() {
        graph.add_node(&page_object.id);
    }
    for page_object in model.page_objects() {
        for method in &page_object.methods {
            graph.add_edge(&page_object.id, &method.return_page_object_id);
        }
    }
    graph
}
