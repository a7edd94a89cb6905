use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::operation_model::ElementInfo;

/// Kind of control an operation targets. Drives which accessor the
/// code generator emits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    RadioButton,
    CheckBox,
    SelectBox,
    Button,
    Other,
}

/// A resolved operation target.
///
/// `identifier` is stable for every operation on the same control, so it can
/// be used to group operations and to name formal arguments. Radio buttons
/// sharing a `name` resolve to one element representing the whole group.
///
/// Equality and hashing ignore `image_url`: each captured operation carries
/// its own screenshot, and the same control must compare equal across them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub identifier: String,
    pub kind: ElementKind,
    pub locator: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.kind == other.kind
            && self.locator == other.locator
            && self.name == other.name
            && self.value == other.value
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.kind.hash(state);
        self.locator.hash(state);
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl Element {
    /// Target for operations without element info (alerts, navigation).
    pub fn empty() -> Self {
        Self {
            identifier: String::new(),
            kind: ElementKind::Other,
            locator: String::new(),
            name: None,
            value: None,
            image_url: None,
        }
    }

    /// Resolve an element from captured DOM details.
    ///
    /// Locator priority: id > name > visible text > xpath.
    pub fn resolve(info: Option<&ElementInfo>, image_url: Option<&str>) -> Self {
        let Some(info) = info else {
            return Self::empty();
        };

        let tag = info.tagname.to_lowercase();
        let kind = classify_element(info);
        let name = info.attribute("name").map(str::to_string);
        let value = info.attribute("value").map(str::to_string);

        let (identifier, locator) = match kind {
            ElementKind::RadioButton if name.is_some() => {
                let group = name.clone().unwrap_or_default();
                let locator = attribute_selector("name", &group);
                (group, locator)
            }
            _ => resolve_locator(info, &tag),
        };

        Self {
            identifier,
            kind,
            locator,
            name,
            value,
            image_url: image_url.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.identifier.is_empty()
    }

    /// Operations on these elements carry a value the user chose.
    pub fn is_input(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::RadioButton | ElementKind::CheckBox | ElementKind::SelectBox
        )
    }
}

// ============================================================================
// Classification and locator resolution
// ============================================================================

pub fn classify_element(info: &ElementInfo) -> ElementKind {
    let tag = info.tagname.to_lowercase();
    let input_type = info
        .attribute("type")
        .map(|t| t.to_lowercase())
        .unwrap_or_default();

    match (tag.as_str(), input_type.as_str()) {
        ("input", "radio") => ElementKind::RadioButton,
        ("input", "checkbox") => ElementKind::CheckBox,
        ("select", _) => ElementKind::SelectBox,
        ("button", _) => ElementKind::Button,
        ("input", "button" | "submit" | "reset" | "image") => ElementKind::Button,
        _ => ElementKind::Other,
    }
}

/// Returns `(identifier, locator)` for a non-grouped element.
fn resolve_locator(info: &ElementInfo, tag: &str) -> (String, String) {
    if let Some(id) = info.attribute("id") {
        return (id.to_string(), id_selector(id));
    }

    if let Some(name) = info.attribute("name") {
        return (name.to_string(), attribute_selector("name", name));
    }

    if let Some(text) = info.text.as_deref().and_then(visible_text) {
        let locator = if tag == "a" {
            format!("*={}", text)
        } else {
            format!("{}*={}", tag, text)
        };
        return (text, locator);
    }

    if info.xpath.is_empty() {
        return (String::new(), String::new());
    }

    (xpath_identifier(tag, &info.xpath), info.xpath.clone())
}

fn visible_text(raw: &str) -> Option<String> {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() { None } else { Some(text) }
}

fn id_selector(id: &str) -> String {
    let plain = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if plain {
        format!("#{}", id)
    } else {
        attribute_selector("id", id)
    }
}

pub fn attribute_selector(attribute: &str, value: &str) -> String {
    format!("[{}=\"{}\"]", attribute, value.replace('"', "\\\""))
}

/// Identifier for elements only reachable by xpath: tag plus a short
/// fingerprint of the path, so the same node always gets the same name.
fn xpath_identifier(tag: &str, xpath: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(xpath.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let tag = if tag.is_empty() { "element" } else { tag };
    format!("{}_{}", tag, &digest[..8])
}
