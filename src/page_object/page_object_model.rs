use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::operation::element::Element;
use crate::operation::operation_model::OperationType;

// ============================================================================
// Operations and methods
// ============================================================================

/// The unit of execution inside a generated method.
///
/// Equality is structural: same target, type and input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageObjectOperation {
    pub target: Element,

    #[serde(rename = "type")]
    pub operation_type: OperationType,

    pub input: String,
}

/// A reusable run of operations on one page that ends on `return_page_object_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObjectMethod {
    pub id: String,
    pub page_object_id: String,
    pub operations: Vec<PageObjectOperation>,
    pub return_page_object_id: String,
}

impl PageObjectMethod {
    /// Containment check used for deduplication.
    ///
    /// True when both methods lead to the same page and every operation of
    /// `other` also appears somewhere in `self`. Identical methods include
    /// each other, so this is a preorder, not a strict order.
    pub fn includes(&self, other: &PageObjectMethod) -> bool {
        if self.return_page_object_id != other.return_page_object_id {
            return false;
        }

        let own: HashSet<&PageObjectOperation> = self.operations.iter().collect();
        other.operations.iter().all(|op| own.contains(op))
    }

    /// Like `includes`, but compares operations by target and type only.
    ///
    /// A method that fills a form accepts the inputs of any other recording
    /// that filled the same fields on the way to the same page.
    pub fn accepts_inputs_of(&self, other: &PageObjectMethod) -> bool {
        if self.return_page_object_id != other.return_page_object_id {
            return false;
        }

        let own: HashSet<(&str, OperationType)> = self
            .operations
            .iter()
            .map(|op| (op.target.identifier.as_str(), op.operation_type))
            .collect();
        other
            .operations
            .iter()
            .all(|op| own.contains(&(op.target.identifier.as_str(), op.operation_type)))
    }

    pub fn is_self_transition(&self) -> bool {
        self.page_object_id == self.return_page_object_id
    }
}

// ============================================================================
// Page objects
// ============================================================================

/// One distinct application screen and the methods recorded on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObject {
    pub id: String,
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub methods: Vec<PageObjectMethod>,
}

impl PageObject {
    pub fn new(id: &str, url: &str, image_url: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            image_url,
            methods: Vec::new(),
        }
    }

    pub fn method(&self, method_id: &str) -> Option<&PageObjectMethod> {
        self.methods.iter().find(|m| m.id == method_id)
    }

    /// Distinct resolved elements used by this page's methods, first use first.
    pub fn elements(&self) -> Vec<&Element> {
        let mut seen = HashSet::new();
        self.methods
            .iter()
            .flat_map(|m| m.operations.iter())
            .map(|op| &op.target)
            .filter(|el| el.is_resolved() && seen.insert(el.identifier.as_str()))
            .collect()
    }
}

/// All page objects of a generation run, keyed by screen id.
///
/// Page objects keep the order in which their screens were first seen.
/// `recorded_methods` holds every candidate method before inclusion
/// filtering; surviving methods draw their test data from it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObjectModel {
    page_objects: Vec<PageObject>,
    recorded_methods: Vec<PageObjectMethod>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PageObjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page object, replacing any existing one with the same id in place.
    pub fn insert(&mut self, page_object: PageObject) {
        match self.index.get(&page_object.id) {
            Some(&i) => self.page_objects[i] = page_object,
            None => {
                self.index
                    .insert(page_object.id.clone(), self.page_objects.len());
                self.page_objects.push(page_object);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&PageObject> {
        self.index.get(id).map(|&i| &self.page_objects[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PageObject> {
        self.index.get(id).map(|&i| &mut self.page_objects[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn page_objects(&self) -> &[PageObject] {
        &self.page_objects
    }

    pub fn len(&self) -> usize {
        self.page_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page_objects.is_empty()
    }

    pub fn method(&self, page_object_id: &str, method_id: &str) -> Option<&PageObjectMethod> {
        self.get(page_object_id).and_then(|po| po.method(method_id))
    }

    pub fn record_methods(&mut self, methods: impl IntoIterator<Item = PageObjectMethod>) {
        self.recorded_methods.extend(methods);
    }

    pub fn recorded_methods(&self) -> &[PageObjectMethod] {
        &self.recorded_methods
    }

    /// Recorded candidates whose inputs `method` can replay, itself included.
    pub fn recorded_variants<'a>(
        &'a self,
        method: &'a PageObjectMethod,
    ) -> impl Iterator<Item = &'a PageObjectMethod> + 'a {
        self.recorded_methods
            .iter()
            .filter(move |c| {
                c.page_object_id == method.page_object_id && method.accepts_inputs_of(c)
            })
    }
}
