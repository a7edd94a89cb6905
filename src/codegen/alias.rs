use std::collections::{HashMap, HashSet};

use crate::page_object::page_object_model::PageObjectModel;

const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Turn an arbitrary screen or element name into a valid identifier.
pub fn to_identifier(name: &str) -> String {
    escape_reserved(sanitize(name))
}

fn sanitize(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

fn escape_reserved(mut ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        ident.insert(0, '_');
    }
    ident
}

/// Produces unique aliases for a list of names.
///
/// Names are converted to identifiers and cut to `max_length` characters
/// (0 disables the cut). A cut that lands on a reserved word is escaped
/// like any other reserved word. When a cut name is already taken, the numeric
/// suffix `2`, `3`, ... is appended, in input order, until it is unique.
#[derive(Debug, Clone, Copy)]
pub struct NameGenerator {
    max_length: usize,
}

impl NameGenerator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn generate<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut used: HashSet<String> = HashSet::new();
        names
            .iter()
            .map(|name| {
                let base = escape_reserved(self.truncate(&sanitize(name.as_ref())));
                let alias = if used.contains(&base) {
                    (2..)
                        .map(|n| format!("{}{}", base, n))
                        .find(|candidate| !used.contains(candidate))
                        .unwrap_or_else(|| base.clone())
                } else {
                    base
                };
                used.insert(alias.clone());
                alias
            })
            .collect()
    }

    fn truncate(&self, name: &str) -> String {
        if self.max_length == 0 {
            return name.to_string();
        }
        name.chars().take(self.max_length).collect()
    }
}

/// Code names for everything a generation run emits.
///
/// Page object aliases are unique across the model; method and element
/// aliases are unique within their page object (they share one class
/// namespace).
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    page_objects: HashMap<String, String>,
    members: HashMap<(String, String), String>,
}

impl AliasTable {
    pub fn build(model: &PageObjectModel, generator: &NameGenerator) -> Self {
        let ids: Vec<&str> = model.page_objects().iter().map(|po| po.id.as_str()).collect();
        let page_objects = ids
            .iter()
            .map(|id| id.to_string())
            .zip(generator.generate(&ids))
            .collect();

        let mut members = HashMap::new();
        for po in model.page_objects() {
            let names: Vec<&str> = po
                .methods
                .iter()
                .map(|m| m.id.as_str())
                .chain(po.elements().into_iter().map(|el| el.identifier.as_str()))
                .collect();

            for (name, alias) in names.iter().zip(generator.generate(&names)) {
                members.insert((po.id.clone(), name.to_string()), alias);
            }
        }

        Self {
            page_objects,
            members,
        }
    }

    pub fn page_object<'a>(&'a self, id: &'a str) -> &'a str {
        self.page_objects.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn method<'a>(&'a self, page_object_id: &str, method_id: &'a str) -> &'a str {
        self.member(page_object_id, method_id)
    }

    pub fn element<'a>(&'a self, page_object_id: &str, identifier: &'a str) -> &'a str {
        self.member(page_object_id, identifier)
    }

    fn member<'a>(&'a self, page_object_id: &str, name: &'a str) -> &'a str {
        self.members
            .get(&(page_object_id.to_string(), name.to_string()))
            .map(String::as_str)
            .unwrap_or(name)
    }
}
