use std::collections::HashMap;

use tracing::{debug, warn};

use crate::sequence::sequence_model::SequencePath;

use super::method_factory::MethodFactory;
use super::method_filter::{IncludedMethodFilter, MethodFilter};
use super::page_object_model::{PageObject, PageObjectMethod, PageObjectModel};

/// Builds the page object model from the sequence paths of all recordings.
pub struct PageObjectModelBuilder {
    factory: MethodFactory,
    method_filter: Box<dyn MethodFilter>,
}

impl PageObjectModelBuilder {
    pub fn new(factory: MethodFactory, method_filter: Box<dyn MethodFilter>) -> Self {
        Self {
            factory,
            method_filter,
        }
    }

    pub fn build(&self, paths: &[SequencePath]) -> PageObjectModel {
        let mut model = PageObjectModel::new();
        let mut candidates: Vec<(String, Vec<PageObjectMethod>)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for sequence in paths.iter().flat_map(|p| p.sequences.iter()) {
            if !model.contains(&sequence.screen) {
                model.insert(PageObject::new(
                    &sequence.screen,
                    &sequence.url,
                    sequence.image_url.clone(),
                ));
            }

            let slot = *slots.entry(sequence.screen.clone()).or_insert_with(|| {
                candidates.push((sequence.screen.clone(), Vec::new()));
                candidates.len() - 1
            });
            candidates[slot].1.push(self.factory.create(sequence));
        }

        for (page_object_id, methods) in candidates {
            let methods: Vec<PageObjectMethod> = methods
                .into_iter()
                .map(|m| redirect_unknown_destination(&model, m))
                .collect();
            model.record_methods(methods.iter().cloned());

            let mut kept = self.method_filter.filter(methods);
            assign_method_ids(&mut kept);

            debug!(
                page_object = %page_object_id,
                methods = kept.len(),
                "built page object"
            );

            if let Some(page_object) = model.get_mut(&page_object_id) {
                page_object.methods = kept;
            }
        }

        model
    }
}

impl Default for PageObjectModelBuilder {
    fn default() -> Self {
        Self::new(MethodFactory::default(), Box::new(IncludedMethodFilter))
    }
}

/// A method leading to a screen with no page object is treated as staying
/// on its own page.
fn redirect_unknown_destination(
    model: &PageObjectModel,
    mut method: PageObjectMethod,
) -> PageObjectMethod {
    if !model.contains(&method.return_page_object_id) {
        warn!(
            page_object = %method.page_object_id,
            destination = %method.return_page_object_id,
            "unknown destination screen, treating as self-transition"
        );
        method.return_page_object_id = method.page_object_id.clone();
    }
    method
}

/// `go_<destination>` for the first method to a destination, then
/// `go_<destination>_2`, `go_<destination>_3`, ...
fn assign_method_ids(methods: &mut [PageObjectMethod]) {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for method in methods.iter_mut() {
        let count = counts
            .entry(method.return_page_object_id.clone())
            .or_insert(0);
        *count += 1;

        method.id = if *count == 1 {
            format!("go_{}", method.return_page_object_id)
        } else {
            format!("go_{}_{}", method.return_page_object_id, count)
        };
    }
}
