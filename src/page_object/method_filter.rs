use tracing::debug;

use super::page_object_model::PageObjectMethod;

/// Reduces the candidate methods of one page object.
pub trait MethodFilter {
    fn filter(&self, methods: Vec<PageObjectMethod>) -> Vec<PageObjectMethod>;
}

/// Keeps only methods that no other candidate includes.
///
/// A method is dropped when another candidate strictly includes it, or when
/// it and an earlier candidate include each other (first seen wins).
/// Survivors keep their original order.
pub struct IncludedMethodFilter;

impl IncludedMethodFilter {
    fn is_covered(methods: &[PageObjectMethod], index: usize) -> bool {
        let method = &methods[index];

        methods.iter().enumerate().any(|(other_index, other)| {
            if other_index == index || !other.includes(method) {
                return false;
            }
            let mutual = method.includes(other);
            !mutual || other_index < index
        })
    }
}

impl MethodFilter for IncludedMethodFilter {
    fn filter(&self, methods: Vec<PageObjectMethod>) -> Vec<PageObjectMethod> {
        let covered: Vec<bool> = (0..methods.len())
            .map(|i| Self::is_covered(&methods, i))
            .collect();

        let before = methods.len();
        let kept: Vec<PageObjectMethod> = methods
            .into_iter()
            .zip(covered)
            .filter_map(|(method, covered)| (!covered).then_some(method))
            .collect();

        debug!(before, after = kept.len(), "filtered included methods");
        kept
    }
}
