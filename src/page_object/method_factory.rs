use crate::sequence::sequence_model::Sequence;

use super::operation_filter::{
    DuplicateElementOperationFilter, ExecutableOperationFilter, OperationFilter,
};
use super::page_object_model::PageObjectMethod;

/// Turns a screen visit into a candidate method.
///
/// The returned method has an empty id; ids are assigned once the
/// candidates of a page object have been filtered.
pub struct MethodFactory {
    operation_filters: Vec<Box<dyn OperationFilter>>,
}

impl MethodFactory {
    pub fn new(operation_filters: Vec<Box<dyn OperationFilter>>) -> Self {
        Self { operation_filters }
    }

    pub fn create(&self, sequence: &Sequence) -> PageObjectMethod {
        let operations = self
            .operation_filters
            .iter()
            .fold(sequence.operations.clone(), |ops, f| f.filter(ops));

        PageObjectMethod {
            id: String::new(),
            page_object_id: sequence.screen.clone(),
            operations,
            return_page_object_id: sequence.destination.clone(),
        }
    }
}

impl Default for MethodFactory {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ExecutableOperationFilter),
            Box::new(DuplicateElementOperationFilter),
        ])
    }
}
