use crate::operation::operation_model::OperationType;

use super::page_object_model::PageObjectOperation;

/// A rewrite applied to a sequence's operations before it becomes a method.
pub trait OperationFilter {
    fn filter(&self, operations: Vec<PageObjectOperation>) -> Vec<PageObjectOperation>;
}

/// Drops operations that cannot be replayed (`OperationType::Other`).
pub struct ExecutableOperationFilter;

impl OperationFilter for ExecutableOperationFilter {
    fn filter(&self, operations: Vec<PageObjectOperation>) -> Vec<PageObjectOperation> {
        operations
            .into_iter()
            .filter(|op| op.operation_type != OperationType::Other)
            .collect()
    }
}

/// Collapses runs of consecutive operations on the same element to the last
/// one, so `[change(X, "a"), change(X, "b")]` becomes `[change(X, "b")]`.
///
/// `switch_window` operations and operations whose target has an empty
/// identifier are never collapsed.
pub struct DuplicateElementOperationFilter;

impl DuplicateElementOperationFilter {
    fn collapsible(op: &PageObjectOperation) -> bool {
        op.operation_type != OperationType::SwitchWindow && op.target.is_resolved()
    }
}

impl OperationFilter for DuplicateElementOperationFilter {
    fn filter(&self, operations: Vec<PageObjectOperation>) -> Vec<PageObjectOperation> {
        let mut kept: Vec<PageObjectOperation> = Vec::with_capacity(operations.len());

        for op in operations {
            let replaces_previous = kept.last().is_some_and(|prev| {
                Self::collapsible(prev)
                    && Self::collapsible(&op)
                    && prev.target.identifier == op.target.identifier
            });

            if replaces_previous {
                kept.pop();
            }
            kept.push(op);
        }

        kept
    }
}
