use crate::error::{GenerationError, Result};
use crate::page_object::page_object_model::PageObjectOperation;

use super::element::{Element, ElementKind};
use super::operation_model::{OperationType, RecordedOperation, RecordedRun};

/// Convert a recorded operation into its method-scoped form.
///
/// Never fails: unknown types become `Other` and a missing element resolves
/// to an empty target.
pub fn normalize_operation(op: &RecordedOperation) -> PageObjectOperation {
    let operation_type = OperationType::parse(&op.operation_type);
    let target = Element::resolve(op.element_info.as_ref(), op.image_file_path.as_deref());

    let input = match operation_type {
        // The interesting part of a window switch is where it went
        OperationType::SwitchWindow => op.url.clone(),
        OperationType::Click
            if target.kind == ElementKind::RadioButton && op.input.is_empty() =>
        {
            target.value.clone().unwrap_or_default()
        }
        _ => op.input.clone(),
    };

    PageObjectOperation {
        target,
        operation_type,
        input,
    }
}

/// Reject runs whose operations violate the documented input shape.
///
/// This is the only fatal check in the pipeline; later stages assume it
/// has passed.
pub fn validate_runs(runs: &[RecordedRun]) -> Result<()> {
    for (run_index, run) in runs.iter().enumerate() {
        let run_name = if run.name.is_empty() {
            format!("#{}", run_index + 1)
        } else {
            run.name.clone()
        };

        for (index, op) in run.operations.iter().enumerate() {
            if op.screen_def.trim().is_empty() {
                return Err(GenerationError::InvalidOperation {
                    run: run_name,
                    index,
                    reason: "missing screenDef".into(),
                });
            }

            if let Some(info) = &op.element_info {
                if info.tagname.trim().is_empty() {
                    return Err(GenerationError::InvalidOperation {
                        run: run_name,
                        index,
                        reason: "elementInfo without tagname".into(),
                    });
                }
            }
        }
    }

    Ok(())
}
