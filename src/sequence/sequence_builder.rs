use tracing::debug;

use crate::operation::normalize::normalize_operation;
use crate::operation::operation_model::{RecordedOperation, RecordedRun};

use super::sequence_model::{Sequence, SequencePath};

/// Split a run into screen visits.
///
/// Consecutive operations recorded on the same screen form one sequence.
/// Each sequence's destination is the screen of the following sequence; the
/// final sequence points back at its own screen.
pub fn build_sequence_path(run: &RecordedRun) -> SequencePath {
    let mut sequences: Vec<Sequence> = Vec::new();

    for op in &run.operations {
        match sequences.last_mut() {
            Some(current) if current.screen == op.screen_def => {
                current.operations.push(normalize_operation(op));
            }
            _ => sequences.push(open_sequence(op)),
        }
    }

    let next_screens: Vec<String> = sequences
        .iter()
        .skip(1)
        .map(|s| s.screen.clone())
        .collect();
    for (sequence, next) in sequences.iter_mut().zip(next_screens) {
        sequence.destination = next;
    }

    debug!(
        run = %run.name,
        operations = run.operations.len(),
        sequences = sequences.len(),
        "built sequence path"
    );

    SequencePath {
        name: run.name.clone(),
        sequences,
    }
}

pub fn build_sequence_paths(runs: &[RecordedRun]) -> Vec<SequencePath> {
    runs.iter()
        .map(build_sequence_path)
        .filter(|path| !path.is_empty())
        .collect()
}

fn open_sequence(op: &RecordedOperation) -> Sequence {
    Sequence {
        screen: op.screen_def.clone(),
        url: op.url.clone(),
        image_url: op.image_file_path.clone().filter(|p| !p.is_empty()),
        operations: vec![normalize_operation(op)],
        destination: op.screen_def.clone(),
    }
}
