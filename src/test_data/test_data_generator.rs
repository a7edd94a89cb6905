use tracing::debug;

use crate::page_object::page_object_model::{PageObjectMethod, PageObjectModel};

use super::combination::CombinationGenerator;
use super::input_collector::{FormalArgument, FormalArgumentCollector, InputGroupCollector, InputValue};
use super::test_data_model::{CallArguments, TestDataSet, TestDataVariation};

/// Builds data-driven variations for scenarios.
///
/// The values offered for a method's arguments are the distinct values
/// recorded by every candidate that filled the same fields on the way to the
/// same page, its own values first.
pub struct TestDataGenerator {
    combinations: CombinationGenerator,
}

impl TestDataGenerator {
    pub fn new(max_generation: usize) -> Self {
        Self {
            combinations: CombinationGenerator::new(max_generation),
        }
    }

    pub fn argument_values(
        &self,
        model: &PageObjectModel,
        method: &PageObjectMethod,
    ) -> Vec<(FormalArgument, Vec<String>)> {
        let arguments = FormalArgumentCollector.collect(method);
        let sources = std::iter::once(method).chain(model.recorded_variants(method));

        let mut pools: Vec<Vec<String>> = vec![Vec::new(); arguments.len()];
        for source in sources {
            for InputValue { name, value } in InputGroupCollector.collect(source) {
                let Some(slot) = arguments.iter().position(|a| a.name == name) else {
                    continue;
                };
                if !pools[slot].contains(&value) {
                    pools[slot].push(value);
                }
            }
        }

        arguments
            .into_iter()
            .zip(pools)
            .filter(|(_, values)| !values.is_empty())
            .collect()
    }

    /// Bounded combinations of one method's argument values.
    pub fn variations(
        &self,
        model: &PageObjectModel,
        method: &PageObjectMethod,
    ) -> Vec<TestDataVariation> {
        let (arguments, pools): (Vec<FormalArgument>, Vec<Vec<String>>) =
            self.argument_values(model, method).into_iter().unzip();

        self.combinations
            .generate(&pools)
            .into_iter()
            .map(|row| TestDataVariation {
                values: arguments
                    .iter()
                    .zip(row)
                    .map(|(argument, value)| InputValue {
                        name: argument.name.clone(),
                        value,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Data sets for a whole scenario: bounded combinations of the
    /// variations of every call that takes arguments.
    pub fn generate(
        &self,
        model: &PageObjectModel,
        calls: &[&PageObjectMethod],
    ) -> Vec<TestDataSet> {
        let per_call: Vec<(usize, Vec<TestDataVariation>)> = calls
            .iter()
            .enumerate()
            .map(|(i, method)| (i, self.variations(model, method)))
            .filter(|(_, variations)| !variations.is_empty())
            .collect();

        let choices: Vec<Vec<usize>> = per_call
            .iter()
            .map(|(_, variations)| (0..variations.len()).collect())
            .collect();

        let data_sets: Vec<TestDataSet> = self
            .combinations
            .generate(&choices)
            .into_iter()
            .enumerate()
            .map(|(n, row)| TestDataSet {
                name: format!("data{}", n + 1),
                arguments: per_call
                    .iter()
                    .zip(row)
                    .map(|((call_index, variations), choice)| CallArguments {
                        call_index: *call_index,
                        variation: variations[choice].clone(),
                    })
                    .collect(),
            })
            .collect();

        debug!(
            calls = calls.len(),
            data_sets = data_sets.len(),
            "generated test data"
        );
        data_sets
    }
}
