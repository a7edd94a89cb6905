/// Bounded cartesian product for data-driven variations.
///
/// Rows are enumerated like an odometer: the rightmost position advances
/// fastest, and a position only advances once every position to its right
/// has wrapped back to zero. Empty input arrays are ignored.
///
/// ```
/// use script_generator::test_data::combination::CombinationGenerator;
///
/// let rows = CombinationGenerator::new(3).generate(&[vec!["a1", "a2"], vec!["b1", "b2"]]);
/// assert_eq!(rows, vec![vec!["a1", "b1"], vec!["a1", "b2"], vec!["a2", "b1"]]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CombinationGenerator {
    max_generation: usize,
}

impl CombinationGenerator {
    pub fn new(max_generation: usize) -> Self {
        Self { max_generation }
    }

    pub fn max_generation(&self) -> usize {
        self.max_generation
    }

    pub fn generate<T: Clone>(&self, arrays: &[Vec<T>]) -> Vec<Vec<T>> {
        let arrays: Vec<&Vec<T>> = arrays.iter().filter(|a| !a.is_empty()).collect();
        if arrays.is_empty() {
            return Vec::new();
        }

        let mut indices = vec![0usize; arrays.len()];
        let mut rows = Vec::new();

        while rows.len() < self.max_generation {
            rows.push(
                indices
                    .iter()
                    .zip(&arrays)
                    .map(|(&i, array)| array[i].clone())
                    .collect(),
            );

            if !advance(&mut indices, &arrays) {
                break;
            }
        }

        rows
    }
}

/// Step the odometer. Returns false once every combination has been produced.
fn advance<T>(indices: &mut [usize], arrays: &[&Vec<T>]) -> bool {
    for position in (0..indices.len()).rev() {
        indices[position] += 1;
        if indices[position] < arrays[position].len() {
            return true;
        }
        indices[position] = 0;
    }
    false
}
