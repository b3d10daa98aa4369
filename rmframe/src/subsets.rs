use rand::{seq::SliceRandom, Rng};

/// Lazily enumerates every subset of `items` exactly once.
///
/// Cardinalities are visited in the order given at construction. Within a
/// cardinality, combinations come out in lexicographic order with respect to
/// the order of `items`.
#[derive(Debug, Clone)]
pub struct Subsets<T> {
    items: Vec<T>,
    cardinalities: std::vec::IntoIter<usize>,
    combination: Option<Vec<usize>>,
}

/// All subsets of `items`, with the order of cardinalities shuffled by `rng`.
/// The shuffle is redrawn on every call.
pub fn subsets<T, R>(items: Vec<T>, rng: &mut R) -> Subsets<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut cardinalities: Vec<usize> = (0..=items.len()).collect();
    cardinalities.shuffle(rng);
    Subsets::with_cardinalities(items, cardinalities)
}

impl<T: Clone> Subsets<T> {
    /// Cardinalities larger than `items.len()` are skipped. Repeating a
    /// cardinality repeats its subsets.
    pub fn with_cardinalities(items: Vec<T>, cardinalities: Vec<usize>) -> Self {
        Self {
            items,
            cardinalities: cardinalities.into_iter(),
            combination: None,
        }
    }
}

/// Advances `idxs` to the next strictly increasing index vector below `n`.
/// Returns false once the last combination has been passed.
fn next_combination(idxs: &mut [usize], n: usize) -> bool {
    let k = idxs.len();
    let Some(pivot) = (0..k).rev().find(|&i| idxs[i] < n - k + i) else {
        return false;
    };
    idxs[pivot] += 1;
    for i in pivot + 1..k {
        idxs[i] = idxs[i - 1] + 1;
    }
    true
}

impl<T: Clone> Iterator for Subsets<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(idxs) = self.combination.as_mut() {
                let subset = idxs.iter().map(|&i| self.items[i].clone()).collect();
                if !next_combination(idxs, self.items.len()) {
                    self.combination = None;
                }
                return Some(subset);
            }
            let cardinality = self.cardinalities.next()?;
            if cardinality <= self.items.len() {
                self.combination = Some((0..cardinality).collect());
            }
        }
    }
}
