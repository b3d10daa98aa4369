//! Relational frames ⟨S, P, R⟩: validation of the frame axioms, closure under
//! the derived preorder, and brute-force search for valid frames over small
//! carriers.

use std::collections::BTreeSet;

pub mod algebra;
pub mod axioms;
pub mod closure;
mod error;
pub mod frame;
pub mod search;
pub mod subsets;

pub use error::{DistinguishedSetDefect, FrameError, RelationDefect};
pub use frame::{Frame, RelationTable};
pub use search::{par_search_frames, search_frames, SearchOutcome};

/// A label in the carrier S = {0, …, n−1}.
pub type Element = usize;
pub type Triple = (Element, Element, Element);
pub type Quadruple = (Element, Element, Element, Element);
pub type Relation = BTreeSet<Triple>;
pub type ElementSet = BTreeSet<Element>;

/// The carrier S = {0, …, n−1} of a frame. Always nonempty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Carrier(usize);

impl Carrier {
    pub fn new(size: usize) -> Result<Self, FrameError> {
        if size == 0 {
            return Err(FrameError::InvalidCarrier(size));
        }
        Ok(Self(size))
    }
    pub fn size(&self) -> usize {
        self.0
    }
    pub fn contains(&self, element: Element) -> bool {
        element < self.0
    }
    pub fn elements(&self) -> std::ops::Range<Element> {
        0..self.0
    }
    /// S³ in lexicographic order.
    pub fn triples(&self) -> impl Iterator<Item = Triple> {
        let n = self.0;
        (0..n).flat_map(move |a| (0..n).flat_map(move |b| (0..n).map(move |c| (a, b, c))))
    }
    /// S⁴ in lexicographic order.
    pub fn quadruples(&self) -> impl Iterator<Item = Quadruple> {
        let n = self.0;
        self.triples()
            .flat_map(move |(a, b, c)| (0..n).map(move |d| (a, b, c, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carrier_is_rejected() {
        assert_eq!(Carrier::new(0), Err(FrameError::InvalidCarrier(0)));
    }

    #[test]
    fn cube_is_lexicographic() {
        let carrier = Carrier::new(2).unwrap();
        let triples: Vec<_> = carrier.triples().collect();
        assert_eq!(triples.len(), 8);
        assert_eq!(triples[0], (0, 0, 0));
        assert_eq!(triples[1], (0, 0, 1));
        assert_eq!(triples[7], (1, 1, 1));
        assert_eq!(carrier.quadruples().count(), 16);
        assert_eq!(carrier.quadruples().last(), Some((1, 1, 1, 1)));
    }
}
