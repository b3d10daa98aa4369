use log::info;
use rand::Rng;

use crate::{subsets::subsets, ElementSet, Frame};

/// Every a in S lying below some element of `subset`.
pub fn closure(frame: &Frame, subset: &ElementSet) -> ElementSet {
    frame
        .carrier()
        .elements()
        .filter(|&a| subset.iter().any(|&x| frame.below(a, x)))
        .collect()
}

pub fn is_closed(frame: &Frame, subset: &ElementSet) -> bool {
    closure(frame, subset) == *subset
}

/// All subsets of S equal to their own closure, in the order the subset
/// enumeration produced them.
pub fn closed_subsets<R: Rng + ?Sized>(frame: &Frame, rng: &mut R) -> Vec<ElementSet> {
    let closed: Vec<ElementSet> = subsets(frame.carrier().elements().collect(), rng)
        .map(|subset| subset.into_iter().collect::<ElementSet>())
        .filter(|subset| is_closed(frame, subset))
        .collect();
    info!("There are {} closed subsets of S", closed.len());
    closed
}
