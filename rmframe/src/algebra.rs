//! Membership in R and the relations derived from it. Every function here is
//! pure; labels outside the carrier simply fail to be related.

use crate::{Carrier, Element, ElementSet, Relation};

pub fn holds3(relation: &Relation, a: Element, b: Element, c: Element) -> bool {
    relation.contains(&(a, b, c))
}

/// a ≤ b iff Rxab for some x in P.
pub fn below(relation: &Relation, distinguished: &ElementSet, a: Element, b: Element) -> bool {
    distinguished.iter().any(|&x| holds3(relation, x, a, b))
}

/// R²abcd iff Rabx and Rxcd for some x in S.
pub fn compose1(
    relation: &Relation,
    carrier: Carrier,
    a: Element,
    b: Element,
    c: Element,
    d: Element,
) -> bool {
    carrier
        .elements()
        .any(|x| holds3(relation, a, b, x) && holds3(relation, x, c, d))
}

/// R²a(bc)d iff Raxd and Rbcx for some x in S.
pub fn compose2(
    relation: &Relation,
    carrier: Carrier,
    a: Element,
    b: Element,
    c: Element,
    d: Element,
) -> bool {
    carrier
        .elements()
        .any(|x| holds3(relation, a, x, d) && holds3(relation, b, c, x))
}
