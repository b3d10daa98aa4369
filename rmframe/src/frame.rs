use log::debug;

use crate::{
    algebra, axioms, Carrier, DistinguishedSetDefect, Element, ElementSet, FrameError, Quadruple,
    Relation, RelationDefect, Triple,
};

/// The triples of the relation behind [`Frame::reference`]: with P = {0} over
/// S = {0, 1, 2} it is a frame whose preorder is the identity.
pub const REFERENCE_RELATION: [Triple; 15] = [
    (0, 0, 0),
    (0, 1, 1),
    (0, 2, 2),
    (1, 0, 1),
    (1, 1, 0),
    (1, 1, 1),
    (1, 1, 2),
    (1, 2, 1),
    (1, 2, 2),
    (2, 0, 2),
    (2, 1, 1),
    (2, 1, 2),
    (2, 2, 0),
    (2, 2, 1),
    (2, 2, 2),
];

/// A validated frame ⟨S, P, R⟩.
///
/// There is no way to obtain a `Frame` that violates an axiom: every
/// constructor runs the full check, and "reassigning" a component builds a new
/// frame, leaving `self` untouched when validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    carrier: Carrier,
    distinguished: ElementSet,
    relation: Relation,
}

/// R laid out as a grid: `cells[a][b]` lists every c with Rabc, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTable {
    pub size: usize,
    pub distinguished: Vec<Element>,
    pub cells: Vec<Vec<Vec<Element>>>,
}

impl RelationTable {
    /// `None` when a or b lies outside S.
    pub fn cell(&self, a: Element, b: Element) -> Option<&[Element]> {
        self.cells.get(a)?.get(b).map(Vec::as_slice)
    }
}

fn check_distinguished(distinguished: &ElementSet, carrier: Carrier) -> Result<(), FrameError> {
    if distinguished.is_empty() {
        return Err(DistinguishedSetDefect::Empty.into());
    }
    if let Some(&element) = distinguished.iter().find(|&&x| !carrier.contains(x)) {
        return Err(DistinguishedSetDefect::NotSubset {
            element,
            size: carrier.size(),
        }
        .into());
    }
    Ok(())
}

fn check_relation(
    relation: &Relation,
    distinguished: &ElementSet,
    carrier: Carrier,
) -> Result<(), FrameError> {
    if let Some(&triple) = relation
        .iter()
        .find(|(a, b, c)| !(carrier.contains(*a) && carrier.contains(*b) && carrier.contains(*c)))
    {
        return Err(RelationDefect::OutsideCube {
            triple,
            size: carrier.size(),
        }
        .into());
    }
    if let Some(counterexample) = axioms::first_violation(relation, distinguished, carrier) {
        debug!("Rejecting relation: {}", counterexample);
        return Err(RelationDefect::Violates(counterexample).into());
    }
    Ok(())
}

impl Frame {
    /// Validates ⟨{0, …, n−1}, P, R⟩. Checks S, then P, then R (containment in
    /// S³ followed by the axioms in declaration order of [`axioms::Axiom`]).
    pub fn new(
        relation: impl IntoIterator<Item = Triple>,
        distinguished: impl IntoIterator<Item = Element>,
        n: usize,
    ) -> Result<Self, FrameError> {
        let carrier = Carrier::new(n)?;
        let distinguished: ElementSet = distinguished.into_iter().collect();
        check_distinguished(&distinguished, carrier)?;
        let relation: Relation = relation.into_iter().collect();
        check_relation(&relation, &distinguished, carrier)?;
        Ok(Self {
            carrier,
            distinguished,
            relation,
        })
    }

    pub fn reference() -> Self {
        Self::new(REFERENCE_RELATION, [0], 3).expect("the reference relation is a frame")
    }

    /// P = S and R = S³. Every axiom holds because ≤ relates everything.
    pub fn trivial(n: usize) -> Result<Self, FrameError> {
        let carrier = Carrier::new(n)?;
        Self::new(carrier.triples(), carrier.elements(), n)
    }

    pub fn with_carrier(&self, n: usize) -> Result<Self, FrameError> {
        Self::new(
            self.relation.iter().copied(),
            self.distinguished.iter().copied(),
            n,
        )
    }

    pub fn with_distinguished(
        &self,
        distinguished: impl IntoIterator<Item = Element>,
    ) -> Result<Self, FrameError> {
        Self::new(
            self.relation.iter().copied(),
            distinguished,
            self.carrier.size(),
        )
    }

    pub fn with_relation(
        &self,
        relation: impl IntoIterator<Item = Triple>,
    ) -> Result<Self, FrameError> {
        Self::new(
            relation,
            self.distinguished.iter().copied(),
            self.carrier.size(),
        )
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }
    pub fn size(&self) -> usize {
        self.carrier.size()
    }
    pub fn distinguished(&self) -> &ElementSet {
        &self.distinguished
    }
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    pub fn query(&self, a: Element, b: Element, c: Element) -> bool {
        algebra::holds3(&self.relation, a, b, c)
    }
    pub fn below(&self, a: Element, b: Element) -> bool {
        algebra::below(&self.relation, &self.distinguished, a, b)
    }
    pub fn compose1(&self, a: Element, b: Element, c: Element, d: Element) -> bool {
        algebra::compose1(&self.relation, self.carrier, a, b, c, d)
    }
    pub fn compose2(&self, a: Element, b: Element, c: Element, d: Element) -> bool {
        algebra::compose2(&self.relation, self.carrier, a, b, c, d)
    }

    /// Every (a, b, c, d) in S⁴ with R²abcd, in lexicographic order.
    pub fn compose1_quadruples(&self) -> Vec<Quadruple> {
        self.carrier
            .quadruples()
            .filter(|&(a, b, c, d)| self.compose1(a, b, c, d))
            .collect()
    }

    /// Every (a, b, c, d) in S⁴ with R²a(bc)d, in lexicographic order.
    pub fn compose2_quadruples(&self) -> Vec<Quadruple> {
        self.carrier
            .quadruples()
            .filter(|&(a, b, c, d)| self.compose2(a, b, c, d))
            .collect()
    }

    pub fn table(&self) -> RelationTable {
        let n = self.size();
        let mut cells = vec![vec![Vec::new(); n]; n];
        for &(a, b, c) in self.relation.iter() {
            cells[a][b].push(c);
        }
        RelationTable {
            size: n,
            distinguished: self.distinguished.iter().copied().collect(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::axioms::Axiom;

    fn reference_without(triple: Triple) -> Vec<Triple> {
        REFERENCE_RELATION
            .iter()
            .copied()
            .filter(|&it| it != triple)
            .collect()
    }

    fn violated_axiom(result: Result<Frame, FrameError>) -> Axiom {
        result
            .expect_err("expected validation to fail")
            .counterexample()
            .expect("expected an axiom violation")
            .axiom
    }

    #[test]
    fn reference_frame_is_valid() {
        let frame = Frame::new(REFERENCE_RELATION, [0], 3).unwrap();
        assert_eq!(frame, Frame::reference());
        assert_eq!(frame.size(), 3);
        assert_eq!(frame.relation().len(), 15);
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(frame.below(a, b), a == b);
            }
        }
    }

    #[test]
    fn dropping_000_breaks_reflexivity() {
        let err = Frame::new(reference_without((0, 0, 0)), [0], 3).unwrap_err();
        let counterexample = err.counterexample().unwrap();
        assert_eq!(counterexample.axiom, Axiom::Reflexivity);
        assert_eq!(counterexample.witness, vec![0]);
        assert_eq!(
            err.to_string(),
            "invalid relation: a ≤ a fails for a = 0"
        );
    }

    #[test]
    fn each_axiom_can_fail() {
        let reference = Frame::reference();
        assert_eq!(
            violated_axiom(reference.with_distinguished([1])),
            Axiom::Reflexivity
        );
        assert_eq!(
            violated_axiom(reference.with_distinguished([0, 1])),
            Axiom::Transitivity
        );
        assert_eq!(
            violated_axiom(reference.with_distinguished([0, 1, 2])),
            Axiom::LeftMonotonicity
        );
        assert_eq!(
            violated_axiom(Frame::new([(0, 0, 0), (0, 0, 1), (0, 1, 1), (1, 1, 1)], [0], 2)),
            Axiom::MiddleMonotonicity
        );
        assert_eq!(
            violated_axiom(Frame::new([(0, 0, 0), (0, 0, 1), (0, 1, 1), (1, 0, 0)], [0], 2)),
            Axiom::RightMonotonicity
        );
    }

    #[test]
    fn malformed_inputs() {
        assert_eq!(
            Frame::new(REFERENCE_RELATION, [0], 0),
            Err(FrameError::InvalidCarrier(0))
        );
        assert_eq!(
            Frame::new(REFERENCE_RELATION, [], 3),
            Err(FrameError::InvalidDistinguishedSet(
                DistinguishedSetDefect::Empty
            ))
        );
        assert_eq!(
            Frame::new(REFERENCE_RELATION, [0, 3], 3),
            Err(FrameError::InvalidDistinguishedSet(
                DistinguishedSetDefect::NotSubset {
                    element: 3,
                    size: 3
                }
            ))
        );
        let mut relation = REFERENCE_RELATION.to_vec();
        relation.push((0, 4, 1));
        assert_eq!(
            Frame::new(relation, [0], 3),
            Err(FrameError::InvalidRelation(RelationDefect::OutsideCube {
                triple: (0, 4, 1),
                size: 3
            }))
        );
    }

    #[test]
    fn reassignment_is_transactional() {
        let reference = Frame::reference();
        let shrunk = reference.with_carrier(2);
        assert_eq!(
            shrunk,
            Err(FrameError::InvalidRelation(RelationDefect::OutsideCube {
                triple: (0, 2, 2),
                size: 2
            }))
        );
        assert_eq!(
            reference.with_carrier(1),
            Err(FrameError::InvalidRelation(RelationDefect::OutsideCube {
                triple: (0, 1, 1),
                size: 1
            }))
        );
        assert!(reference.with_relation(reference_without((0, 1, 1))).is_err());
        assert_eq!(reference, Frame::reference());
        let same = reference
            .with_relation(REFERENCE_RELATION)
            .and_then(|it| it.with_carrier(3))
            .unwrap();
        assert_eq!(same, reference);
    }

    #[test]
    fn trivial_frames_are_valid() {
        for n in 1..=4 {
            let frame = Frame::trivial(n).unwrap();
            assert_eq!(frame.relation().len(), n * n * n);
            assert_eq!(frame.distinguished().len(), n);
        }
        assert_eq!(Frame::trivial(0), Err(FrameError::InvalidCarrier(0)));
    }

    #[test]
    fn reference_quadruples() {
        let frame = Frame::reference();
        let r1 = frame.compose1_quadruples();
        let r2 = frame.compose2_quadruples();
        assert_eq!(r1.len(), 61);
        assert_eq!(r2.len(), 61);
        assert_eq!(
            r1[..5].to_vec(),
            vec![(0, 0, 0, 0), (0, 0, 1, 1), (0, 0, 2, 2), (0, 1, 0, 1), (0, 1, 1, 0)]
        );
        assert!(r2.iter().all(|&(a, b, c, d)| frame.compose2(a, b, c, d)));
    }

    #[test]
    fn reference_table() {
        let table = Frame::reference().table();
        assert_eq!(table.cell(1, 1), Some(&[0, 1, 2][..]));
        assert_eq!(table.cell(2, 0), Some(&[2][..]));
        assert_eq!(table.cell(3, 0), None);
        assert_eq!(table.cell(0, 3), None);
        let expected = expect![[r#"
            RelationTable {
                size: 3,
                distinguished: [
                    0,
                ],
                cells: [
                    [
                        [
                            0,
                        ],
                        [
                            1,
                        ],
                        [
                            2,
                        ],
                    ],
                    [
                        [
                            1,
                        ],
                        [
                            0,
                            1,
                            2,
                        ],
                        [
                            1,
                            2,
                        ],
                    ],
                    [
                        [
                            2,
                        ],
                        [
                            1,
                            2,
                        ],
                        [
                            0,
                            1,
                            2,
                        ],
                    ],
                ],
            }
        "#]];
        expected.assert_debug_eq(&table);
    }
}
