use thiserror::Error;

use crate::{axioms::Counterexample, Element, Triple};

/// Why a candidate ⟨S, P, R⟩ is not a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("S must be non-empty, but n = {0}")]
    InvalidCarrier(usize),
    #[error("invalid distinguished set: {0}")]
    InvalidDistinguishedSet(DistinguishedSetDefect),
    #[error("invalid relation: {0}")]
    InvalidRelation(RelationDefect),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistinguishedSetDefect {
    #[error("P must be non-empty")]
    Empty,
    #[error("P must be a subset of S, but {element} is not in S (n = {size})")]
    NotSubset { element: Element, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationDefect {
    #[error("R must be a subset of S³, but contains {triple:?} (n = {size})")]
    OutsideCube { triple: Triple, size: usize },
    #[error("{0}")]
    Violates(Counterexample),
}

// Defects are rendered inline, not as sources.
impl From<DistinguishedSetDefect> for FrameError {
    fn from(defect: DistinguishedSetDefect) -> Self {
        FrameError::InvalidDistinguishedSet(defect)
    }
}

impl From<RelationDefect> for FrameError {
    fn from(defect: RelationDefect) -> Self {
        FrameError::InvalidRelation(defect)
    }
}

impl FrameError {
    pub fn counterexample(&self) -> Option<&Counterexample> {
        match self {
            FrameError::InvalidRelation(RelationDefect::Violates(counterexample)) => {
                Some(counterexample)
            }
            _ => None,
        }
    }
}
