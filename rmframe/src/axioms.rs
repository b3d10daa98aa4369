use std::fmt::{Display, Formatter};

use enum_iterator::{all, Sequence};

use crate::{algebra, Carrier, Element, ElementSet, Relation};

/// The closure conditions every frame must satisfy, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Axiom {
    Reflexivity,
    Transitivity,
    LeftMonotonicity,
    MiddleMonotonicity,
    RightMonotonicity,
}

/// Elements witnessing that `axiom` fails, listed in the order of
/// [`Axiom::variables`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Counterexample {
    pub axiom: Axiom,
    pub witness: Vec<Element>,
}

impl Axiom {
    pub fn variables(&self) -> &'static [&'static str] {
        match self {
            Axiom::Reflexivity => &["a"],
            Axiom::Transitivity => &["a", "b", "c"],
            Axiom::LeftMonotonicity => &["a′", "a", "b", "c"],
            Axiom::MiddleMonotonicity => &["a", "b′", "b", "c"],
            Axiom::RightMonotonicity => &["a", "b", "c", "c′"],
        }
    }

    /// Exhaustively searches S for the first tuple falsifying this axiom.
    pub fn counterexample(
        &self,
        relation: &Relation,
        distinguished: &ElementSet,
        carrier: Carrier,
    ) -> Option<Counterexample> {
        let below = |a, b| algebra::below(relation, distinguished, a, b);
        let holds = |a, b, c| algebra::holds3(relation, a, b, c);
        let witness = match self {
            Axiom::Reflexivity => carrier.elements().find(|&a| !below(a, a)).map(|a| vec![a]),
            Axiom::Transitivity => carrier
                .triples()
                .find(|&(a, b, c)| below(a, b) && below(b, c) && !below(a, c))
                .map(|(a, b, c)| vec![a, b, c]),
            Axiom::LeftMonotonicity => carrier
                .quadruples()
                .find(|&(a1, a, b, c)| below(a1, a) && holds(a, b, c) && !holds(a1, b, c))
                .map(|(a1, a, b, c)| vec![a1, a, b, c]),
            Axiom::MiddleMonotonicity => carrier
                .quadruples()
                .find(|&(a, b1, b, c)| below(b1, b) && holds(a, b, c) && !holds(a, b1, c))
                .map(|(a, b1, b, c)| vec![a, b1, b, c]),
            Axiom::RightMonotonicity => carrier
                .quadruples()
                .find(|&(a, b, c, c1)| below(c, c1) && holds(a, b, c) && !holds(a, b, c1))
                .map(|(a, b, c, c1)| vec![a, b, c, c1]),
        };
        witness.map(|witness| Counterexample {
            axiom: *self,
            witness,
        })
    }
}

/// The first counterexample to the first failing axiom, if any.
pub fn first_violation(
    relation: &Relation,
    distinguished: &ElementSet,
    carrier: Carrier,
) -> Option<Counterexample> {
    all::<Axiom>().find_map(|axiom| axiom.counterexample(relation, distinguished, carrier))
}

/// One counterexample for every failing axiom.
pub fn violations(
    relation: &Relation,
    distinguished: &ElementSet,
    carrier: Carrier,
) -> Vec<Counterexample> {
    all::<Axiom>()
        .filter_map(|axiom| axiom.counterexample(relation, distinguished, carrier))
        .collect()
}

impl Display for Axiom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axiom::Reflexivity => write!(f, "a ≤ a"),
            Axiom::Transitivity => write!(f, "a ≤ b ∧ b ≤ c ⇒ a ≤ c"),
            Axiom::LeftMonotonicity => write!(f, "a′ ≤ a ∧ Rabc ⇒ Ra′bc"),
            Axiom::MiddleMonotonicity => write!(f, "b′ ≤ b ∧ Rabc ⇒ Rab′c"),
            Axiom::RightMonotonicity => write!(f, "c ≤ c′ ∧ Rabc ⇒ Rabc′"),
        }
    }
}

impl Display for Counterexample {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fails for ", self.axiom)?;
        for (idx, (name, element)) in self
            .axiom
            .variables()
            .iter()
            .zip(self.witness.iter())
            .enumerate()
        {
            if idx != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, element)?;
        }
        Ok(())
    }
}
