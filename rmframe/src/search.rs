//! Brute-force search for frames over a carrier of size n.
//!
//! Candidate relations are drawn from the subsets of S³, and for each
//! candidate relation a fresh enumeration of the subsets of S supplies the
//! candidate distinguished sets. Each (R, P) pair is one attempt; attempts
//! that fail validation are discarded.

use log::{debug, info, trace};
use rand::Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    subsets::{subsets, Subsets},
    Carrier, Element, Frame, FrameError, Triple,
};

const PARALLEL_BATCH_SIZE: usize = 4096;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub n: usize,
    /// The attempt budget the search ran under, if any.
    pub tries: Option<usize>,
    /// Number of (R, P) pairs that were validated.
    pub attempts: usize,
    pub frames: Vec<Frame>,
}

impl SearchOutcome {
    pub fn count(&self) -> usize {
        self.frames.len()
    }
    fn log_summary(&self) {
        match self.tries {
            Some(tries) => info!(
                "There are {} frames for n = {} for the first {} tries.",
                self.count(),
                self.n,
                tries
            ),
            None => info!("There are {} frames for n = {}.", self.count(), self.n),
        }
    }
}

type Candidate = (Vec<Triple>, Vec<Element>);

struct Candidates<'a, R: Rng + ?Sized> {
    carrier: Carrier,
    relations: Subsets<Triple>,
    current: Option<(Vec<Triple>, Subsets<Element>)>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Candidates<'a, R> {
    fn new(carrier: Carrier, rng: &'a mut R) -> Self {
        let relations = subsets(carrier.triples().collect(), rng);
        Self {
            carrier,
            relations,
            current: None,
            rng,
        }
    }
}

impl<'a, R: Rng + ?Sized> Iterator for Candidates<'a, R> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((relation, distinguished_sets)) = self.current.as_mut() {
                if let Some(distinguished) = distinguished_sets.next() {
                    return Some((relation.clone(), distinguished));
                }
            }
            let relation = self.relations.next()?;
            let distinguished_sets = subsets(self.carrier.elements().collect(), self.rng);
            self.current = Some((relation, distinguished_sets));
        }
    }
}

fn attempt(n: usize, (relation, distinguished): Candidate) -> Option<Frame> {
    match Frame::new(relation, distinguished, n) {
        Ok(frame) => {
            debug!(
                "Found frame with P = {:?} and |R| = {}",
                frame.distinguished(),
                frame.relation().len()
            );
            Some(frame)
        }
        Err(err) => {
            trace!("Discarding candidate: {}", err);
            None
        }
    }
}

/// Validates candidates one at a time until the enumeration is exhausted or
/// `tries` attempts have been made.
pub fn search_frames<R: Rng + ?Sized>(
    n: usize,
    tries: Option<usize>,
    rng: &mut R,
) -> Result<SearchOutcome, FrameError> {
    let carrier = Carrier::new(n)?;
    let mut attempts = 0;
    let mut frames = Vec::new();
    for candidate in Candidates::new(carrier, rng).take(tries.unwrap_or(usize::MAX)) {
        attempts += 1;
        frames.extend(attempt(n, candidate));
    }
    let outcome = SearchOutcome {
        n,
        tries,
        attempts,
        frames,
    };
    outcome.log_summary();
    Ok(outcome)
}

/// Same candidates, budget and result as [`search_frames`] given the same
/// random source, but each batch of candidates is validated on the rayon pool.
pub fn par_search_frames<R: Rng + ?Sized>(
    n: usize,
    tries: Option<usize>,
    rng: &mut R,
) -> Result<SearchOutcome, FrameError> {
    let carrier = Carrier::new(n)?;
    let mut candidates = Candidates::new(carrier, rng).take(tries.unwrap_or(usize::MAX));
    let mut attempts = 0;
    let mut frames = Vec::new();
    loop {
        let batch: Vec<Candidate> = candidates.by_ref().take(PARALLEL_BATCH_SIZE).collect();
        if batch.is_empty() {
            break;
        }
        attempts += batch.len();
        let found: Vec<Frame> = batch
            .into_par_iter()
            .filter_map(|candidate| attempt(n, candidate))
            .collect();
        frames.extend(found);
    }
    let outcome = SearchOutcome {
        n,
        tries,
        attempts,
        frames,
    };
    outcome.log_summary();
    Ok(outcome)
}
