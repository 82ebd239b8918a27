// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deterministic assignment of sports to athletes.

use crate::models::SportType;
use crate::services::seed::capability_rng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Sports an athlete practices: 1 to 4 distinct sports, Run always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet(Vec<SportType>);

impl CapabilitySet {
    pub fn as_slice(&self) -> &[SportType] {
        &self.0
    }

    pub fn contains(&self, sport_type: SportType) -> bool {
        self.0.contains(&sport_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a resolved set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uniform pick. The set is never empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> SportType {
        self.0[rng.gen_range(0..self.0.len())]
    }

    /// Uniform pick among sports other than `excluded`, falling back to the
    /// whole set when nothing else is available.
    pub fn pick_other<R: Rng + ?Sized>(&self, rng: &mut R, excluded: SportType) -> SportType {
        let others: Vec<SportType> = self
            .0
            .iter()
            .copied()
            .filter(|s| *s != excluded)
            .collect();
        if others.is_empty() {
            self.pick(rng)
        } else {
            others[rng.gen_range(0..others.len())]
        }
    }
}

impl From<CapabilitySet> for Vec<SportType> {
    fn from(set: CapabilitySet) -> Self {
        set.0
    }
}

/// Resolve the sports for an athlete.
///
/// Draw order: count in `1..=4`, then a partial shuffle of the non-Run
/// sports whose first `count - 1` entries are taken in draw order.
pub fn resolve(athlete_id: &str) -> CapabilitySet {
    let mut rng = capability_rng(athlete_id);
    let count: usize = rng.gen_range(1..=4);

    let mut others: Vec<SportType> = SportType::ALL
        .into_iter()
        .filter(|s| *s != SportType::Run)
        .collect();
    let (sampled, _) = others.partial_shuffle(&mut rng, count - 1);

    let mut sports = Vec::with_capacity(count);
    sports.push(SportType::Run);
    sports.extend_from_slice(sampled);
    CapabilitySet(sports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_is_deterministic() {
        for i in 1..=50 {
            let id = format!("athlete_{:03}", i);
            assert_eq!(resolve(&id), resolve(&id));
        }
    }

    #[test]
    fn test_run_first_and_distinct() {
        for i in 1..=200 {
            let set = resolve(&format!("member-{}", i));
            let sports = set.as_slice();

            assert_eq!(sports[0], SportType::Run);
            assert!((1..=4).contains(&sports.len()));

            let unique: HashSet<_> = sports.iter().collect();
            assert_eq!(unique.len(), sports.len());
        }
    }

    #[test]
    fn test_resolve_covers_every_count() {
        let counts: HashSet<usize> = (0..500)
            .map(|i| resolve(&format!("athlete_{}", i)).len())
            .collect();
        assert_eq!(counts, HashSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn test_empty_identifier_still_resolves() {
        let set = resolve("");
        assert_eq!(set.as_slice()[0], SportType::Run);
    }

    #[test]
    fn test_pick_other_falls_back_for_run_only() {
        let set = CapabilitySet(vec![SportType::Run]);
        let mut rng = capability_rng("anyone");
        assert_eq!(set.pick_other(&mut rng, SportType::Run), SportType::Run);
    }

    #[test]
    fn test_pick_other_excludes_primary() {
        let set = CapabilitySet(vec![SportType::Run, SportType::Swim]);
        let mut rng = capability_rng("anyone");
        for _ in 0..20 {
            assert_eq!(set.pick_other(&mut rng, SportType::Run), SportType::Swim);
        }
    }
}
