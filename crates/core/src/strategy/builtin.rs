//! The built-in ordering strategies.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::OrderingStrategy;
use crate::ticket::Ticket;

/// First in, first out: submission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoStrategy;

impl OrderingStrategy for FifoStrategy {
    fn name(&self) -> &str {
        "fifo"
    }

    fn reorder(&self, tickets: &[Ticket], _rng: &mut dyn RngCore) -> Vec<Ticket> {
        tickets.to_vec()
    }
}

/// First in, last out: newest ticket first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiloStrategy;

impl OrderingStrategy for FiloStrategy {
    fn name(&self) -> &str {
        "filo"
    }

    fn reorder(&self, tickets: &[Ticket], _rng: &mut dyn RngCore) -> Vec<Ticket> {
        tickets.iter().rev().cloned().collect()
    }
}

/// Uniformly random permutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl OrderingStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn reorder(&self, tickets: &[Ticket], rng: &mut dyn RngCore) -> Vec<Ticket> {
        let mut ordered = tickets.to_vec();
        ordered.shuffle(rng);
        ordered
    }
}

/// Discards every ticket.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackHoleStrategy;

impl OrderingStrategy for BlackHoleStrategy {
    fn name(&self) -> &str {
        "black_hole"
    }

    fn reorder(&self, _tickets: &[Ticket], _rng: &mut dyn RngCore) -> Vec<Ticket> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn customers(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.customer()).collect()
    }

    fn all_strategies() -> Vec<Box<dyn OrderingStrategy>> {
        vec![
            Box::new(FifoStrategy),
            Box::new(FiloStrategy),
            Box::new(RandomStrategy),
            Box::new(BlackHoleStrategy),
        ]
    }

    #[test]
    fn test_fifo_keeps_order() {
        let tickets = fixtures::tickets(&["A", "B", "C"]);
        let ordered = FifoStrategy.reorder(&tickets, &mut StdRng::seed_from_u64(0));
        assert_eq!(ordered, tickets);
        assert_eq!(customers(&ordered), vec!["A", "B", "C"]);
        assert_ne!(ordered.as_ptr(), tickets.as_ptr());
    }

    #[test]
    fn test_filo_reverses_order() {
        let tickets = fixtures::tickets(&["A", "B", "C"]);
        let ordered = FiloStrategy.reorder(&tickets, &mut StdRng::seed_from_u64(0));
        assert_eq!(customers(&ordered), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_filo_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let tickets = fixtures::tickets(&["A", "B", "C", "D"]);
        let once = FiloStrategy.reorder(&tickets, &mut rng);
        let twice = FiloStrategy.reorder(&once, &mut rng);
        assert_eq!(twice, tickets);
    }

    #[test]
    fn test_black_hole_discards_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [0, 1, 5, 50] {
            let names: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let tickets = fixtures::tickets(&refs);
            assert!(BlackHoleStrategy.reorder(&tickets, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let tickets = fixtures::tickets(&["A", "B", "C", "D", "E"]);
        for _ in 0..20 {
            let ordered = RandomStrategy.reorder(&tickets, &mut rng);
            assert_eq!(ordered.len(), tickets.len());
            let mut got = customers(&ordered);
            got.sort_unstable();
            assert_eq!(got, vec!["A", "B", "C", "D", "E"]);
        }
    }

    #[test]
    fn test_random_produces_multiple_orderings() {
        let mut rng = StdRng::seed_from_u64(12);
        let tickets = fixtures::tickets(&["A", "B", "C"]);
        let orderings: HashSet<Vec<String>> = (0..100)
            .map(|_| {
                RandomStrategy
                    .reorder(&tickets, &mut rng)
                    .iter()
                    .map(|t| t.customer().to_string())
                    .collect()
            })
            .collect();
        assert!(orderings.len() > 1);
    }

    #[test]
    fn test_random_same_seed_same_order() {
        let tickets = fixtures::tickets(&["A", "B", "C", "D", "E", "F"]);
        let a = RandomStrategy.reorder(&tickets, &mut StdRng::seed_from_u64(5));
        let b = RandomStrategy.reorder(&tickets, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_is_not_modified() {
        let mut rng = StdRng::seed_from_u64(0);
        let tickets = fixtures::tickets(&["A", "B", "C"]);
        let before = tickets.clone();
        for strategy in all_strategies() {
            strategy.reorder(&tickets, &mut rng);
            assert_eq!(tickets, before, "{} modified its input", strategy.name());
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let mut rng = StdRng::seed_from_u64(0);
        for strategy in all_strategies() {
            assert!(strategy.reorder(&[], &mut rng).is_empty());
        }
    }
}
