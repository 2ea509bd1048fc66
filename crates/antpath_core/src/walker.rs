//! Reference pheromone-following agent.
//!
//! The walker picks one of its four orthogonal neighbours at random,
//! weighted by pheromone level and damped for cells it visited recently.
//! When it reaches a destination it lays a trail over its loop-erased route,
//! inversely scaled by the route's length, reports the route and starts
//! over. Touching the outer ring of the grid, unless that cell is a
//! destination, sends it back to the start.

use crate::cycle::{Agent, CycleWrites};
use crate::field::Field;
use antpath_data::{CellKind, FieldCoordinate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Trail laid on a route of 1000 cells; shorter routes get proportionally more.
pub const SUCCESS_DEPOSIT: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// How many of the most recent route cells count as "recently visited".
    pub memory_length: usize,
    /// Weight multiplier for recently visited neighbours.
    pub revisit_bias: f64,
    pub success_deposit: u32,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            memory_length: 4,
            revisit_bias: 0.25,
            success_deposit: SUCCESS_DEPOSIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PheromoneWalker {
    start: FieldCoordinate,
    position: FieldCoordinate,
    config: WalkerConfig,
    route: Vec<FieldCoordinate>,
    route_cells: HashSet<FieldCoordinate>,
    successes: u64,
    rng: ChaCha8Rng,
}

impl PheromoneWalker {
    #[must_use]
    pub fn new(start: FieldCoordinate, config: WalkerConfig, seed: u64) -> Self {
        Self {
            start,
            position: start,
            config,
            route: Vec::new(),
            route_cells: HashSet::new(),
            successes: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn route(&self) -> &[FieldCoordinate] {
        &self.route
    }

    /// Number of times this walker has reached a destination.
    #[must_use]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    fn reset(&mut self) {
        self.position = self.start;
        self.route.clear();
        self.route_cells.clear();
    }

    /// Trail amount per cell for a route of `len` cells.
    fn trail_amount(&self, len: usize) -> i64 {
        let scale = (1000 / len.max(1)) as f64 * 0.1;
        (f64::from(self.config.success_deposit) * scale) as i64
    }

    /// Appends `at` to the route, or cuts the loop if it was already on it.
    fn remember(&mut self, at: FieldCoordinate) {
        if self.route_cells.contains(&at) {
            if let Some(idx) = self.route.iter().position(|p| *p == at) {
                for erased in self.route.drain(idx + 1..) {
                    self.route_cells.remove(&erased);
                }
            }
        } else {
            self.route.push(at);
            self.route_cells.insert(at);
        }
    }

    fn choose_next(&mut self, field: &Field) -> Option<FieldCoordinate> {
        let recent_from = self.route.len().saturating_sub(self.config.memory_length);
        let recent = &self.route[recent_from..];

        let weighted: Vec<(FieldCoordinate, f64)> = self
            .position
            .neighbours()
            .into_iter()
            .filter_map(|n| field.cell_at(n).map(|cell| (n, cell.pheromone())))
            .map(|(n, level)| {
                let bias = if recent.contains(&n) {
                    self.config.revisit_bias
                } else {
                    1.0
                };
                (n, f64::from(level) * bias)
            })
            .collect();

        let total: f64 = weighted.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return None;
        }
        let mut pick = self.rng.gen::<f64>() * total;
        for (n, weight) in weighted {
            if pick < weight {
                return Some(n);
            }
            pick -= weight;
        }
        None
    }
}

impl Agent for PheromoneWalker {
    fn step(&mut self, field: &Field, writes: &mut CycleWrites) {
        let Some(current) = field.cell_at(self.position) else {
            self.reset();
            return;
        };

        if current.kind() == CellKind::Destination {
            if !self.route.is_empty() {
                let amount = self.trail_amount(self.route.len());
                for &at in &self.route {
                    writes.reinforce(at, amount);
                }
                writes.report_route(self.route.clone());
                self.successes += 1;
            }
            self.reset();
            return;
        }

        if field.is_edge(self.position) && self.position != self.start {
            tracing::debug!(at = %self.position, "Walker hit the edge, restarting");
            self.reset();
            return;
        }

        let here = self.position;
        if let Some(next) = self.choose_next(field) {
            self.position = next;
        }
        self.remember(here);
    }

    fn position(&self) -> FieldCoordinate {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 7x3 corridor: start at (1, 1), destination at (5, 1).
    fn corridor() -> Field {
        let mut field = Field::new(7, 3).unwrap();
        field.set_start_point(FieldCoordinate::new(1, 1)).unwrap();
        for x in 0..7 {
            field.set_kind(x, 0, CellKind::Wall);
            field.set_kind(x, 2, CellKind::Wall);
        }
        field.set_kind(0, 1, CellKind::Wall);
        field.set_kind(6, 1, CellKind::Wall);
        field.set_kind(5, 1, CellKind::Destination);
        field
    }

    #[test]
    fn test_walker_never_enters_walls() {
        let mut field = corridor();
        let mut agents = vec![PheromoneWalker::new(
            field.start_point(),
            WalkerConfig::default(),
            1,
        )];
        for _ in 0..50 {
            field.advance_cycle(&mut agents);
            let at = agents[0].position();
            assert_ne!(field.cell_at(at).unwrap().kind(), CellKind::Wall);
        }
    }

    #[test]
    fn test_walker_reaches_destination_and_lays_trail() {
        let mut field = corridor();
        let mut agents = vec![PheromoneWalker::new(
            field.start_point(),
            WalkerConfig::default(),
            42,
        )];
        for _ in 0..200 {
            field.advance_cycle(&mut agents);
        }
        assert!(agents[0].successes() > 0);
        assert_eq!(field.shortest_route().len(), 4);
        assert!(field.cell(2, 1).unwrap().pheromone() > 1);
    }

    #[test]
    fn test_loop_erasure() {
        let mut walker =
            PheromoneWalker::new(FieldCoordinate::new(1, 1), WalkerConfig::default(), 0);
        for p in [(1, 1), (2, 1), (3, 1), (3, 2), (2, 1)] {
            walker.remember(FieldCoordinate::from(p));
        }
        assert_eq!(
            walker.route(),
            &[FieldCoordinate::new(1, 1), FieldCoordinate::new(2, 1)]
        );
    }

    #[test]
    fn test_trail_amount_scales_with_route_length() {
        let walker = PheromoneWalker::new(FieldCoordinate::new(0, 0), WalkerConfig::default(), 0);
        assert_eq!(walker.trail_amount(10), 10_000);
        assert_eq!(walker.trail_amount(1000), 100);
        assert_eq!(walker.trail_amount(2000), 0);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let run = |seed| {
            let mut field = Field::new(12, 12).unwrap();
            field.set_start_point(FieldCoordinate::new(6, 6)).unwrap();
            let mut agents = vec![PheromoneWalker::new(
                field.start_point(),
                WalkerConfig::default(),
                seed,
            )];
            (0..30)
                .map(|_| {
                    field.advance_cycle(&mut agents);
                    agents[0].position()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }
}
