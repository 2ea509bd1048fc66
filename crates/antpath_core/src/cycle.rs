//! The per-cycle update.
//!
//! A cycle is one agent pass followed by one decay pass. Every agent decides
//! against the same read-only view of the field and records its writes in
//! its own [`CycleWrites`] buffer. Buffers are committed in agent order once
//! all agents have decided, then pheromone evaporates exactly once.

use crate::field::Field;
use antpath_data::FieldCoordinate;
use rayon::prelude::*;

/// A request to change the pheromone level of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PheromoneDeposit {
    pub at: FieldCoordinate,
    pub amount: i64,
}

/// Writes an agent makes during one cycle, applied after the agent pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleWrites {
    pub deposits: Vec<PheromoneDeposit>,
    pub routes: Vec<Vec<FieldCoordinate>>,
}

impl CycleWrites {
    pub fn reinforce(&mut self, at: FieldCoordinate, amount: i64) {
        self.deposits.push(PheromoneDeposit { at, amount });
    }

    /// Reports a complete start-to-destination route.
    pub fn report_route(&mut self, route: Vec<FieldCoordinate>) {
        self.routes.push(route);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty() && self.routes.is_empty()
    }
}

/// A movement strategy driven by the field.
///
/// `step` sees the field as it stood at the start of the cycle; anything it
/// wants to change goes through `writes`.
pub trait Agent: Send {
    fn step(&mut self, field: &Field, writes: &mut CycleWrites);

    /// Current cell, used for rendering and snapshots.
    fn position(&self) -> FieldCoordinate;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn step(&mut self, field: &Field, writes: &mut CycleWrites) {
        (**self).step(field, writes);
    }

    fn position(&self) -> FieldCoordinate {
        (**self).position()
    }
}

impl Field {
    /// Runs one full cycle: every agent steps, their writes are committed,
    /// then eligible cells decay once.
    pub fn advance_cycle<A: Agent>(&mut self, agents: &mut [A]) {
        let snapshot: &Field = self;
        let writes: Vec<CycleWrites> = agents
            .par_iter_mut()
            .map(|agent| {
                let mut writes = CycleWrites::default();
                agent.step(snapshot, &mut writes);
                writes
            })
            .collect();

        for batch in writes {
            self.commit(batch);
        }
        self.decay();
        self.finish_cycle();
    }

    /// Applies one agent's buffered writes.
    pub fn commit(&mut self, writes: CycleWrites) {
        for deposit in writes.deposits {
            if !self.reinforce(deposit.at.x, deposit.at.y, deposit.amount) {
                tracing::debug!(at = %deposit.at, "Dropping deposit outside the grid");
            }
        }
        for route in writes.routes {
            self.record_route(&route);
        }
    }

    /// One evaporation pass over every cell. Destinations never decay and no
    /// cell drops below the passable floor.
    pub fn decay(&mut self) {
        let step = self.decay_step();
        self.cells_mut()
            .par_iter_mut()
            .for_each(|cell| cell.decay(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{MAX_PHEROMONE, PASSABLE_FLOOR};
    use antpath_data::CellKind;

    /// Deposits on its own cell and records the level it saw.
    struct Marker {
        at: FieldCoordinate,
        seen: Vec<u32>,
    }

    impl Agent for Marker {
        fn step(&mut self, field: &Field, writes: &mut CycleWrites) {
            self.seen.push(field.cell_at(self.at).map_or(0, |c| c.pheromone()));
            writes.reinforce(self.at, 10);
        }

        fn position(&self) -> FieldCoordinate {
            self.at
        }
    }

    #[test]
    fn test_zero_agents_still_decays() {
        let mut field = Field::new(3, 3).unwrap();
        field.reinforce(1, 1, 9);
        field.advance_cycle::<Marker>(&mut []);
        assert_eq!(field.cell(1, 1).unwrap().pheromone(), 9);
        assert_eq!(field.cycle(), 1);
    }

    #[test]
    fn test_agents_share_pre_decay_snapshot() {
        let mut field = Field::new(3, 3).unwrap();
        let at = FieldCoordinate::new(1, 1);
        let mut agents = vec![
            Marker { at, seen: vec![] },
            Marker { at, seen: vec![] },
        ];
        field.advance_cycle(&mut agents);
        // Both saw the untouched floor, both deposits landed, then one decay.
        assert_eq!(agents[0].seen, vec![PASSABLE_FLOOR]);
        assert_eq!(agents[1].seen, vec![PASSABLE_FLOOR]);
        assert_eq!(field.cell_at(at).unwrap().pheromone(), PASSABLE_FLOOR + 20 - 1);
    }

    #[test]
    fn test_decay_skips_destinations_and_walls() {
        let mut field = Field::new(3, 1).unwrap().with_decay_step(5);
        field.set_kind(0, 0, CellKind::Destination);
        field.set_kind(1, 0, CellKind::Wall);
        field.reinforce(2, 0, 3);
        for _ in 0..10 {
            field.decay();
        }
        assert_eq!(field.cell(0, 0).unwrap().pheromone(), MAX_PHEROMONE);
        assert_eq!(field.cell(1, 0).unwrap().pheromone(), 0);
        assert_eq!(field.cell(2, 0).unwrap().pheromone(), PASSABLE_FLOOR);
    }

    #[test]
    fn test_commit_records_routes() {
        let mut field = Field::new(3, 3).unwrap();
        let mut writes = CycleWrites::default();
        writes.report_route(vec![FieldCoordinate::new(0, 0), FieldCoordinate::new(0, 1)]);
        writes.reinforce(FieldCoordinate::new(9, 9), 5);
        field.commit(writes);
        assert_eq!(field.shortest_route().len(), 2);
    }

    #[test]
    fn test_boxed_agents() {
        let mut field = Field::new(3, 3).unwrap();
        let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(Marker {
            at: FieldCoordinate::new(2, 2),
            seen: vec![],
        })];
        field.advance_cycle(&mut agents);
        assert_eq!(field.cell(2, 2).unwrap().pheromone(), PASSABLE_FLOOR + 10 - 1);
        assert_eq!(agents[0].position(), FieldCoordinate::new(2, 2));
    }
}
