//! Simulation driver.
//!
//! Owns the field and a growing population of [`PheromoneWalker`]s, runs the
//! configured number of cycles and samples progress along the way.

use antpath_core::config::SimConfig;
use antpath_core::field::Field;
use antpath_core::walker::PheromoneWalker;
use antpath_core::{Agent, Metrics};
use antpath_data::{FieldCoordinate, Snapshot, SnapshotCollection};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub cycles: u64,
    pub agents: usize,
    /// Length of the shortest route found, 0 when no agent succeeded.
    pub route_length: usize,
    /// Destinations reached across all agents.
    pub successes: u64,
    pub elapsed: Duration,
}

pub struct Simulation {
    field: Field,
    agents: Vec<PheromoneWalker>,
    config: SimConfig,
    seeder: ChaCha8Rng,
    snapshots: SnapshotCollection,
    metrics: Metrics,
}

impl Simulation {
    /// Prepares a run over `field`, spawning the starting agents.
    ///
    /// The config is validated first. With `agents.seed` set the whole run
    /// is reproducible.
    pub fn new(field: Field, config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seeder = match config.agents.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let field = field.with_decay_step(config.pheromone.decay_step);
        let mut sim = Self {
            field,
            agents: Vec::with_capacity(config.agents.max_agents),
            config,
            seeder,
            snapshots: SnapshotCollection::default(),
            metrics: Metrics::new(),
        };
        for _ in 0..sim.config.agents.starting_agents {
            sim.spawn();
        }
        Ok(sim)
    }

    fn spawn(&mut self) -> bool {
        if self.agents.len() >= self.config.agents.max_agents {
            return false;
        }
        let seed = self.seeder.gen::<u64>();
        self.agents.push(PheromoneWalker::new(
            self.field.start_point(),
            self.config.walker(),
            seed,
        ));
        self.metrics.increment_counter("agents_spawned");
        true
    }

    /// Runs one cycle, then grows the population and samples progress
    /// when their intervals come due.
    pub fn step(&mut self) {
        let started = Instant::now();
        let best_before = self.field.shortest_route().len();

        self.field.advance_cycle(&mut self.agents);

        let best = self.field.shortest_route().len();
        if best != best_before {
            self.metrics.increment_counter("route_improvements");
        }
        self.metrics
            .record_cycle(started.elapsed(), self.agents.len(), best);

        let done = self.field.cycle();
        if done % self.config.agents.spawn_interval == 0 && self.spawn() {
            tracing::debug!(cycle = done, agents = self.agents.len(), "Agent joined");
        }
        if let Some(interval) = self.config.run.snapshot_interval {
            if (done - 1) % interval == 0 {
                self.snapshots.push(Snapshot {
                    cycle: done,
                    route_length: best,
                    agent_count: self.agents.len(),
                });
            }
        }
    }

    /// Runs every configured cycle.
    pub fn run(&mut self) -> RunSummary {
        tracing::info!(
            cycles = self.config.run.cycles,
            width = self.field.width(),
            height = self.field.height(),
            start = %self.field.start_point(),
            "Starting simulation"
        );
        for _ in 0..self.config.run.cycles {
            self.step();
        }
        let summary = self.summary();
        tracing::info!(
            cycles = summary.cycles,
            agents = summary.agents,
            route_length = summary.route_length,
            successes = summary.successes,
            mean_cycle_us = self.metrics.mean_cycle_time().as_micros() as u64,
            "Simulation finished"
        );
        summary
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            cycles: self.field.cycle(),
            agents: self.agents.len(),
            route_length: self.field.shortest_route().len(),
            successes: self.agents.iter().map(PheromoneWalker::successes).sum(),
            elapsed: self.metrics.elapsed(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn agents(&self) -> &[PheromoneWalker] {
        &self.agents
    }

    pub fn agent_positions(&self) -> Vec<FieldCoordinate> {
        self.agents.iter().map(Agent::position).collect()
    }

    #[must_use]
    pub fn snapshots(&self) -> &SnapshotCollection {
        &self.snapshots
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// ASCII map of the field with the current agent positions.
    #[must_use]
    pub fn render(&self) -> String {
        self.field.render_ascii(&self.agent_positions())
    }
}
