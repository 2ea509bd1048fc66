mod common;

use antpath_core::field::Field;
use antpath_core::walker::{PheromoneWalker, WalkerConfig};
use antpath_core::{Agent, CellKind, FieldCoordinate, PASSABLE_FLOOR};
use antpath_lib::{SimConfig, Simulation};
use common::{scan_file, FieldBuilder};

fn seeded(cycles: u64, seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.run.cycles = cycles;
    config.agents.seed = Some(seed);
    config
}

/// A walled 9x5 room with the start on the left and the destination on
/// the right.
fn room() -> Field {
    FieldBuilder::new(9, 5)
        .walled()
        .with_start(1, 2)
        .with_destination(7, 2)
        .build()
}

#[test]
fn test_colony_finds_a_route() {
    let mut config = seeded(2_000, 11);
    config.agents.max_agents = 20;
    let mut sim = Simulation::new(room(), config).unwrap();
    let summary = sim.run();

    assert!(summary.successes > 0, "no agent reached the destination");
    // Manhattan distance from (1, 2) to (7, 2) is 6, so no route can be shorter.
    assert!(summary.route_length >= 6);
    assert!(summary.route_length < 60);
    for at in sim.field().shortest_route() {
        assert_ne!(sim.field().cell_at(*at).unwrap().kind(), CellKind::Wall);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = || {
        let mut config = seeded(300, 99);
        config.agents.max_agents = 8;
        config.agents.spawn_interval = 20;
        let mut sim = Simulation::new(room(), config).unwrap();
        sim.run();
        (
            sim.field().cells().to_vec(),
            sim.field().shortest_route().to_vec(),
            sim.agent_positions(),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn test_zero_agents_only_decay() {
    let mut field = Field::new(4, 4).unwrap();
    field.reinforce(2, 2, 3);
    let mut agents: Vec<PheromoneWalker> = Vec::new();
    for _ in 0..5 {
        field.advance_cycle(&mut agents);
    }
    assert_eq!(field.cycle(), 5);
    assert_eq!(field.cell(2, 2).unwrap().pheromone(), PASSABLE_FLOOR);
}

#[test]
fn test_walker_respects_walls_in_open_room() {
    let mut field = room();
    let mut agents: Vec<PheromoneWalker> = (0..10)
        .map(|seed| PheromoneWalker::new(field.start_point(), WalkerConfig::default(), seed))
        .collect();
    for _ in 0..200 {
        field.advance_cycle(&mut agents);
        for agent in &agents {
            let kind = field.cell_at(agent.position()).map(|c| c.kind());
            assert_ne!(kind, Some(CellKind::Wall));
        }
    }
}

#[test]
fn test_end_to_end_from_scan_file() {
    // A 10 unit extent on both axes keeps one unit per cell.
    let file = scan_file(&[
        "2,2,0,8,end,1.5707963267948966,8,boundary",
        "2,4,3.141592653589793,1,boundary",
    ]);
    let field = antpath_io::load_field(file.path(), 10, 10, ",").unwrap();
    assert_eq!(field.start_point(), FieldCoordinate::new(2, 2));
    assert_eq!(field.cell(2, 9).unwrap().kind(), CellKind::Destination);
    assert_eq!(field.cell(2, 3).unwrap().kind(), CellKind::Wall);

    let mut config = seeded(500, 5);
    config.agents.max_agents = 10;
    let mut sim = Simulation::new(field, config).unwrap();
    let summary = sim.run();
    assert_eq!(summary.cycles, 500);
    assert_eq!(sim.render().lines().count(), 10);
}
