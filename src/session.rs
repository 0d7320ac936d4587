use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::error::EngineError;
use crate::simulation::Simulation;

/// Process-wide state shared by the console commands and the frame loop:
/// the current simulation and whether it is advancing.
///
/// Created once at startup. `reset` swaps the simulation wholesale; the run
/// flag survives resets and only `pause` flips it.
pub struct Session {
    simulation: Simulation,
    running: bool,
    /// When set, every simulation's seed is drawn from here so whole runs
    /// reproduce.
    seeds: Option<ChaCha8Rng>,
}

impl Session {
    pub fn new(seed: Option<u64>) -> Result<Self, EngineError> {
        let mut seeds = seed.map(ChaCha8Rng::seed_from_u64);
        let simulation = build(Simulation::default_config(), seeds.as_mut())?;
        Ok(Self {
            simulation,
            running: true,
            seeds,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flip between running and paused; returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Build a simulation from `config` and make it current. On failure the
    /// previous simulation stays in place.
    pub fn reset(&mut self, config: Config) -> Result<(), EngineError> {
        self.simulation = build(config, self.seeds.as_mut())?;
        Ok(())
    }
}

fn build(config: Config, seeds: Option<&mut ChaCha8Rng>) -> Result<Simulation, EngineError> {
    match seeds {
        Some(seeds) => Simulation::with_seed(config, seeds.gen()),
        None => Simulation::new(config),
    }
}
