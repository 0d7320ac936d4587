use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::entity::Animal;
use crate::error::EngineError;
use crate::physics;
use crate::reproduction::{self, Candidate};
use crate::sensory::Eye;
use crate::stats::Statistics;
use crate::world::{Food, World};

/// One running simulation. Owns its world for its whole lifetime; a reset
/// builds a new one instead of mutating this.
pub struct Simulation {
    config: Config,
    eye: Eye,
    world: World,
    rng: ChaCha8Rng,
    /// Steps taken within the current generation.
    age: usize,
    generation: usize,
}

impl Simulation {
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Build a simulation seeded from OS entropy.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        Self::from_rng(config, ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, EngineError> {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(config: Config, mut rng: ChaCha8Rng) -> Result<Self, EngineError> {
        config.validate()?;

        let world = World::random(&config, &mut rng);
        Ok(Self {
            eye: Eye::from_config(&config),
            config,
            world,
            rng,
            age: 0,
            generation: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn age(&self) -> usize {
        self.age
    }

    /// Advance one tick. Returns the finished generation's statistics when
    /// this tick crosses a generation boundary.
    pub fn step(&mut self) -> Option<Statistics> {
        physics::consume_food(&mut self.world, &self.config, &mut self.rng);
        physics::apply_brains(&mut self.world, &self.eye, &self.config);
        physics::integrate(&mut self.world);

        self.age += 1;
        if self.age >= self.config.sim_generation_length {
            Some(self.evolve())
        } else {
            None
        }
    }

    /// Fast-forward to the end of the current generation.
    pub fn train(&mut self) -> Statistics {
        loop {
            if let Some(stats) = self.step() {
                return stats;
            }
        }
    }

    fn evolve(&mut self) -> Statistics {
        self.age = 0;

        let population: Vec<Candidate> = self
            .world
            .animals
            .iter()
            .map(|animal| Candidate {
                genome: animal.genome(),
                fitness: animal.satiation() as f32,
            })
            .collect();

        let (children, fitness) = reproduction::evolve(
            &population,
            self.config.ga_mut_chance,
            self.config.ga_mut_coeff,
            &mut self.rng,
        );

        self.world.animals = children
            .iter()
            .map(|genome| Animal::from_genome(&self.config, genome, &mut self.rng))
            .collect();
        for food in &mut self.world.foods {
            *food = Food::random(&mut self.rng);
        }

        let stats = Statistics {
            generation: self.generation,
            fitness,
        };
        self.generation += 1;
        log::debug!("generation {} finished: {:?}", stats.generation, stats.fitness);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        Config {
            world_animals: 6,
            world_foods: 10,
            sim_generation_length: 5,
            ..Config::default()
        }
    }

    #[test]
    fn step_reports_exactly_at_generation_boundary() {
        let mut sim = Simulation::with_seed(small_config(), 1).unwrap();

        for _ in 0..4 {
            assert!(sim.step().is_none());
        }
        let stats = sim.step().expect("fifth step ends the generation");

        assert_eq!(stats.generation, 0);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.age(), 0);
    }

    #[test]
    fn train_runs_a_whole_generation() {
        let mut sim = Simulation::with_seed(small_config(), 2).unwrap();
        sim.step();

        let stats = sim.train();

        assert_eq!(stats.generation, 0);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.world().animals().len(), 6);
        assert_eq!(sim.world().foods().len(), 10);
    }

    #[test]
    fn vision_length_tracks_eye_cells() {
        let config = Config {
            eye_cells: 3,
            ..small_config()
        };
        let mut sim = Simulation::with_seed(config, 3).unwrap();
        sim.step();

        for animal in sim.world().animals() {
            assert_eq!(animal.vision().len(), 3);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            world_animals: 0,
            ..Config::default()
        };
        assert!(matches!(
            Simulation::with_seed(config, 0),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn same_seed_gives_same_world() {
        let a = Simulation::with_seed(small_config(), 77).unwrap();
        let b = Simulation::with_seed(small_config(), 77).unwrap();

        let pa: Vec<_> = a.world().animals().iter().map(|x| x.position()).collect();
        let pb: Vec<_> = b.world().animals().iter().map(|x| x.position()).collect();
        assert_eq!(pa, pb);
    }
}
