use macroquad::prelude::*;
use ::rand::Rng;

use crate::brain::Brain;
use crate::config::Config;
use crate::genome::Genome;

/// A bird: body state plus the brain that steers it.
#[derive(Clone, Debug)]
pub struct Animal {
    pub(crate) position: Vec2,
    pub(crate) rotation: f32,
    pub(crate) speed: f32,
    /// Vision energies from the latest step, one per eye cell.
    pub(crate) vision: Vec<f32>,
    pub(crate) brain: Brain,
    /// Food eaten during the current generation.
    pub(crate) satiation: usize,
}

impl Animal {
    pub fn random(config: &Config, rng: &mut impl Rng) -> Self {
        let brain = Brain::random(&Brain::topology(config), rng);
        Self::new(config, brain, rng)
    }

    pub fn from_genome(config: &Config, genome: &Genome, rng: &mut impl Rng) -> Self {
        let brain = Brain::from_genome(&Brain::topology(config), genome);
        Self::new(config, brain, rng)
    }

    fn new(config: &Config, brain: Brain, rng: &mut impl Rng) -> Self {
        Self {
            position: vec2(rng.gen(), rng.gen()),
            rotation: rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI),
            speed: config.sim_speed_max,
            vision: vec![0.0; config.eye_cells],
            brain,
            satiation: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn vision(&self) -> &[f32] {
        &self.vision
    }

    pub fn satiation(&self) -> usize {
        self.satiation
    }

    pub fn genome(&self) -> Genome {
        self.brain.to_genome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_animal_lives_in_unit_square_with_blank_vision() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = Config {
            eye_cells: 5,
            ..Config::default()
        };

        let animal = Animal::random(&config, &mut rng);

        assert!((0.0..1.0).contains(&animal.position().x));
        assert!((0.0..1.0).contains(&animal.position().y));
        assert_eq!(animal.vision(), &[0.0; 5]);
        assert_eq!(animal.satiation(), 0);
    }

    #[test]
    fn from_genome_keeps_the_brain() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let config = Config::default();
        let parent = Animal::random(&config, &mut rng);

        let child = Animal::from_genome(&config, &parent.genome(), &mut rng);

        assert_eq!(child.genome(), parent.genome());
    }
}
