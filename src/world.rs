use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::Config;
use crate::entity::Animal;

#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    pub position: Vec2,
}

impl Food {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            position: vec2(rng.gen(), rng.gen()),
        }
    }
}

/// Everything living in the unit square. The square is toroidal.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) animals: Vec<Animal>,
    pub(crate) foods: Vec<Food>,
}

impl World {
    pub fn random(config: &Config, rng: &mut impl Rng) -> Self {
        let animals = (0..config.world_animals)
            .map(|_| Animal::random(config, rng))
            .collect();
        let foods = (0..config.world_foods).map(|_| Food::random(rng)).collect();

        Self { animals, foods }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
}

/// Wrap a position back into the unit square.
pub fn wrap(mut pos: Vec2) -> Vec2 {
    pos.x = pos.x.rem_euclid(1.0);
    pos.y = pos.y.rem_euclid(1.0);
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_world_matches_config_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = Config {
            world_animals: 7,
            world_foods: 3,
            ..Config::default()
        };

        let world = World::random(&config, &mut rng);

        assert_eq!(world.animals().len(), 7);
        assert_eq!(world.foods().len(), 3);
    }

    #[test]
    fn wrap_is_toroidal() {
        let p = wrap(vec2(1.25, -0.25));
        assert!((p.x - 0.25).abs() < 1e-6);
        assert!((p.y - 0.75).abs() < 1e-6);
    }
}
