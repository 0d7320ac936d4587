use ::rand::Rng;

use crate::config::Config;
use crate::entity::Animal;
use crate::sensory::{self, Eye};
use crate::world::{self, Food, World};

/// Feed vision into each brain and turn its two outputs into speed and
/// rotation changes. Outputs are centred on 0.5 so the network can both
/// speed up and slow down, and turn either way.
pub fn apply_brains(world: &mut World, eye: &Eye, config: &Config) {
    for animal in &mut world.animals {
        animal.vision = eye.process_vision(animal.position, animal.rotation, &world.foods);

        let response = animal.brain.propagate(animal.vision.clone());
        let speed = response.first().copied().unwrap_or(0.5) - 0.5;
        let rotation = response.get(1).copied().unwrap_or(0.5) - 0.5;

        steer(animal, speed, rotation, config);
    }
}

fn steer(animal: &mut Animal, speed: f32, rotation: f32, config: &Config) {
    let speed = speed.clamp(-config.sim_speed_accel, config.sim_speed_accel);
    let rotation = rotation.clamp(-config.sim_rotation_accel, config.sim_rotation_accel);

    animal.speed = (animal.speed + speed).clamp(config.sim_speed_min, config.sim_speed_max);
    animal.rotation = sensory::wrap_angle(animal.rotation + rotation);
}

/// Move every animal along its facing direction.
pub fn integrate(world: &mut World) {
    for animal in &mut world.animals {
        animal.position = world::wrap(animal.position + sensory::facing(animal.rotation) * animal.speed);
    }
}

/// Animals touching food eat it; eaten food reappears somewhere random.
pub fn consume_food(world: &mut World, config: &Config, rng: &mut impl Rng) {
    for animal in &mut world.animals {
        for food in &mut world.foods {
            if animal.position.distance(food.position) <= config.food_size {
                animal.satiation += 1;
                *food = Food::random(rng);
            }
        }
    }
}
