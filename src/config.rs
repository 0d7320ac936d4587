// Simulation configuration: defaults for every tunable in one place.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::EngineError;

// Brain
pub const BRAIN_NEURONS: usize = 9;

// Eye
pub const EYE_FOV_RANGE: f32 = 0.25;
pub const EYE_FOV_ANGLE: f32 = PI + FRAC_PI_4; // 225 degrees
pub const EYE_CELLS: usize = 9;

// Food (also the marker size every shape is scaled by)
pub const FOOD_SIZE: f32 = 0.01;

// Genetic algorithm
pub const GA_MUT_CHANCE: f32 = 0.01;
pub const GA_MUT_COEFF: f32 = 0.3;

// Movement
pub const SIM_SPEED_MIN: f32 = 0.001;
pub const SIM_SPEED_MAX: f32 = 0.005;
pub const SIM_SPEED_ACCEL: f32 = 0.2;
pub const SIM_ROTATION_ACCEL: f32 = FRAC_PI_2;
pub const SIM_GENERATION_LENGTH: usize = 2500;

// World
pub const WORLD_ANIMALS: usize = 40;
pub const WORLD_FOODS: usize = 60;

// Upper bounds accepted from a reset
pub const MAX_POPULATION: usize = 10_000;
pub const MAX_LAYER_SIZE: usize = 1024;

/// Parameters a simulation is built from. Committed once per reset and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub brain_neurons: usize,
    pub eye_fov_range: f32,
    pub eye_fov_angle: f32,
    pub eye_cells: usize,
    pub food_size: f32,
    pub ga_mut_chance: f32,
    pub ga_mut_coeff: f32,
    pub sim_speed_min: f32,
    pub sim_speed_max: f32,
    pub sim_speed_accel: f32,
    pub sim_rotation_accel: f32,
    pub sim_generation_length: usize,
    pub world_animals: usize,
    pub world_foods: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brain_neurons: BRAIN_NEURONS,
            eye_fov_range: EYE_FOV_RANGE,
            eye_fov_angle: EYE_FOV_ANGLE,
            eye_cells: EYE_CELLS,
            food_size: FOOD_SIZE,
            ga_mut_chance: GA_MUT_CHANCE,
            ga_mut_coeff: GA_MUT_COEFF,
            sim_speed_min: SIM_SPEED_MIN,
            sim_speed_max: SIM_SPEED_MAX,
            sim_speed_accel: SIM_SPEED_ACCEL,
            sim_rotation_accel: SIM_ROTATION_ACCEL,
            sim_generation_length: SIM_GENERATION_LENGTH,
            world_animals: WORLD_ANIMALS,
            world_foods: WORLD_FOODS,
        }
    }
}

impl Config {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), EngineError> {
        let positive_ints = [
            ("brain_neurons", self.brain_neurons),
            ("eye_cells", self.eye_cells),
            ("sim_generation_length", self.sim_generation_length),
            ("world_animals", self.world_animals),
        ];
        for (name, value) in positive_ints {
            if value == 0 {
                return Err(EngineError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }

        let bounded = [
            ("brain_neurons", self.brain_neurons, MAX_LAYER_SIZE),
            ("eye_cells", self.eye_cells, MAX_LAYER_SIZE),
            ("world_animals", self.world_animals, MAX_POPULATION),
            ("world_foods", self.world_foods, MAX_POPULATION),
        ];
        for (name, value, max) in bounded {
            if value > max {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be at most {max}, got {value}"
                )));
            }
        }

        let positive_floats = [
            ("eye_fov_range", self.eye_fov_range),
            ("eye_fov_angle", self.eye_fov_angle),
            ("food_size", self.food_size),
            ("sim_speed_max", self.sim_speed_max),
        ];
        for (name, value) in positive_floats {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        // Per-step limits clamp into [-accel, accel].
        let non_negative = [
            ("sim_speed_accel", self.sim_speed_accel),
            ("sim_rotation_accel", self.sim_rotation_accel),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let finite = [
            ("ga_mut_coeff", self.ga_mut_coeff),
            ("sim_speed_min", self.sim_speed_min),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(EngineError::InvalidConfig(format!("{name} must be finite")));
            }
        }

        if !(0.0..=1.0).contains(&self.ga_mut_chance) {
            return Err(EngineError::InvalidConfig(format!(
                "ga_mut_chance must lie in [0, 1], got {}",
                self.ga_mut_chance
            )));
        }
        if self.sim_speed_min > self.sim_speed_max {
            return Err(EngineError::InvalidConfig(format!(
                "sim_speed_min ({}) exceeds sim_speed_max ({})",
                self.sim_speed_min, self.sim_speed_max
            )));
        }

        Ok(())
    }
}
