//! Builds a reset configuration from a baseline plus `name=value` tokens.
//!
//! Named shortcuts (`a`/`animals`, `f`/`foods`, `n`/`neurons`,
//! `p`/`photoreceptors`) take integers. Any field can also be reached by its
//! exact name through `i:<field>=INT` or `f:<field>=FLOAT`. Tokens are applied
//! left to right onto a copy of the baseline; the first bad token discards
//! the copy.

use crate::config::Config;
use crate::error::CommandError;

/// Typed write access to a single configuration field.
#[derive(Clone, Copy)]
enum Setter {
    Int(fn(&mut Config, usize)),
    Float(fn(&mut Config, f32)),
}

/// Every field reachable from the command line, by exact name.
const FIELDS: &[(&str, Setter)] = &[
    ("brain_neurons", Setter::Int(|c: &mut Config, v: usize| c.brain_neurons = v)),
    ("eye_fov_range", Setter::Float(|c: &mut Config, v: f32| c.eye_fov_range = v)),
    ("eye_fov_angle", Setter::Float(|c: &mut Config, v: f32| c.eye_fov_angle = v)),
    ("eye_cells", Setter::Int(|c: &mut Config, v: usize| c.eye_cells = v)),
    ("food_size", Setter::Float(|c: &mut Config, v: f32| c.food_size = v)),
    ("ga_mut_chance", Setter::Float(|c: &mut Config, v: f32| c.ga_mut_chance = v)),
    ("ga_mut_coeff", Setter::Float(|c: &mut Config, v: f32| c.ga_mut_coeff = v)),
    ("sim_speed_min", Setter::Float(|c: &mut Config, v: f32| c.sim_speed_min = v)),
    ("sim_speed_max", Setter::Float(|c: &mut Config, v: f32| c.sim_speed_max = v)),
    ("sim_speed_accel", Setter::Float(|c: &mut Config, v: f32| c.sim_speed_accel = v)),
    (
        "sim_rotation_accel",
        Setter::Float(|c: &mut Config, v: f32| c.sim_rotation_accel = v),
    ),
    (
        "sim_generation_length",
        Setter::Int(|c: &mut Config, v: usize| c.sim_generation_length = v),
    ),
    ("world_animals", Setter::Int(|c: &mut Config, v: usize| c.world_animals = v)),
    ("world_foods", Setter::Int(|c: &mut Config, v: usize| c.world_foods = v)),
];

/// Short and long names mapped onto the field they set.
const SHORTCUTS: &[(&str, &str, &str)] = &[
    ("a", "animals", "world_animals"),
    ("f", "foods", "world_foods"),
    ("n", "neurons", "brain_neurons"),
    ("p", "photoreceptors", "eye_cells"),
];

/// How a token asked for its value to be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Numeric {
    Int,
    Float,
}

fn setter(field: &str) -> Option<Setter> {
    FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, setter)| *setter)
}

fn shortcut(name: &str) -> Option<&'static str> {
    SHORTCUTS
        .iter()
        .find(|(short, long, _)| *short == name || *long == name)
        .map(|(_, _, field)| *field)
}

/// Names of every field settable through `i:` / `f:`.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|(name, _)| *name)
}

/// Apply `tokens` onto a copy of `base`.
pub fn build<'a>(
    base: &Config,
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<Config, CommandError> {
    let mut config = base.clone();
    for token in tokens {
        apply(&mut config, token)?;
    }
    Ok(config)
}

fn apply(config: &mut Config, token: &str) -> Result<(), CommandError> {
    let (name, value) = token
        .split_once('=')
        .ok_or_else(|| CommandError::MalformedOverride(token.to_string()))?;

    let (field, numeric) = if let Some(field) = name.strip_prefix("i:") {
        (field, Numeric::Int)
    } else if let Some(field) = name.strip_prefix("f:") {
        (field, Numeric::Float)
    } else {
        let field = shortcut(name).ok_or_else(|| CommandError::UnknownParameter(name.to_string()))?;
        (field, Numeric::Int)
    };

    let setter = setter(field).ok_or_else(|| CommandError::UnknownParameter(name.to_string()))?;
    let invalid = |expected: &'static str| CommandError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        expected,
    };

    match (setter, numeric) {
        (Setter::Int(set), Numeric::Int) => {
            let v = value.parse::<usize>().map_err(|_| invalid("a non-negative integer"))?;
            set(config, v);
        }
        (Setter::Int(_), Numeric::Float) => {
            return Err(invalid("valid for an integer field (use i:)"));
        }
        (Setter::Float(set), Numeric::Int) => {
            let v = value.parse::<i64>().map_err(|_| invalid("an integer"))?;
            set(config, v as f32);
        }
        (Setter::Float(set), Numeric::Float) => {
            let v = value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid("a finite number"))?;
            set(config, v);
        }
    }

    Ok(())
}
