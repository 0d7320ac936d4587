use macroquad::prelude::*;
use std::f32::consts::PI;

use crate::config::Config;
use crate::world::Food;

/// Direction an animal with the given rotation faces. Rotation 0 faces +y.
pub fn facing(rotation: f32) -> Vec2 {
    vec2(-rotation.sin(), rotation.cos())
}

/// Wrap an angle into [-PI, PI).
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Photoreceptor array shared by every animal of a simulation.
#[derive(Clone, Copy, Debug)]
pub struct Eye {
    pub fov_range: f32,
    pub fov_angle: f32,
    pub cells: usize,
}

impl Eye {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fov_range: config.eye_fov_range,
            fov_angle: config.eye_fov_angle,
            cells: config.eye_cells,
        }
    }

    /// Per-cell energy: each visible food adds `(range - dist) / range` to the
    /// cell its bearing falls into.
    pub fn process_vision(&self, position: Vec2, rotation: f32, foods: &[Food]) -> Vec<f32> {
        let mut cells = vec![0.0; self.cells];
        if self.cells == 0 {
            return cells;
        }

        for food in foods {
            let offset = food.position - position;
            let dist = offset.length();
            if dist > self.fov_range {
                continue;
            }

            // Bearing relative to +y, then relative to where the animal faces.
            let bearing = (-offset.x).atan2(offset.y);
            let angle = wrap_angle(bearing - rotation);
            if angle < -self.fov_angle / 2.0 || angle > self.fov_angle / 2.0 {
                continue;
            }

            let angle = angle + self.fov_angle / 2.0;
            let cell = (angle / self.fov_angle * self.cells as f32) as usize;
            let cell = cell.min(self.cells - 1);

            cells[cell] += (self.fov_range - dist) / self.fov_range;
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const TEST_EYE_CELLS: usize = 13;

    fn food(x: f32, y: f32) -> Food {
        Food {
            position: vec2(x, y),
        }
    }

    /// Render vision as text: '#' close, '+' mid, '.' far, ' ' nothing.
    fn render(cells: &[f32]) -> String {
        cells
            .iter()
            .map(|&cell| {
                if cell >= 0.7 {
                    '#'
                } else if cell >= 0.3 {
                    '+'
                } else if cell > 0.0 {
                    '.'
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn look(fov_range: f32, fov_angle: f32, rotation: f32, foods: &[Food]) -> String {
        let eye = Eye {
            fov_range,
            fov_angle,
            cells: TEST_EYE_CELLS,
        };
        render(&eye.process_vision(vec2(0.5, 0.5), rotation, foods))
    }

    #[test]
    fn food_fades_with_range() {
        let foods = [food(0.5, 1.0)];
        let cases = [
            (1.0, "      +      "),
            (0.9, "      +      "),
            (0.8, "      +      "),
            (0.7, "      .      "),
            (0.6, "      .      "),
            (0.5, "             "),
            (0.1, "             "),
        ];
        for (range, expected) in cases {
            assert_eq!(look(range, FRAC_PI_2, 0.0, &foods), expected, "range {range}");
        }
    }

    #[test]
    fn food_behind_is_invisible() {
        let foods = [food(0.5, 0.25)];
        assert_eq!(look(1.0, FRAC_PI_2, 0.0, &foods), "             ");
    }

    #[test]
    fn turning_moves_food_across_cells() {
        let foods = [food(0.5, 1.0)];
        let left = look(1.0, FRAC_PI_2, -0.5, &foods);
        let right = look(1.0, FRAC_PI_2, 0.5, &foods);
        assert_ne!(left, right);
        assert_eq!(left.trim(), "+");
        assert_eq!(right.trim(), "+");
    }

    #[test]
    fn vision_length_matches_cell_count() {
        let eye = Eye {
            fov_range: 0.25,
            fov_angle: PI,
            cells: 4,
        };
        assert_eq!(eye.process_vision(vec2(0.1, 0.1), 1.0, &[]).len(), 4);
    }

    #[test]
    fn facing_at_zero_points_down_the_y_axis() {
        let dir = facing(0.0);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        for raw in [-7.0f32, -PI, 0.0, 3.0, PI, 9.5] {
            let w = wrap_angle(raw);
            assert!((-PI..=PI).contains(&w), "{raw} -> {w}");
            assert!((w.sin() - raw.sin()).abs() < 1e-4);
            assert!((w.cos() - raw.cos()).abs() < 1e-4);
        }
    }
}
