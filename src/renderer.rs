use macroquad::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::config::Config;
use crate::sensory;
use crate::simulation::Simulation;
use crate::world::World;

const BG_COLOR: Color = Color::new(0.93, 0.94, 0.96, 1.0);
const FIELD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const FOOD_COLOR: Color = Color::new(247.0 / 255.0, 108.0 / 255.0, 108.0 / 255.0, 1.0);
pub const BIRD_COLOR: Color = Color::new(36.0 / 255.0, 48.0 / 255.0, 94.0 / 255.0, 1.0);

/// Vision arcs sit this many marker sizes away from the bird.
const VISION_RADIUS: f32 = 2.5;

/// 2D drawing surface. Coordinates are world units (the unit square);
/// angles are radians with 0 along +x and growing towards +y.
pub trait Canvas {
    fn clear(&mut self);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Triangle centred on (x, y) pointing along `rotation`'s facing direction.
    fn draw_triangle(&mut self, x: f32, y: f32, size: f32, rotation: f32, color: Color);
    fn draw_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Color);
}

/// Angular span of each eye cell as drawn around a bird. The quarter turn
/// lines the drawing zero angle (+x) up with the facing direction (+y).
pub fn vision_sectors(
    rotation: f32,
    fov_angle: f32,
    cells: usize,
) -> impl Iterator<Item = (f32, f32)> {
    let per_cell = fov_angle / cells.max(1) as f32;
    (0..cells).map(move |i| {
        let from = rotation - fov_angle / 2.0 + i as f32 * per_cell + FRAC_PI_2;
        (from, from + per_cell)
    })
}

/// Redraw the whole world plus each bird's vision overlay.
pub fn draw_world(config: &Config, world: &World, canvas: &mut impl Canvas) {
    canvas.clear();

    for food in world.foods() {
        canvas.draw_circle(
            food.position.x,
            food.position.y,
            config.food_size / 2.0,
            FOOD_COLOR,
        );
    }

    for animal in world.animals() {
        let pos = animal.position();
        canvas.draw_triangle(pos.x, pos.y, config.food_size, animal.rotation(), BIRD_COLOR);

        let sectors = vision_sectors(animal.rotation(), config.eye_fov_angle, config.eye_cells);
        for ((from, to), &energy) in sectors.zip(animal.vision()) {
            canvas.draw_arc(
                pos.x,
                pos.y,
                config.food_size * VISION_RADIUS,
                from,
                to,
                Color { a: energy, ..BIRD_COLOR },
            );
        }
    }
}

/// Canvas backed by macroquad, mapping the unit square onto the largest
/// square that fits in the given screen area.
pub struct MacroquadCanvas {
    origin: Vec2,
    scale: f32,
}

impl MacroquadCanvas {
    pub fn fit(area_width: f32, area_height: f32) -> Self {
        let side = area_width.min(area_height).max(1.0);
        Self {
            origin: vec2((area_width - side) * 0.5, (area_height - side) * 0.5),
            scale: side,
        }
    }

    fn project(&self, x: f32, y: f32) -> Vec2 {
        self.origin + vec2(x, y) * self.scale
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self) {
        clear_background(BG_COLOR);
        draw_rectangle(self.origin.x, self.origin.y, self.scale, self.scale, FIELD_COLOR);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        let p = self.project(x, y);
        draw_circle(p.x, p.y, radius * self.scale, color);
    }

    fn draw_triangle(&mut self, x: f32, y: f32, size: f32, rotation: f32, color: Color) {
        let center = self.project(x, y);
        let size = size * self.scale;
        let third = 2.0 * PI / 3.0;

        let front = center + sensory::facing(rotation) * size * 1.5;
        let left = center + sensory::facing(rotation + third) * size;
        let right = center + sensory::facing(rotation + 2.0 * third) * size;
        draw_triangle(front, left, right, color);
    }

    fn draw_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Color) {
        let center = self.project(x, y);
        let radius = radius * self.scale;
        let segments = (((to - from).abs() / (PI / 32.0)).ceil() as usize).max(2);

        let point = |angle: f32| center + vec2(angle.cos(), angle.sin()) * radius;
        let mut prev = point(from);
        for i in 1..=segments {
            let next = point(from + (to - from) * i as f32 / segments as f32);
            draw_line(prev.x, prev.y, next.x, next.y, 2.0, color);
            prev = next;
        }
    }
}

/// Screen-space status overlay.
pub fn draw_hud(sim: &Simulation, running: bool) {
    let tc = Color::new(0.25, 0.28, 0.35, 1.0);

    let fps_text = format!("FPS: {}", get_fps());
    draw_text(&fps_text, 10.0, 20.0, 18.0, tc);

    let gen_text = format!(
        "Generation: {}  Step: {}/{}",
        sim.generation(),
        sim.age(),
        sim.config().sim_generation_length
    );
    draw_text(&gen_text, 10.0, 40.0, 18.0, tc);

    if !running {
        let pause_text = "PAUSED (type p to resume)";
        draw_text(pause_text, 10.0, 64.0, 24.0, Color::new(0.8, 0.45, 0.1, 0.9));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear,
        Circle { x: f32, y: f32, radius: f32, color: Color },
        Triangle { x: f32, y: f32, size: f32, rotation: f32, color: Color },
        Arc { x: f32, y: f32, radius: f32, from: f32, to: f32, color: Color },
    }

    impl Canvas for Vec<DrawCall> {
        fn clear(&mut self) {
            self.push(DrawCall::Clear);
        }

        fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
            self.push(DrawCall::Circle { x, y, radius, color });
        }

        fn draw_triangle(&mut self, x: f32, y: f32, size: f32, rotation: f32, color: Color) {
            self.push(DrawCall::Triangle { x, y, size, rotation, color });
        }

        fn draw_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Color) {
            self.push(DrawCall::Arc { x, y, radius, from, to, color });
        }
    }
}
