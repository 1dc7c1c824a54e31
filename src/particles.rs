// src/particles.rs
//
// Efecto decorativo de partículas. Solo lee el estado de la app; no toca la sesión.

use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Stroke, Vec2};
use rand::Rng;

/// La animación está pensada a 60 fps; `dt` se escala a "frames".
const FRAME_SECONDS: f32 = 1.0 / 60.0;
const LIFE_DECAY_PER_FRAME: f32 = 0.001;
const PARTICLE_COLOR: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub life: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng, bounds: Rect) -> Self {
        Self {
            pos: Pos2::new(
                rng.gen_range(bounds.min.x..=bounds.max.x),
                rng.gen_range(bounds.min.y..=bounds.max.y),
            ),
            velocity: Vec2::new(rng.gen_range(-0.75..0.75), rng.gen_range(-0.75..0.75)),
            size: rng.gen_range(60.0..140.0),
            rotation: rng.gen_range(0.0..std::f32::consts::TAU),
            rotation_speed: rng.gen_range(-0.015..0.015),
            life: 1.0,
        }
    }

    /// Avanza `frames` fotogramas y da la vuelta por los bordes.
    fn advance(&mut self, frames: f32, bounds: Rect) {
        self.pos += self.velocity * frames;
        self.rotation += self.rotation_speed * frames;
        self.life -= LIFE_DECAY_PER_FRAME * frames;

        let margin = self.size;
        if self.pos.x < bounds.min.x - margin {
            self.pos.x = bounds.max.x + margin;
        } else if self.pos.x > bounds.max.x + margin {
            self.pos.x = bounds.min.x - margin;
        }
        if self.pos.y < bounds.min.y - margin {
            self.pos.y = bounds.max.y + margin;
        } else if self.pos.y > bounds.max.y + margin {
            self.pos.y = bounds.min.y - margin;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[derive(Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    target: usize, // 0 = inactivo
}

impl ParticleField {
    /// Activa el efecto con `count` partículas. Si ya estaba así, no hace nada.
    pub fn set_target(&mut self, count: usize) {
        if self.target != count {
            log::debug!("Partículas: {} -> {}", self.target, count);
            self.target = count;
            self.particles.truncate(count);
        }
    }

    pub fn deactivate(&mut self) {
        self.set_target(0);
    }

    pub fn is_active(&self) -> bool {
        self.target > 0
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, dt: f32, bounds: Rect) {
        self.step_with(&mut rand::thread_rng(), dt, bounds);
    }

    pub fn step_with(&mut self, rng: &mut impl Rng, dt: f32, bounds: Rect) {
        if !self.is_active() {
            self.particles.clear();
            return;
        }

        let frames = dt / FRAME_SECONDS;
        for p in &mut self.particles {
            p.advance(frames, bounds);
        }
        self.particles.retain(Particle::is_alive);

        while self.particles.len() < self.target {
            self.particles.push(Particle::random(rng, bounds));
        }
    }

    /// Avanza la animación y pinta por encima de la UI.
    pub fn show(&mut self, ctx: &Context) {
        if !self.is_active() {
            return;
        }

        let bounds = ctx.screen_rect();
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.step(dt, bounds);

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("particles")));
        for p in &self.particles {
            let alpha = (p.life.clamp(0.0, 1.0) * 90.0) as u8;
            let color = Color32::from_rgba_unmultiplied(
                PARTICLE_COLOR.r(),
                PARTICLE_COLOR.g(),
                PARTICLE_COLOR.b(),
                alpha,
            );
            let radius = p.size / 2.0;
            painter.circle_filled(p.pos, radius, color);
            // Un radio girando para que se note la rotación
            let tip = p.pos + Vec2::angled(p.rotation) * radius;
            painter.line_segment([p.pos, tip], Stroke::new(2.0, Color32::from_white_alpha(alpha)));
        }

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn inactive_field_stays_empty() {
        let mut field = ParticleField::default();
        field.step_with(&mut StdRng::seed_from_u64(1), FRAME_SECONDS, bounds());
        assert!(field.particles().is_empty());
    }

    #[test]
    fn refills_up_to_target() {
        let mut field = ParticleField::default();
        field.set_target(15);
        field.step_with(&mut StdRng::seed_from_u64(7), FRAME_SECONDS, bounds());
        assert_eq!(field.particles().len(), 15);

        field.set_target(10);
        assert_eq!(field.particles().len(), 10);

        field.deactivate();
        field.step_with(&mut StdRng::seed_from_u64(7), FRAME_SECONDS, bounds());
        assert!(field.particles().is_empty());
    }

    #[test]
    fn particles_wrap_around_edges() {
        let mut p = Particle {
            pos: Pos2::new(-100.0, 300.0),
            velocity: Vec2::new(-1.0, 0.0),
            size: 60.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            life: 1.0,
        };
        p.advance(1.0, bounds());
        assert_eq!(p.pos.x, 860.0);
        assert!(p.life < 1.0);
    }

    #[test]
    fn dead_particles_are_replaced() {
        let mut field = ParticleField::default();
        field.set_target(3);
        let mut rng = StdRng::seed_from_u64(3);
        field.step_with(&mut rng, FRAME_SECONDS, bounds());
        // Un salto enorme agota la vida de todas
        field.step_with(&mut rng, 2000.0 * FRAME_SECONDS, bounds());
        assert_eq!(field.particles().len(), 3);
        assert!(field.particles().iter().all(|p| p.life == 1.0));
    }
}
