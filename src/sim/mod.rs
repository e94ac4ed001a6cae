//! Ball simulation
//!
//! Nothing in here knows about windows or pixels. The world is advanced
//! by [`World::advance_all`] once per tick and read back by the renderer.

pub mod integrator;
pub mod spawn;

pub use integrator::advance;
pub use spawn::random_ball;

use crate::graphics::Argb;
use crate::math::{rng::Rng, Vec2};

/// A bouncing ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2<f32>,
    pub radius: f32,
    pub velocity: Vec2<f32>,
    pub color: Argb,
}

/// Extent of the play-field, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a ball of this radius fits between opposite walls.
    pub fn fits(&self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}

/// All balls, in spawn order. Balls are never removed.
pub struct World {
    balls: Vec<Ball>,
    field: Field,
}

impl World {
    pub fn new(field: Field) -> Self {
        Self {
            balls: Vec::new(),
            field,
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn push(&mut self, ball: Ball) {
        if !self.field.fits(ball.radius) {
            log::warn!(
                "Ball of radius {} does not fit a {}x{} field",
                ball.radius,
                self.field.width,
                self.field.height
            );
        }

        self.balls.push(ball);
    }

    /// Appends one random ball and returns it.
    pub fn spawn(&mut self, rng: &mut Rng) -> Ball {
        let ball = random_ball(rng, self.field);
        self.push(ball);
        ball
    }

    pub fn advance_all(&mut self, dt: f32) {
        let field = self.field;
        for ball in self.balls.iter_mut() {
            advance(ball, field, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rng;

    const FIELD: Field = Field::new(800.0, 600.0);

    #[test]
    fn spawn_appends_exactly_one() {
        let mut world = World::new(FIELD);
        let mut rng = rng::from_seed(1);

        assert!(world.is_empty());

        for n in 1..=20 {
            let ball = world.spawn(&mut rng);
            assert_eq!(world.len(), n);
            assert_eq!(world.balls()[n - 1], ball);
            assert!((10.0..50.0).contains(&ball.radius));
        }
    }

    #[test]
    fn advance_all_keeps_order_and_bounds() {
        let mut world = World::new(FIELD);
        let mut rng = rng::from_seed(2);

        for _ in 0..50 {
            world.spawn(&mut rng);
        }

        let radii: Vec<f32> = world.balls().iter().map(|b| b.radius).collect();

        for _ in 0..600 {
            world.advance_all(1.0 / 60.0);

            for ball in world.balls() {
                assert!(ball.position.x >= ball.radius);
                assert!(ball.position.x <= FIELD.width - ball.radius);
                assert!(ball.position.y >= ball.radius);
                assert!(ball.position.y <= FIELD.height - ball.radius);
            }
        }

        let after: Vec<f32> = world.balls().iter().map(|b| b.radius).collect();
        assert_eq!(radii, after);
    }

    #[test]
    fn fits() {
        assert!(FIELD.fits(300.0));
        assert!(!FIELD.fits(300.5));
        assert!(!FIELD.fits(401.0));
    }
}
