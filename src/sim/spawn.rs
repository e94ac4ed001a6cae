use super::{Ball, Field};

use crate::graphics::{Argb, Pixel};
use crate::math::{
    rng::{random_int, Rng},
    Vec2,
};

pub const MIN_RADIUS: i32 = 10;
pub const MAX_RADIUS: i32 = 50;
pub const MAX_SPEED: i32 = 300;

/// A ball somewhere in the field, with random velocity, radius and color.
///
/// Every value is a whole number. The position is not adjusted for the
/// radius, so the ball may start overlapping a wall; the first
/// integration step pulls it back inside.
pub fn random_ball(rng: &mut Rng, field: Field) -> Ball {
    let position = Vec2::<f32>::new(
        random_int(rng, 0..(field.width as i32).max(1)),
        random_int(rng, 0..(field.height as i32).max(1)),
    );

    let velocity = Vec2::<f32>::new(
        random_int(rng, -MAX_SPEED..MAX_SPEED),
        random_int(rng, -MAX_SPEED..MAX_SPEED),
    );

    let radius = random_int(rng, MIN_RADIUS..MAX_RADIUS);

    let mut channel = || random_int(rng, 0..255) as u8;
    let color = Argb::compose([0xFF, channel(), channel(), channel()]);

    Ball {
        position,
        radius,
        velocity,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rng;
    use proptest::prelude::*;

    const FIELD: Field = Field::new(800.0, 600.0);

    #[test]
    fn seeded_spawns_repeat() {
        let a = random_ball(&mut rng::from_seed(9), FIELD);
        let b = random_ball(&mut rng::from_seed(9), FIELD);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn values_in_range(seed in any::<u64>()) {
            let mut rng = rng::from_seed(seed);
            let ball = random_ball(&mut rng, FIELD);

            prop_assert!((10.0..50.0).contains(&ball.radius));
            prop_assert!((0.0..800.0).contains(&ball.position.x));
            prop_assert!((0.0..600.0).contains(&ball.position.y));
            prop_assert!((-300.0..300.0).contains(&ball.velocity.x));
            prop_assert!((-300.0..300.0).contains(&ball.velocity.y));
            prop_assert_eq!(ball.color.decompose()[0], 0xFF);
            prop_assert!(ball.color.decompose()[1..].iter().all(|&c| c < 255));
        }
    }
}
