//! Explicit Euler step with elastic wall reflection

use super::{Ball, Field};

/// Moves `ball` by `velocity * dt`, then reflects it off any wall its
/// edge went past.
///
/// The bounds are checked against the updated position. A violated axis
/// gets its coordinate clamped back inside and its velocity component
/// negated; the other axis is untouched. There is no sub-stepping.
///
/// A ball that does not fit the field (see [`Field::fits`]) is clamped
/// twice and ends up touching the low wall.
pub fn advance(ball: &mut Ball, field: Field, dt: f32) {
    ball.position += ball.velocity * dt;

    let r = ball.radius;

    if ball.position.x > field.width - r {
        ball.position.x = field.width - r;
        ball.velocity.x = -ball.velocity.x;
    }

    if ball.position.x < r {
        ball.position.x = r;
        ball.velocity.x = -ball.velocity.x;
    }

    if ball.position.y > field.height - r {
        ball.position.y = field.height - r;
        ball.velocity.y = -ball.velocity.y;
    }

    if ball.position.y < r {
        ball.position.y = r;
        ball.velocity.y = -ball.velocity.y;
    }
}
