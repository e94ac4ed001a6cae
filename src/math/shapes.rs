use super::Vec2;

/// Boundary points of a circle, using the midpoint circle algorithm.
///
/// Eight points are emitted per step, one for each octant. The output is
/// not sorted and may contain duplicates where octants meet.
pub fn circle_points(center: Vec2<f32>, radius: f32) -> Vec<Vec2<f32>> {
    let mut out = Vec::new();
    circle_points_into(center, radius, &mut out);
    out
}

/// Same as [`circle_points`] but refills a caller-owned buffer.
pub fn circle_points_into(center: Vec2<f32>, radius: f32, out: &mut Vec<Vec2<f32>>) {
    out.clear();

    let mut x = radius;
    let mut y = 0.0f32;
    let mut err = 0.0f32;

    let c = center;

    while x >= y {
        out.extend_from_slice(&[
            Vec2::<f32>::new(c.x + x, c.y + y),
            Vec2::<f32>::new(c.x + y, c.y + x),
            Vec2::<f32>::new(c.x - y, c.y + x),
            Vec2::<f32>::new(c.x - x, c.y + y),
            Vec2::<f32>::new(c.x - x, c.y - y),
            Vec2::<f32>::new(c.x - y, c.y - x),
            Vec2::<f32>::new(c.x + y, c.y - x),
            Vec2::<f32>::new(c.x + x, c.y - y),
        ]);

        // Not an else-if: both branches may run in the same step.
        if err <= 0.0 {
            y += 1.0;
            err += 2.0 * y + 1.0;
        }

        if err > 0.0 {
            x -= 1.0;
            err -= 2.0 * x + 1.0;
        }
    }
}
