pub mod rng;
pub mod shapes;
mod vec2;

/// Two-component vector. `Vec2<f32>` carries positions and velocities,
/// `Vec2<i32>` carries pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}
