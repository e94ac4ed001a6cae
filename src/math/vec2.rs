#![allow(dead_code)]

use std::ops::*;

use super::Vec2;

impl<T> Neg for Vec2<T>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn neg(self) -> Vec2<T> {
        Vec2::<T> {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Add for Vec2<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> AddAssign for Vec2<T>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, other: Vec2<T>) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T> Sub for Vec2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Vec2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vec2<T>;

    fn mul(self, other: T) -> Vec2<T> {
        Vec2::<T> {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Vec2<f32> {
    pub const fn new(x: f32, y: f32) -> Vec2<f32> {
        Vec2::<f32> { x, y }
    }

    pub const fn zero() -> Vec2<f32> {
        Vec2::<f32> { x: 0.0, y: 0.0 }
    }

    pub fn mag(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn distance(self, other: Vec2<f32>) -> f32 {
        (self - other).mag()
    }

    /// Truncates toward zero, the same way a renderer casts float points.
    pub fn to_p2(self) -> Vec2<i32> {
        Vec2::<i32> {
            x: self.x as i32,
            y: self.y as i32,
        }
    }
}

impl Vec2<i32> {
    pub const fn new(x: i32, y: i32) -> Vec2<i32> {
        Vec2::<i32> { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec2::<f32>::new(3.0, -4.0);
        let b = Vec2::<f32>::new(1.0, 2.0);

        assert_eq!(a + b, Vec2::<f32>::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::<f32>::new(2.0, -6.0));
        assert_eq!(-a, Vec2::<f32>::new(-3.0, 4.0));
        assert_eq!(a * 2.0, Vec2::<f32>::new(6.0, -8.0));
        assert_eq!(a.mag(), 5.0);
        assert_eq!(a.distance(a), 0.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn p2_truncates() {
        let p = Vec2::<f32>::new(410.9, -0.5).to_p2();
        assert_eq!(p, Vec2::<i32>::new(410, 0));
    }
}
