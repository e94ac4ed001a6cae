use super::{blend::Mixer, Argb, Canvas, P2};

use crate::math::Vec2;

impl Canvas {
    pub fn set_pixel_xy(&mut self, p: P2, c: Argb) {
        self.set_pixel_xy_by(p, c, self.mixer);
    }

    pub fn set_pixel_xy_by(&mut self, p: P2, c: Argb, b: Mixer) {
        if let Some(i) = self.index(p) {
            let pixel = &mut self.buffer[i];
            *pixel = b(*pixel, c);
        }
    }

    /// Fills `w × h` pixels starting at `p`, clipped to the canvas.
    pub fn draw_rect_wh(&mut self, p: P2, w: usize, h: usize, c: Argb) {
        let xs = p.x.max(0) as usize;
        let ys = p.y.max(0) as usize;

        let xe = (p.x as i64 + w as i64).clamp(0, self.width as i64) as usize;
        let ye = (p.y as i64 + h as i64).clamp(0, self.height as i64) as usize;

        if xs >= xe || ys >= ye {
            return;
        }

        let b = self.mixer;
        let width = self.width;

        for line in self.buffer.chunks_exact_mut(width).skip(ys).take(ye - ys) {
            for pixel in &mut line[xs..xe] {
                *pixel = b(*pixel, c);
            }
        }
    }

    /// Plots each point as a `thickness × thickness` block.
    ///
    /// Points are snapped to a grid of `thickness`, which is what
    /// drawing at a renderer scale of `thickness` would give.
    pub fn plot_points(&mut self, points: &[Vec2<f32>], c: Argb, thickness: u8) {
        let t = thickness.max(1) as i32;
        let tf = t as f32;

        for &point in points {
            let cell = Vec2::<f32>::new(point.x / tf, point.y / tf).to_p2();
            let p = P2::new(cell.x * t, cell.y * t);

            if t == 1 {
                self.set_pixel_xy(p, c);
            } else {
                self.draw_rect_wh(p, t as usize, t as usize, c);
            }
        }
    }
}
