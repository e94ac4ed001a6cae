pub mod blend;
pub mod draw;

use blend::Mixer;

use crate::math::Vec2;

pub type Argb = u32;

pub type P2 = Vec2<i32>;

pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn black() -> Self;
    fn trans() -> Self;

    fn over(self, other: Self) -> Self;
    fn mix(self, other: Self) -> Self;

    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;

    /// Drops the alpha channel, as expected by the window surface.
    fn to_xrgb(self) -> u32;
}

/// Software framebuffer the balls are drawn into.
///
/// Pixels are stored transparent-cleared and composited over
/// `background` only when copied to the window.
pub struct Canvas {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,

    mixer: Mixer,

    background: Argb,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![Argb::trans(); w * h],
            width: w,
            height: h,

            mixer: u32::over,

            background: Argb::black(),
        }
    }

    pub fn mixerm(&mut self) {
        self.mixer = u32::mix;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.buffer.fill(Argb::trans());
    }

    #[cfg(test)]
    pub fn pixel(&self, p: P2) -> Option<Argb> {
        self.index(p).map(|i| self.buffer[i])
    }

    pub fn is_in_bound(&self, p: P2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: P2) -> Option<usize> {
        self.is_in_bound(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    /// Copies the canvas into `dest`, each canvas pixel becoming a
    /// `scale × scale` block.
    ///
    /// `width` is the row length of `dest`, which can differ from
    /// `self.width * scale` when the compositor hands us a window of
    /// another size.
    pub fn scale_to(&self, scale: usize, dest: &mut [u32], width: Option<usize>) {
        if self.width == 0 || scale == 0 {
            return;
        }

        let dst_width = width.unwrap_or(self.width * scale);
        if dst_width == 0 {
            return;
        }

        self.buffer
            .chunks_exact(self.width) // source lines
            .zip(dest.chunks_mut(dst_width * scale)) // with blocks of destination lines
            .flat_map(|(src_row, dst_block)| {
                dst_block
                    .chunks_exact_mut(dst_width)
                    .map(move |dst_row| (src_row, dst_row))
            })
            .flat_map(|(src_row, dst_row)| src_row.iter().zip(dst_row.chunks_mut(scale)))
            .for_each(|(src_pixel, dst_chunk)| {
                dst_chunk.fill(self.background.mix(*src_pixel).to_xrgb())
            });
    }
}
