use super::{Argb, Pixel};

pub type Mixer = fn(Argb, Argb) -> Argb;

/// `c2` composited over `c1`.
pub fn composite_u32(c1: Argb, c2: Argb) -> Argb {
    let [a1, r1, g1, b1] = c1.decompose();
    let [a2, r2, g2, b2] = c2.decompose();

    let (a, a3) = {
        let a1 = a1 as u16;
        let a2 = a2 as u16;

        let a3 = (a1 * (255 - a2)) / 256;

        (a2 + a3, a3)
    };

    if a == 0 {
        return Argb::trans();
    }

    let composite_channel = |c1: u8, c2: u8| -> u8 {
        let c1 = c1 as u16;
        let c2 = c2 as u16;
        let a2 = a2 as u16;

        ((c2 * a2 + c1 * a3) / a) as u8
    };

    Argb::compose([
        a as u8,
        composite_channel(r1, r2),
        composite_channel(g1, g2),
        composite_channel(b1, b2),
    ])
}

impl Pixel for Argb {
    fn black() -> Argb {
        0xFF_00_00_00
    }

    fn trans() -> Argb {
        0x0
    }

    fn over(self, other: Argb) -> Argb {
        other
    }

    fn mix(self, other: Argb) -> Argb {
        composite_u32(self, other)
    }

    fn decompose(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn compose(array: [u8; 4]) -> Argb {
        Argb::from_be_bytes(array)
    }

    fn to_xrgb(self) -> u32 {
        self & 0x00_FF_FF_FF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_wins() {
        assert_eq!(Argb::black().mix(0xFF_12_34_56), 0xFF_12_34_56);
    }

    #[test]
    fn transparent_keeps_background() {
        let out = 0xFF_10_20_30u32.mix(Argb::trans());
        assert_eq!(out.to_xrgb(), 0x10_20_30);
    }

    #[test]
    fn compose_roundtrip_channels() {
        let c = Argb::compose([0xFF, 1, 2, 3]);
        assert_eq!(c, 0xFF_01_02_03);
        assert_eq!(c.decompose(), [0xFF, 1, 2, 3]);
    }

    #[test]
    fn half_alpha_blends() {
        let out = Argb::black().mix(0x80_FF_FF_FF);
        let [a, r, g, b] = out.decompose();
        assert!(a >= 0xFE);
        assert!(r > 0x70 && r < 0x90);
        assert_eq!([r, r], [g, b]);
    }
}
