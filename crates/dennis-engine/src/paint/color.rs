use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, one byte per channel.
///
/// Memory layout matches `wgpu::TextureFormat::Rgba8Unorm*`, so a slice of
/// `Rgba8` can be uploaded to the GPU as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Source-over composition of `self` onto `dst`.
    ///
    /// Fully opaque and fully transparent sources short-circuit; otherwise
    /// each channel is `src * a + dst * (255 - a)` rounded to the nearest byte.
    #[inline]
    pub fn over(self, dst: Rgba8) -> Rgba8 {
        match self.a {
            255 => self,
            0 => dst,
            a => {
                let a = a as u16;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * inv + 127) / 255) as u8;
                Rgba8 {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (a + (dst.a as u16 * inv + 127) / 255) as u8,
                }
            }
        }
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Rgba8::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces_destination() {
        let src = Rgba8::opaque(10, 20, 30);
        assert_eq!(src.over(Rgba8::opaque(200, 200, 200)), src);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        let dst = Rgba8::opaque(1, 2, 3);
        assert_eq!(Rgba8::new(255, 255, 255, 0).over(dst), dst);
    }

    #[test]
    fn half_alpha_mixes_channels() {
        let out = Rgba8::new(255, 0, 0, 128).over(Rgba8::opaque(0, 0, 255));
        assert_eq!(out.r, 128);
        assert_eq!(out.b, 127);
        assert_eq!(out.a, 255);
    }
}
