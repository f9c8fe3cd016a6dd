//! Per-Pixel Collision Masks
//!
//! A mask records which pixels of a sprite frame are solid. Combat overlap
//! is decided on masks so that two sprite rectangles touching only through
//! transparent pixels do not register a hit.

/// Alpha values strictly above this count as solid.
pub const ALPHA_THRESHOLD: u8 = 127;

/// Bit mask of solid pixels, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully solid mask.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Fully transparent mask.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Build a mask from a row-major alpha channel.
    ///
    /// Missing trailing samples are treated as transparent.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Self {
        let len = (width * height) as usize;
        let bits = (0..len)
            .map(|i| alpha.get(i).is_some_and(|a| *a > ALPHA_THRESHOLD))
            .collect();
        Self { width, height, bits }
    }

    /// Solid disc inscribed in the mask bounds.
    pub fn disc(width: u32, height: u32) -> Self {
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        let rx = (width as f32 / 2.0).max(f32::EPSILON);
        let ry = (height as f32 / 2.0).max(f32::EPSILON);
        let mut mask = Self::empty(width, height);
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Solid pixel at (x, y). Out-of-range coordinates are transparent.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    /// Set a pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = solid;
        }
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Check whether `other`, placed at offset (dx, dy) relative to this
    /// mask's top-left corner, shares any solid pixel with this mask.
    pub fn overlap_at(&self, other: &Mask, dx: i32, dy: i32) -> bool {
        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (dx + other.width as i32).min(self.width as i32);
        let y_end = (dy + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return true;
                }
            }
        }
        false
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mask({}x{}, {} solid)", self.width, self.height, self.count())
    }
}
