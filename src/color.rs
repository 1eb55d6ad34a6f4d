/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color at fraction `t / 255` of the way from `self` to `other`,
    /// truncated channel by channel.
    pub fn blend(self, other: Rgb, t: u8) -> Rgb {
        let lerp = |a: u8, b: u8| {
            let (a, b) = (a as f64, b as f64);
            (a + t as f64 * (b - a) / 255.) as u8
        };
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn distance_sq(self, other: Rgb) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| {
                let d = a.abs_diff(b) as u32;
                d * d
            })
            .sum()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered table of colors addressed by a one byte index.
///
/// Index 0 is the color of dead cells, every other index is a color for
/// living cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub const MAX_LEN: usize = 256;

    /// `[dead, live]`
    pub fn bichrome(dead: Rgb, live: Rgb) -> Self {
        Self {
            colors: vec![dead, live],
        }
    }

    /// `dead` followed by 255 colors sweeping from `start` to `end`: index `i`
    /// lies at fraction `i / 255` of the way, so the last one is `end`.
    pub fn gradient(dead: Rgb, start: Rgb, end: Rgb) -> Self {
        let mut colors = Vec::with_capacity(Self::MAX_LEN);
        colors.push(dead);
        colors.extend((1..=u8::MAX).map(|i| start.blend(end, i)));
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn dead(&self) -> Rgb {
        self.colors[0]
    }

    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Color of `index`; indices past the end of the table read as dead.
    pub fn color(&self, index: u8) -> Rgb {
        self.get(index).unwrap_or(self.colors[0])
    }

    /// Index of the entry closest to `color`, the lowest one on ties.
    pub fn nearest(&self, color: Rgb) -> u8 {
        let mut best = (u32::MAX, 0);
        for (i, c) in self.colors.iter().enumerate() {
            let d = c.distance_sq(color);
            if d < best.0 {
                best = (d, i);
                if d == 0 {
                    break;
                }
            }
        }
        best.1 as u8
    }
}
