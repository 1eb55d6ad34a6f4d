use crate::{Error, IndexedImage, Ordinal, Painter, Palette, Point, Result, Scheme};
use std::sync::Arc;

/// Magnification of the grid: every cell is drawn as an `x` by `y` block of
/// pixels sharing one palette index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    x: u32,
    y: u32,
}

impl AspectRatio {
    pub const UNIT: AspectRatio = AspectRatio { x: 1, y: 1 };

    pub fn new(x: u32, y: u32) -> Result<Self> {
        if x == 0 || y == 0 {
            return Err(Error::NonPositiveRatio { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(self) -> u32 {
        self.x
    }

    pub fn y(self) -> u32 {
        self.y
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::UNIT
    }
}

/// One snapshot of the Game of Life.
///
/// Cells are addressed by logical coordinates `(x, y)` with `0 <= x <= width`
/// and `0 <= y <= height`, so the grid holds `(width + 1) * (height + 1)`
/// cells. Each cell stores a palette index, 0 meaning dead. The grid is finite:
/// nothing lives beyond its edges.
///
/// Cells are kept once; [`Generation::to_image`] expands them into pixel
/// blocks according to the aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    cells: Vec<u8>,
    width: usize,
    height: usize,
    ratio: AspectRatio,
    scheme: Arc<Scheme>,
    ordinal: Ordinal,
    painter: Painter,
}

impl Generation {
    /// Creates a generation where every cell is dead.
    pub fn new(
        width: usize,
        height: usize,
        scheme: Arc<Scheme>,
        ratio: AspectRatio,
        ordinal: Ordinal,
    ) -> Self {
        let painter = scheme.coloring.painter(ordinal, width, height);
        Self {
            cells: vec![0; (width + 1) * (height + 1)],
            width,
            height,
            ratio,
            scheme,
            ordinal,
            painter,
        }
    }

    /// Largest `x` coordinate.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest `y` coordinate.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    pub fn scheme(&self) -> &Arc<Scheme> {
        &self.scheme
    }

    pub fn palette(&self) -> &Palette {
        &self.scheme.palette
    }

    /// Size in pixels once magnified by the aspect ratio.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width as u32 + 1) * self.ratio.x,
            (self.height as u32 + 1) * self.ratio.y,
        )
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x <= self.width && y <= self.height, "({}, {})", x, y);
        x + y * (self.width + 1)
    }

    /// Palette index of cell `(x, y)`, which must lie inside the grid.
    pub fn color_index_at(&self, x: usize, y: usize) -> u8 {
        self.cells[self.offset(x, y)]
    }

    /// Sets the palette index of cell `(x, y)`; 0 kills it.
    pub fn set_color_index(&mut self, x: usize, y: usize, index: u8) {
        let i = self.offset(x, y);
        self.cells[i] = index;
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.color_index_at(x, y) != 0
    }

    /// Palette index the color model gives to a living cell at `(x, y)` in
    /// this generation.
    pub fn live_index(&self, x: usize, y: usize) -> u8 {
        self.painter.index_at(Point::new(x, y))
    }

    /// Overwrites every cell from a row-major sequence where entry
    /// `x + y * (width + 1)` tells whether `(x, y)` is alive.
    pub fn set_contents(&mut self, contents: &[bool]) -> Result<()> {
        if contents.len() != self.cells.len() {
            return Err(Error::DimensionMismatch {
                expected: self.cells.len(),
                given: contents.len(),
            });
        }
        let columns = self.width + 1;
        for (i, &alive) in contents.iter().enumerate() {
            let (x, y) = (i % columns, i / columns);
            self.cells[i] = if alive { self.live_index(x, y) } else { 0 };
        }
        Ok(())
    }

    /// Number of living cells among the (at most 8) neighbors of `(x, y)`.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        let (x1, x2) = (x.saturating_sub(1), (x + 1).min(self.width));
        let (y1, y2) = (y.saturating_sub(1), (y + 1).min(self.height));
        let mut count = 0;
        for ny in y1..=y2 {
            for nx in x1..=x2 {
                if (nx, ny) != (x, y) && self.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Applies the rules of the Game of Life once.
    ///
    /// A living cell with 2 or 3 living neighbors survives, a dead cell with
    /// exactly 3 is born, everything else is dead afterwards. Survivors and
    /// newborns take the color of the next ordinal.
    pub fn step(&self) -> Generation {
        let mut next = Generation::new(
            self.width,
            self.height,
            Arc::clone(&self.scheme),
            self.ratio,
            self.ordinal.next(),
        );
        for y in 0..=self.height {
            for x in 0..=self.width {
                let neibs = self.count_live_neighbors(x, y);
                let alive = if self.is_alive(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                if alive {
                    let index = next.live_index(x, y);
                    next.set_color_index(x, y, index);
                }
            }
        }
        next
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Row-major liveness of every cell, in the layout taken by
    /// [`Generation::set_contents`].
    pub fn liveness(&self) -> Vec<bool> {
        self.cells.iter().map(|&c| c != 0).collect()
    }

    /// Logical cells, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Expands every cell into its block of pixels.
    pub fn to_image(&self) -> IndexedImage {
        let (rx, ry) = (self.ratio.x as usize, self.ratio.y as usize);
        let (width, height) = self.physical_size();
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in self.cells.chunks_exact(self.width + 1) {
            let line = row
                .iter()
                .flat_map(|&c| std::iter::repeat(c).take(rx))
                .collect::<Vec<_>>();
            for _ in 0..ry {
                pixels.extend_from_slice(&line);
            }
        }
        IndexedImage::from_parts(width, height, pixels)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.width + 1) {
            for &c in row {
                write!(f, "{}", if c == 0 { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
