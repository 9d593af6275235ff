use tracing::debug;

use crate::GlyphTableError;

/// Number of glyph columns (`nx`) and rows (`ny`) laid out in the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams {
    pub columns: u32,
    pub rows: u32,
}

/// Glyph cell size derived from a grid and the image it is laid over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub grid: GridParams,
    pub glyph_width: u32,
    pub glyph_height: u32,
}

impl GridParams {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn derive(&self, width: u32, height: u32) -> Result<GlyphGeometry, GlyphTableError> {
        let (nx, ny) = (self.columns, self.rows);
        if nx == 0 || ny == 0 {
            return Err(GlyphTableError::EmptyGrid { nx, ny });
        }
        if width % nx != 0 || height % ny != 0 {
            return Err(GlyphTableError::GridMismatch { width, height, nx, ny });
        }

        let geometry =
            GlyphGeometry { grid: *self, glyph_width: width / nx, glyph_height: height / ny };
        debug!(
            glyph_width = geometry.glyph_width,
            glyph_height = geometry.glyph_height,
            glyph_count = geometry.glyph_count(),
            "derived glyph geometry"
        );
        Ok(geometry)
    }
}

impl GlyphGeometry {
    pub fn glyph_count(&self) -> usize {
        self.grid.columns as usize * self.grid.rows as usize
    }

    /// Top-left source pixel of glyph `index`, counting row-major across the grid.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let columns = self.grid.columns as usize;
        let i = (index % columns) as u32;
        let j = (index / columns) as u32;
        (self.glyph_width * i, self.glyph_height * j)
    }
}
