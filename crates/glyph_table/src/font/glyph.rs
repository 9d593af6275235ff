use tracing::trace;

use super::grid::GlyphGeometry;
use crate::image_pipeline::loader::SourceImage;

/// One glyph cell, one intensity byte per pixel, grouped by pixel row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub index: usize,
    rows: Vec<Vec<u8>>,
}

impl Glyph {
    pub fn extract(source: &SourceImage, geometry: &GlyphGeometry, index: usize) -> Self {
        let (x0, y0) = geometry.cell_origin(index);
        let rows = (0..geometry.glyph_height)
            .map(|v| (0..geometry.glyph_width).map(|u| source.sample(x0 + u, y0 + v)).collect())
            .collect();
        trace!(index, x0, y0, "extracted glyph");
        Self { index, rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

pub fn slice_glyphs(source: &SourceImage, geometry: &GlyphGeometry) -> Vec<Glyph> {
    (0..geometry.glyph_count()).map(|index| Glyph::extract(source, geometry, index)).collect()
}
