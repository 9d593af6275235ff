use std::io;

use super::{
    glyph::{slice_glyphs, Glyph},
    grid::GlyphGeometry,
};
use crate::{
    emit::c_source::write_c_source, image_pipeline::loader::SourceImage, GlyphTableError,
    TableOptions, MAX_CODEPOINT,
};

/// A complete font table, ready to be serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    pub symbol: String,
    pub geometry: GlyphGeometry,
    pub base: Option<u32>,
    pub glyphs: Vec<Glyph>,
}

impl GlyphTable {
    pub fn new(
        symbol: String,
        source: &SourceImage,
        geometry: GlyphGeometry,
        base: Option<u32>,
    ) -> Result<Self, GlyphTableError> {
        let glyph_count = geometry.glyph_count();
        if let Some(base) = base {
            let last = u64::from(base) + (glyph_count as u64).saturating_sub(1);
            if last > u64::from(MAX_CODEPOINT) {
                return Err(GlyphTableError::CodepointRange { base, glyph_count });
            }
        }

        let glyphs = slice_glyphs(source, &geometry);
        Ok(Self { symbol, geometry, base, glyphs })
    }

    /// Codepoint mapped to `glyph`, if the table has a base.
    pub fn codepoint(&self, glyph: &Glyph) -> Option<u32> {
        self.base.map(|base| base + glyph.index as u32)
    }

    pub fn to_c_source(&self, options: &TableOptions) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        write_c_source(self, options, &mut buffer)?;
        Ok(buffer)
    }
}
