//! C source serialization of a [`GlyphTable`].
//!
//! The layout is consumed by existing `RasterFont` users and must stay byte-stable:
//!
//! ```text
//! // Automatically generated - do not edit!
//! #include "rasterfont.h"
//!
//! extern const struct RasterFont name;
//! const struct RasterFont name = {
//! 	.glyph_width = 2,
//! 	.glyph_height = 2,
//! 	.glyph_count = 2,
//! 	.glyph_base = 65,
//! 	.data = {
//! 		0,1, 10,11,  // 0 'A'
//! 		2,3, 12,13,  // 1 'B'
//! }};
//! ```

use std::io::{self, Write};

use super::repr::quote_codepoint;
use crate::{font::table::GlyphTable, TableOptions};

pub fn write_c_source<W: Write>(
    table: &GlyphTable,
    options: &TableOptions,
    out: &mut W,
) -> io::Result<()> {
    let geometry = &table.geometry;
    let struct_name = &options.struct_name;
    let symbol = &table.symbol;

    writeln!(out, "// Automatically generated - do not edit!")?;
    writeln!(out, "#include \"{}\"", options.header)?;
    writeln!(out)?;
    writeln!(out, "extern const struct {struct_name} {symbol};")?;
    writeln!(out, "const struct {struct_name} {symbol} = {{")?;
    writeln!(out, "\t.glyph_width = {},", geometry.glyph_width)?;
    writeln!(out, "\t.glyph_height = {},", geometry.glyph_height)?;
    writeln!(out, "\t.glyph_count = {},", geometry.glyph_count())?;
    if let Some(base) = table.base {
        writeln!(out, "\t.glyph_base = {base},")?;
    }
    writeln!(out, "\t.data = {{")?;

    for glyph in &table.glyphs {
        write!(out, "\t\t")?;
        for row in glyph.rows() {
            for value in row {
                write!(out, "{value},")?;
            }
            write!(out, " ")?;
        }

        match table.codepoint(glyph) {
            Some(codepoint) => writeln!(out, " // {} {}", glyph.index, quote_codepoint(codepoint))?,
            None => writeln!(out, " // {}", glyph.index)?,
        }
    }

    writeln!(out, "}}}};")?;
    Ok(())
}
