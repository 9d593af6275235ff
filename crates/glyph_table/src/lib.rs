mod emit;
mod font;
mod image_pipeline;

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

pub use emit::{c_source::write_c_source, repr::quote_codepoint};
pub use font::{
    glyph::Glyph,
    grid::{GlyphGeometry, GridParams},
    table::GlyphTable,
};
pub use image_pipeline::loader::{SourceImage, CHANNELS};

/// Extension appended to an asset name to locate its image.
pub const ASSET_EXTENSION: &str = "png";

/// Highest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

#[derive(Debug, thiserror::Error)]
pub enum GlyphTableError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("expected {expected} bytes of 3-channel pixel data, decoder produced {actual}")]
    PixelFormat { expected: usize, actual: usize },
    #[error("glyph grid must have at least one column and one row (got {nx}x{ny})")]
    EmptyGrid { nx: u32, ny: u32 },
    #[error("image of {width}x{height} pixels cannot be split into a {nx}x{ny} glyph grid")]
    GridMismatch { width: u32, height: u32, nx: u32, ny: u32 },
    #[error("codepoints {base}..{base}+{glyph_count} exceed U+10FFFF")]
    CodepointRange { base: u32, glyph_count: usize },
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Codepoint of glyph 0, emitted as `glyph_base` and used for annotations.
    pub base: Option<u32>,
    /// C identifier of the constant. Defaults to the asset's file name.
    pub symbol: Option<String>,
    /// Header included at the top of the generated file.
    pub header: String,
    /// Tag of the font structure type.
    pub struct_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            base: None,
            symbol: None,
            header: String::from("rasterfont.h"),
            struct_name: String::from("RasterFont"),
        }
    }
}

/// Path of the image backing the asset `name`.
pub fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.{ASSET_EXTENSION}"))
}

/// Symbol used for the asset `name` when none is configured.
pub fn default_symbol(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_owned())
}

#[derive(Default)]
pub struct GlyphTableGenerator;

impl GlyphTableGenerator {
    /// Decode `<name>.png` and slice it into a glyph table.
    pub fn render_asset(
        &self,
        name: &str,
        grid: GridParams,
        options: &TableOptions,
    ) -> Result<GlyphTable, GlyphTableError> {
        let path = asset_path(name);
        debug!(path = %path.display(), "loading font asset");
        let source = SourceImage::open(&path)?;
        let symbol = options.symbol.clone().unwrap_or_else(|| default_symbol(name));
        self.render_source(&source, symbol, grid, options)
    }

    pub fn render_image(
        &self,
        image: DynamicImage,
        symbol: impl Into<String>,
        grid: GridParams,
        options: &TableOptions,
    ) -> Result<GlyphTable, GlyphTableError> {
        let source = SourceImage::from_image(image)?;
        self.render_source(&source, symbol.into(), grid, options)
    }

    pub fn render_source(
        &self,
        source: &SourceImage,
        symbol: String,
        grid: GridParams,
        options: &TableOptions,
    ) -> Result<GlyphTable, GlyphTableError> {
        let geometry = grid.derive(source.width(), source.height())?;
        GlyphTable::new(symbol, source, geometry, options.base)
    }
}

#[cfg(test)]
mod tests {
    use image::{Luma, Rgb, RgbImage};

    use super::*;

    /// 4x2 image whose red channel encodes `x + 10 * y`.
    fn sample_image() -> DynamicImage {
        let image = RgbImage::from_fn(4, 2, |x, y| Rgb([(x + 10 * y) as u8, 200, 100]));
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn renders_reference_table() {
        let options = TableOptions { base: Some(65), ..TableOptions::default() };
        let table = GlyphTableGenerator
            .render_image(sample_image(), "font", GridParams::new(2, 1), &options)
            .unwrap();
        let text = String::from_utf8(table.to_c_source(&options).unwrap()).unwrap();

        let expected = "// Automatically generated - do not edit!\n\
                        #include \"rasterfont.h\"\n\
                        \n\
                        extern const struct RasterFont font;\n\
                        const struct RasterFont font = {\n\
                        \t.glyph_width = 2,\n\
                        \t.glyph_height = 2,\n\
                        \t.glyph_count = 2,\n\
                        \t.glyph_base = 65,\n\
                        \t.data = {\n\
                        \t\t0,1, 10,11,  // 0 'A'\n\
                        \t\t2,3, 12,13,  // 1 'B'\n\
                        }};\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn omits_base_when_unset() {
        let options = TableOptions::default();
        let table = GlyphTableGenerator
            .render_image(sample_image(), "font", GridParams::new(2, 1), &options)
            .unwrap();
        let text = String::from_utf8(table.to_c_source(&options).unwrap()).unwrap();

        assert!(!text.contains("glyph_base"));
        assert!(text.contains("\t\t0,1, 10,11,  // 0\n"));
        assert!(text.contains("\t\t2,3, 12,13,  // 1\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let options = TableOptions { base: Some(32), ..TableOptions::default() };
        let render = || {
            let table = GlyphTableGenerator
                .render_image(sample_image(), "font", GridParams::new(4, 2), &options)
                .unwrap();
            table.to_c_source(&options).unwrap()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn rejects_single_channel_images() {
        let image = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(4, 2, Luma([7])));
        let result = GlyphTableGenerator.render_image(
            image,
            "font",
            GridParams::new(2, 1),
            &TableOptions::default(),
        );
        assert!(matches!(result, Err(GlyphTableError::PixelFormat { expected: 24, actual: 8 })));
    }

    #[test]
    fn rejects_uneven_grid() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(10, 4));
        let result = GlyphTableGenerator.render_image(
            image,
            "font",
            GridParams::new(3, 1),
            &TableOptions::default(),
        );
        assert!(matches!(result, Err(GlyphTableError::GridMismatch { width: 10, nx: 3, .. })));
    }

    #[test]
    fn missing_asset_is_an_image_error() {
        let result = GlyphTableGenerator.render_asset(
            "/nonexistent/font",
            GridParams::new(1, 1),
            &TableOptions::default(),
        );
        assert!(matches!(result, Err(GlyphTableError::Image(_))));
    }

    #[test]
    fn custom_header_and_symbol() {
        let options = TableOptions {
            header: String::from("fonts/raster.h"),
            struct_name: String::from("BitmapFont"),
            ..TableOptions::default()
        };
        let table = GlyphTableGenerator
            .render_image(sample_image(), "term_font", GridParams::new(1, 1), &options)
            .unwrap();
        let text = String::from_utf8(table.to_c_source(&options).unwrap()).unwrap();

        assert!(text.contains("#include \"fonts/raster.h\"\n"));
        assert!(text.contains("extern const struct BitmapFont term_font;\n"));
        assert!(text.contains("const struct BitmapFont term_font = {\n"));
    }

    #[test]
    fn asset_names_map_to_png_paths() {
        assert_eq!(asset_path("term"), PathBuf::from("term.png"));
        assert_eq!(asset_path("fonts/term.v2"), PathBuf::from("fonts/term.v2.png"));
        assert_eq!(default_symbol("fonts/term"), "term");
        assert_eq!(default_symbol("term"), "term");
    }
}
