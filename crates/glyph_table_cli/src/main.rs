use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use glyph_table::{write_c_source, GlyphTable, GlyphTableGenerator, GridParams, TableOptions};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile a glyph grid image into a C raster font table")]
struct Cli {
    /// Font asset name; the image is read from `<NAME>.png`
    name: String,
    /// Number of glyph columns in the image
    nx: u32,
    /// Number of glyph rows in the image
    ny: u32,
    /// Codepoint of the first glyph
    base: Option<u32>,
    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(flatten)]
    settings: EmitSettings,
}

#[derive(Parser, Debug, Clone)]
struct EmitSettings {
    /// C identifier of the generated constant [default: file name of NAME]
    #[arg(long)]
    symbol: Option<String>,
    /// Header declaring the font structure
    #[arg(long, default_value = "rasterfont.h")]
    header: String,
    /// Tag of the font structure type
    #[arg(long = "struct", default_value = "RasterFont")]
    struct_name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let format = tracing_subscriber::fmt::format().compact();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .event_format(format)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.settings.to_options(cli.base);
    let table = generate(cli, &options)?;

    match &cli.output {
        Some(path) => {
            let source = table.to_c_source(&options)?;
            fs::write(path, source).with_context(|| format!("failed to write {:?}", path))?;
            info!(path = %path.display(), glyphs = table.glyphs.len(), "wrote font table");
        },
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_c_source(&table, &options, &mut out)
                .and_then(|()| out.flush())
                .context("failed to write font table to stdout")?;
        },
    }

    Ok(())
}

fn generate(cli: &Cli, options: &TableOptions) -> Result<GlyphTable> {
    let grid = GridParams::new(cli.nx, cli.ny);
    GlyphTableGenerator
        .render_asset(&cli.name, grid, options)
        .with_context(|| format!("failed to compile font {:?}", cli.name))
}

impl EmitSettings {
    fn to_options(&self, base: Option<u32>) -> TableOptions {
        let mut options = TableOptions::default();
        options.base = base;
        options.symbol = self.symbol.clone();
        options.header = self.header.clone();
        options.struct_name = self.struct_name.clone();
        options
    }
}
