// Write `preview.html` showing the palette derived from every preset
// and from the colors given on the command line.
//
//     RUST_LOG=statusbar_color=trace cargo run --example preview -- '#00b200'

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use statusbar_color::{
    derive_palette_with, format_color, parse_color, presets, Foreground,
    PaletteOptions, StatusColor, RGB8};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn cell(fh: &mut impl Write, bg: RGB8, fg: RGB8, text: &str)
        -> Result<(), Err> {
    writeln!(fh, "  <td style=\"width: 110px; height: 30px; \
                  padding: 0 6px; background-color: {}; color: {}\">\
                  {text}</td>",
             format_color(bg), format_color(fg))?;
    Ok(())
}

fn row(fh: &mut impl Write, name: &str, base: RGB8,
       opts: &PaletteOptions) -> Result<(), Err> {
    let p = derive_palette_with(base, opts);
    writeln!(fh, "<tr>")?;
    cell(fh, p.background, p.foreground, &format_color(p.background))?;
    cell(fh, p.hover_background, p.foreground, "hover")?;
    cell(fh, p.active_background, p.foreground, "active")?;
    writeln!(fh, "  <td style=\"padding-left: 7px\">{name} \
                  (contrast {:.2})</td>\n</tr>",
             p.background.contrast_ratio(&p.foreground))?;
    Ok(())
}

fn table<'a>(fh: &mut impl Write,
             colors: impl IntoIterator<Item = (&'a str, RGB8)>,
             opts: &PaletteOptions) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\">")?;
    for (name, c) in colors {
        row(fh, name, c, opts)?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut extra = vec![];
    for a in &args {
        extra.push((a.as_str(), parse_color(a)?));
    }

    let mut fh = BufWriter::new(File::create("preview.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>statusbar-color: preview</title>\n\
                  </head>\n\
                  <body>")?;
    for (title, opts) in [
        ("Contrast search (4.5)", PaletteOptions::default()),
        ("Black or white", PaletteOptions::default()
         .foreground(Foreground::BrightDark)),
    ] {
        writeln!(fh, "<h3>{title}</h3>")?;
        table(&mut fh, presets(), &opts)?;
        if !extra.is_empty() {
            table(&mut fh, extra.iter().copied(), &opts)?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    info!(presets = presets().count(), extra = extra.len(),
          "wrote preview.html");
    Ok(())
}
