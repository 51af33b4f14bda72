// Generate `../src/presets.rs` from `presets.hjson`.  The input has
// the shape of the editor's "statusbar.colors" setting: an object
// mapping preset names to "#RRGGBB" or "#RGB" codes.  Comments are
// allowed, as in the editor's settings files.

use std::{string::String,
          collections::BTreeMap,
          env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};

type Presets = BTreeMap<String, [u8; 3]>;

/// Convert colors such as "#4393c3" or "#fa0" to `[67, 147, 195]`.
fn parse_color(s: &str) -> [u8; 3] {
    let digits = match s.strip_prefix('#') {
        Some(d) if d.chars().all(|c| c.is_ascii_hexdigit()) => d,
        _ => panic!("statusbar-color-tools: not a color “{}”", s) };
    let digits: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => panic!("statusbar-color-tools: not a color “{}”", s) };
    let mut rgb = [0; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        *c = u8::from_str_radix(&digits[2 * i .. 2 * i + 2], 16).unwrap();
    }
    rgb
}

fn add_presets_from_json(map: &mut Presets, json: Value) {
    let colors = match json {
        Object(mut m) => m.remove("statusbar.colors"),
        _ => panic!("statusbar-color-tools: top level is not an object") };
    match colors {
        Some(Object(colors)) => {
            for (name, color) in colors.into_iter() {
                let rgb = match color {
                    String(c) => parse_color(&c),
                    c => panic!("statusbar-color-tools: {name}: {c:?}") };
                if map.insert(name.to_ascii_lowercase(), rgb).is_some() {
                    panic!("statusbar-color-tools: duplicate preset {name}")
                }
            }
        }
        c => panic!("statusbar-color-tools: \"statusbar.colors\": {c:?}"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut presets = Presets::new();

    let fh_json = File::open("presets.hjson")?;
    let json: Value = serde_hjson::from_reader(fh_json)?;
    add_presets_from_json(&mut presets, json);

    let mut fh = BufWriter::new(File::create("../src/presets.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  use std::collections::BTreeMap;\n\
                  use lazy_static::lazy_static;\n\
                  use rgb::RGB8;\n",
             env::args().next().unwrap())?;
    writeln!(fh, "lazy_static! {{\n  \
                  pub(crate) static ref PRESETS: \
                  BTreeMap<&'static str, RGB8> = {{\n    \
                  let mut m = BTreeMap::new();")?;
    for (name, [r, g, b]) in &presets {
        writeln!(fh, "    m.insert({name:?}, RGB8 {{ r: {r}, g: {g}, b: {b} }});")?;
    }
    writeln!(fh, "    m\n  }};\n}}")?;

    Ok(())
}
