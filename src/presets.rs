// Written by target/debug/statusbar-color-tools

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use rgb::RGB8;

lazy_static! {
  pub(crate) static ref PRESETS: BTreeMap<&'static str, RGB8> = {
    let mut m = BTreeMap::new();
    m.insert("black", RGB8 { r: 0, g: 0, b: 0 });
    m.insert("blue", RGB8 { r: 0, g: 122, b: 204 });
    m.insert("gray", RGB8 { r: 97, g: 97, b: 97 });
    m.insert("green", RGB8 { r: 22, g: 130, b: 93 });
    m.insert("orange", RGB8 { r: 204, g: 102, b: 51 });
    m.insert("pink", RGB8 { r: 233, g: 30, b: 99 });
    m.insert("purple", RGB8 { r: 104, g: 33, b: 122 });
    m.insert("red", RGB8 { r: 199, g: 46, b: 15 });
    m.insert("teal", RGB8 { r: 0, g: 128, b: 128 });
    m.insert("white", RGB8 { r: 255, g: 255, b: 255 });
    m.insert("yellow", RGB8 { r: 255, g: 204, b: 0 });
    m
  };
}
