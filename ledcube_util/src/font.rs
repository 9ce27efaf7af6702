//! 4x4 glyphs for `'a'..='z'`, row-major, one bit per cell.
//!
//! A few slots use the capital shape where the small one does not fit in
//! four columns (`m`, `t`, `w`).

use crate::{Error, EXTENT};

pub type Glyph = [[u8; EXTENT]; EXTENT];

const BASE: char = 'a';

static FONT: [Glyph; 26] = [
    // a
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 1]],
    // b
    [[1, 0, 0, 0], [1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0]],
    // c
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [1, 1, 1, 0]],
    // d
    [[0, 0, 1, 0], [1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0]],
    // e
    [[1, 1, 1, 0], [1, 1, 1, 0], [1, 0, 0, 0], [1, 1, 1, 0]],
    // f
    [[1, 1, 1, 0], [1, 0, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0]],
    // g
    [[1, 1, 1, 1], [1, 0, 0, 0], [1, 0, 1, 1], [1, 1, 1, 1]],
    // h
    [[1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [1, 0, 1, 0]],
    // i
    [[0, 1, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    // j
    [[0, 0, 1, 0], [0, 0, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0]],
    // k
    [[1, 0, 0, 0], [1, 0, 1, 0], [1, 1, 0, 0], [1, 0, 1, 0]],
    // l
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0]],
    // M
    [[1, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1]],
    // n
    [[0, 0, 0, 0], [1, 0, 1, 1], [0, 1, 0, 1], [0, 1, 0, 1]],
    // o
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0]],
    // p
    [[1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0], [1, 0, 0, 0]],
    // q
    [[1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0], [0, 0, 1, 0]],
    // r
    [[1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0], [1, 0, 0, 1]],
    // s
    [[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0]],
    // T
    [[1, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    // u
    [[0, 0, 0, 0], [1, 0, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0]],
    // v
    [[0, 0, 0, 0], [1, 0, 1, 0], [1, 0, 1, 0], [0, 1, 0, 0]],
    // W
    [[1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 1]],
    // x
    [[0, 0, 0, 0], [1, 0, 1, 0], [1, 1, 1, 0], [1, 0, 1, 0]],
    // y
    [[0, 0, 0, 0], [1, 0, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    // z
    [[1, 1, 1, 1], [0, 0, 1, 0], [0, 1, 0, 0], [1, 1, 1, 1]],
];

pub fn glyph(c: char) -> Result<&'static Glyph, Error> {
    (c as u32)
        .checked_sub(BASE as u32)
        .and_then(|index| FONT.get(index as usize))
        .ok_or(Error::UnsupportedCharacter(c))
}

/// Every character the font can draw, in table order.
pub fn symbols() -> impl Iterator<Item = char> {
    (0..FONT.len() as u8).map(|index| (BASE as u8 + index) as char)
}
