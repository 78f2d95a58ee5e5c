//! The fixed icon palette and name-based color selection.
//!
//! A name maps to a palette entry through
//! `(length(name) + position_in_alphabet(first_char)) mod 26`, where the
//! length counts UTF-16 code units (the length a browser reports for the
//! string) and the alphabet position of a first character that is not an
//! ASCII letter is `-1`. Both rules are kept so that every name keeps the
//! color it has always had.

use tracing::trace;

use crate::color::Color;
use crate::logging::targets;

/// Number of entries in the palette and letters in the alphabet.
pub const PALETTE_SIZE: usize = 26;

/// The lowercase Latin alphabet, used to turn a first letter into an offset.
pub const ALPHABET: [char; PALETTE_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Position of `c` in [`ALPHABET`], ignoring ASCII case.
///
/// Returns `None` for anything that is not an ASCII letter.
pub fn alphabet_position(c: char) -> Option<usize> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let lower = c.to_ascii_lowercase();
    ALPHABET.iter().position(|&letter| letter == lower)
}

/// A fixed, ordered set of icon background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    colors: [Color; PALETTE_SIZE],
}

impl ColorPalette {
    /// The standard 26-color icon palette.
    pub const STANDARD: Self = Self {
        colors: [
            Color::from_u32(0x69d2e7),
            Color::from_u32(0xa7dbd8),
            Color::from_u32(0xe0e4cc),
            Color::from_u32(0xf38630),
            Color::from_u32(0xfa6900),
            Color::from_u32(0xf34365),
            Color::from_u32(0xfc9d9a),
            Color::from_u32(0xf9cdad),
            Color::from_u32(0xc8c8a9),
            Color::from_u32(0x83af9b),
            Color::from_u32(0xecd078),
            Color::from_u32(0xd95ba3),
            Color::from_u32(0xc02942),
            Color::from_u32(0x542437),
            Color::from_u32(0x53777a),
            Color::from_u32(0x43cdc4),
            Color::from_u32(0xc7f464),
            Color::from_u32(0xff6b6b),
            Color::from_u32(0xc44d58),
            Color::from_u32(0xcff093),
            Color::from_u32(0xa8dba8),
            Color::from_u32(0x79bd9a),
            Color::from_u32(0x3b8686),
            Color::from_u32(0x0b486b),
            Color::from_u32(0x2b193d),
            Color::from_u32(0x484d6d),
        ],
    };

    /// Create a palette from 26 colors.
    pub const fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// All colors, in index order.
    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// The color at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Whether `color` is one of the palette entries.
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Number of colors in the palette.
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always false; a palette holds exactly 26 colors.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Palette index for `name`, or `None` for an empty name.
    ///
    /// A character outside the Basic Multilingual Plane counts as two.
    pub fn index_for(&self, name: &str) -> Option<usize> {
        let first = name.chars().next()?;
        let length = name.encode_utf16().count() as i64;
        let position = alphabet_position(first).map_or(-1, |p| p as i64);
        let index = (length + position).rem_euclid(PALETTE_SIZE as i64) as usize;

        trace!(
            target: targets::PALETTE,
            length,
            position,
            index,
            "computed palette index"
        );

        Some(index)
    }

    /// Select the color for `name`, or `None` for an empty name.
    pub fn select(&self, name: &str) -> Option<Color> {
        self.index_for(name).map(|index| self.colors[index])
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Select the icon color for `name` from [`ColorPalette::STANDARD`].
pub fn select_color(name: &str) -> Option<Color> {
    ColorPalette::STANDARD.select(name)
}

static_assertions::assert_impl_all!(ColorPalette: Send, Sync);
