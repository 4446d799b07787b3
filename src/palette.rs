//! Sixteen-entry color palettes and the rotation list.

use smart_leds::{colors, RGB8};

pub const AMETHYST: RGB8 = RGB8::new(0x99, 0x66, 0xcc);
pub const ANTIQUE_WHITE: RGB8 = RGB8::new(0xfa, 0xeb, 0xd7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16(pub [RGB8; 16]);

impl Palette16 {
    /// Looks up a 16-bit palette position.
    ///
    /// The top four bits pick an entry, the next eight blend it towards the
    /// following entry (wrapping from the last entry to the first).
    pub fn color_at(&self, position: u16) -> RGB8 {
        let index = usize::from(position >> 12);
        let fraction = ((position >> 4) & 0xff) as u8;
        let current = self.0[index];
        if fraction == 0 {
            return current;
        }
        let next = self.0[(index + 1) % self.0.len()];
        RGB8::new(
            blend(current.r, next.r, fraction),
            blend(current.g, next.g, fraction),
            blend(current.b, next.b, fraction),
        )
    }
}

fn blend(from: u8, to: u8, amount: u8) -> u8 {
    let from = u16::from(from);
    let to = u16::from(to);
    let amount = u16::from(amount);
    ((from * (256 - amount) + to * amount) >> 8) as u8
}

pub const MIXED: Palette16 = Palette16([
    colors::ALICE_BLUE,
    colors::BLUE,
    colors::RED,
    colors::AZURE,
    colors::CHARTREUSE,
    colors::BLACK,
    ANTIQUE_WHITE,
    AMETHYST,
    colors::ALICE_BLUE,
    colors::BLUE,
    colors::RED,
    colors::AZURE,
    colors::CHARTREUSE,
    colors::BLACK,
    ANTIQUE_WHITE,
    AMETHYST,
]);

pub const BLUE: Palette16 = Palette16([
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::BLACK,
    colors::BLACK,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::BLACK,
]);

pub const LAVA: Palette16 = Palette16([
    colors::BLACK,
    colors::MAROON,
    colors::BLACK,
    colors::MAROON,
    colors::DARK_RED,
    colors::DARK_RED,
    colors::MAROON,
    colors::DARK_RED,
    colors::DARK_RED,
    colors::DARK_RED,
    colors::RED,
    colors::ORANGE,
    colors::WHITE,
    colors::ORANGE,
    colors::RED,
    colors::DARK_RED,
]);

pub const CLOUD: Palette16 = Palette16([
    colors::BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::DARK_BLUE,
    colors::BLUE,
    colors::DARK_BLUE,
    colors::SKY_BLUE,
    colors::SKY_BLUE,
    colors::LIGHT_BLUE,
    colors::WHITE,
    colors::LIGHT_BLUE,
    colors::SKY_BLUE,
]);

pub const FOREST: Palette16 = Palette16([
    colors::DARK_GREEN,
    colors::DARK_GREEN,
    colors::DARK_OLIVE_GREEN,
    colors::DARK_GREEN,
    colors::GREEN,
    colors::FOREST_GREEN,
    colors::OLIVE_DRAB,
    colors::GREEN,
    colors::SEA_GREEN,
    colors::MEDIUM_AQUAMARINE,
    colors::LIME_GREEN,
    colors::YELLOW_GREEN,
    colors::LIGHT_GREEN,
    colors::LAWN_GREEN,
    colors::MEDIUM_AQUAMARINE,
    colors::FOREST_GREEN,
]);

pub const HEAT: Palette16 = Palette16([
    RGB8::new(0x00, 0x00, 0x00),
    RGB8::new(0x33, 0x00, 0x00),
    RGB8::new(0x66, 0x00, 0x00),
    RGB8::new(0x99, 0x00, 0x00),
    RGB8::new(0xcc, 0x00, 0x00),
    RGB8::new(0xff, 0x00, 0x00),
    RGB8::new(0xff, 0x33, 0x00),
    RGB8::new(0xff, 0x66, 0x00),
    RGB8::new(0xff, 0x99, 0x00),
    RGB8::new(0xff, 0xcc, 0x00),
    RGB8::new(0xff, 0xff, 0x00),
    RGB8::new(0xff, 0xff, 0x33),
    RGB8::new(0xff, 0xff, 0x66),
    RGB8::new(0xff, 0xff, 0x99),
    RGB8::new(0xff, 0xff, 0xcc),
    RGB8::new(0xff, 0xff, 0xff),
]);

pub const PALETTE_COUNT: usize = 6;

/// Rotation order. The clock starts on the first entry.
pub static PALETTES: [Palette16; PALETTE_COUNT] = [MIXED, BLUE, LAVA, CLOUD, FOREST, HEAT];
