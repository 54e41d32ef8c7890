// Faces for the frame label: embedded bitmap digits, or a TrueType font
// loaded from disk.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const SPACING: u32 = 1;

// One byte per row, the low five bits are the columns left to right.
static DIGITS: [[u8; GLYPH_ROWS as usize]; 10] = [
    [0b01110, 0b11011, 0b11011, 0b11011, 0b11011, 0b11011, 0b01110],
    [0b00110, 0b01110, 0b00110, 0b00110, 0b00110, 0b00110, 0b01111],
    [0b01110, 0b11011, 0b00011, 0b00110, 0b01100, 0b11000, 0b11111],
    [0b11110, 0b00011, 0b00011, 0b01110, 0b00011, 0b00011, 0b11110],
    [0b00011, 0b00111, 0b01011, 0b11011, 0b11111, 0b00011, 0b00011],
    [0b11111, 0b11000, 0b11110, 0b00011, 0b00011, 0b11011, 0b01110],
    [0b01110, 0b11000, 0b11110, 0b11011, 0b11011, 0b11011, 0b01110],
    [0b11111, 0b00011, 0b00110, 0b00110, 0b01100, 0b01100, 0b01100],
    [0b01110, 0b11011, 0b11011, 0b01110, 0b11011, 0b11011, 0b01110],
    [0b01110, 0b11011, 0b11011, 0b11011, 0b01111, 0b00011, 0b01110],
];

/// Fixed pitch block font scaled by an integer factor.
#[derive(Clone, Copy, Debug)]
pub struct BitmapFont {
    scale: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        BitmapFont::new(3)
    }
}

impl BitmapFont {
    pub fn new(scale: u32) -> BitmapFont {
        BitmapFont {
            scale: scale.max(1),
        }
    }

    // Digits have no descenders, so this is the full glyph height.
    pub fn ascent(&self) -> u32 {
        GLYPH_ROWS * self.scale
    }

    pub fn text_width(&self, text: &str) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        (n * (GLYPH_COLS + SPACING) - SPACING) * self.scale
    }

    // Characters without a glyph leave a gap of the same width.
    pub fn draw(&self, image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let advance = ((GLYPH_COLS + SPACING) * self.scale) as i32;
        let scale = self.scale as i32;
        for (i, ch) in text.chars().enumerate() {
            let rows = match glyph(ch) {
                Some(rows) => rows,
                None => continue,
            };
            let left = x + i as i32 * advance;
            for (r, bits) in rows.iter().enumerate() {
                for c in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - c)) != 0 {
                        let cell = Rect::at(left + c as i32 * scale, y + r as i32 * scale)
                            .of_size(self.scale, self.scale);
                        draw_filled_rect_mut(image, cell, color);
                    }
                }
            }
        }
    }
}

fn glyph(ch: char) -> Option<&'static [u8; GLYPH_ROWS as usize]> {
    ch.to_digit(10).map(|d| &DIGITS[d as usize])
}

pub enum LabelFont {
    Bitmap(BitmapFont),
    Truetype { font: Font<'static>, scale: Scale },
}

impl Default for LabelFont {
    fn default() -> Self {
        LabelFont::Bitmap(BitmapFont::default())
    }
}

impl LabelFont {
    pub fn load(path: &Path, size: f32) -> Result<LabelFont> {
        let bytes = fs::read(path).map_err(|source| Error::ReadFont {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| Error::InvalidFont {
            path: path.to_path_buf(),
        })?;
        Ok(LabelFont::Truetype {
            font,
            scale: Scale::uniform(size),
        })
    }

    pub fn ascent(&self) -> u32 {
        match self {
            LabelFont::Bitmap(bitmap) => bitmap.ascent(),
            LabelFont::Truetype { font, scale } => font.v_metrics(*scale).ascent.ceil() as u32,
        }
    }

    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            LabelFont::Bitmap(bitmap) => bitmap.text_width(text),
            LabelFont::Truetype { font, scale } => font
                .layout(text, *scale, point(0.0, 0.0))
                .last()
                .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                .map_or(0, |w| w.ceil() as u32),
        }
    }

    // `(x, y)` is the top-left corner of the text box.
    pub fn draw(&self, image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            LabelFont::Bitmap(bitmap) => bitmap.draw(image, x, y, text, color),
            LabelFont::Truetype { font, scale } => draw_text_mut(
                image,
                color,
                x.max(0) as u32,
                y.max(0) as u32,
                *scale,
                font,
                text,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn metrics_scale_with_font() {
        let font = BitmapFont::default();
        assert_eq!(font.ascent(), 21);
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("7"), 15);
        assert_eq!(font.text_width("007"), 51);
        assert_eq!(BitmapFont::new(1).text_width("42"), 11);
    }

    #[test]
    fn drawing_stays_inside_measured_box() {
        let font = BitmapFont::default();
        let mut image = RgbaImage::new(80, 40);
        font.draw(&mut image, 4, 6, "808", WHITE);
        let width = font.text_width("808");
        let mut lit = 0;
        for (x, y, px) in image.enumerate_pixels() {
            if *px == WHITE {
                lit += 1;
                assert!(x >= 4 && x < 4 + width, "x {} outside label", x);
                assert!(y >= 6 && y < 6 + font.ascent(), "y {} outside label", y);
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn unknown_characters_are_blank() {
        let font = BitmapFont::new(1);
        let mut image = RgbaImage::new(20, 10);
        font.draw(&mut image, 0, 0, "x", WHITE);
        assert!(image.pixels().all(|px| *px != WHITE));
    }

    #[test]
    fn default_label_font_is_bitmap() {
        let font = LabelFont::default();
        assert_eq!(font.ascent(), 21);
        assert_eq!(font.text_width("042"), 51);
    }

    #[test]
    fn missing_font_file_is_a_read_error() {
        let path = std::env::temp_dir().join("plantvis-no-such-font.ttf");
        match LabelFont::load(&path, 20.0) {
            Err(Error::ReadFont { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("missing font loaded"),
        }
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("plantvis-garbage-{}.ttf", std::process::id()));
        std::fs::write(&path, b"not a font at all").unwrap();
        let loaded = LabelFont::load(&path, 20.0);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(loaded, Err(Error::InvalidFont { .. })));
    }

    #[test]
    fn every_digit_has_ink() {
        for d in 0..10u32 {
            let ch = std::char::from_digit(d, 10).unwrap();
            assert!(glyph(ch).unwrap().iter().any(|row| *row != 0));
        }
    }
}
