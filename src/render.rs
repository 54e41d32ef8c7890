// Drawing one frame of the plant.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use imageproc::drawing::{draw_cubic_bezier_curve_mut, draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::geometry::{LeafGeometry, Point2D};
use crate::glyphs::LabelFont;

pub fn hour_label(hour: u32) -> String {
    format!("{:03}", hour)
}

pub fn frame_file_name(hour: u32) -> String {
    format!("plantvis{}.png", hour_label(hour))
}

pub struct Frame<'a> {
    config: &'a RenderConfig,
    font: &'a LabelFont,
    image: RgbaImage,
}

impl<'a> Frame<'a> {
    pub fn new(config: &'a RenderConfig, font: &'a LabelFont) -> Frame<'a> {
        let mut image = RgbaImage::new(config.width, config.height);
        draw_filled_rect_mut(
            &mut image,
            Rect::at(0, 0).of_size(config.width, config.height),
            config.background,
        );
        Frame {
            config,
            font,
            image,
        }
    }

    pub fn origin(&self) -> Point2D {
        self.config.origin()
    }

    #[cfg(test)]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    // Stem, midrib, then the blade outline as two quadratics bowed through
    // the lateral points.
    pub fn draw_leaf(&mut self, leaf: &LeafGeometry) {
        let origin = pixel(self.origin());
        let base = pixel(leaf.base);
        draw_line_segment_mut(&mut self.image, origin, base, self.config.stem);
        draw_line_segment_mut(&mut self.image, base, pixel(leaf.tip), self.config.midrib);
        for control in [leaf.left, leaf.right].iter() {
            let (a, b) = quad_to_cubic(leaf.base, *control, leaf.tip);
            draw_cubic_bezier_curve_mut(
                &mut self.image,
                point(leaf.base),
                point(leaf.tip),
                point(a),
                point(b),
                self.config.blade,
            );
        }
    }

    pub fn label(&mut self, text: &str) {
        let margin = self.config.label_margin as i32;
        let x = self.config.width as i32 - self.font.text_width(text) as i32 - margin;
        let y = self.config.height as i32 - self.font.ascent() as i32 - margin;
        self.font.draw(&mut self.image, x, y, text, self.config.label);
    }

    // Replaces any existing file.
    pub fn save(&self, dir: &Path, hour: u32) -> Result<PathBuf> {
        let path = dir.join(frame_file_name(hour));
        self.image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| Error::WriteFrame {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

pub fn render_frame<'a>(
    config: &'a RenderConfig,
    font: &'a LabelFont,
    leaves: &[LeafGeometry],
    hour: u32,
) -> Frame<'a> {
    let mut frame = Frame::new(config, font);
    for leaf in leaves {
        frame.draw_leaf(leaf);
    }
    frame.label(&hour_label(hour));
    frame
}

// Straight segments are drawn between whole pixels.
fn pixel(p: Point2D) -> (f32, f32) {
    (p.x.round() as f32, p.y.round() as f32)
}

fn point(p: Point2D) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

// Control points of the cubic tracing the same curve as the quadratic
// start-control-end.
fn quad_to_cubic(start: Point2D, control: Point2D, end: Point2D) -> (Point2D, Point2D) {
    let a = Point2D {
        x: start.x + 2.0 / 3.0 * (control.x - start.x),
        y: start.y + 2.0 / 3.0 * (control.y - start.y),
    };
    let b = Point2D {
        x: end.x + 2.0 / 3.0 * (control.x - end.x),
        y: end.y + 2.0 / 3.0 * (control.y - end.y),
    };
    (a, b)
}
