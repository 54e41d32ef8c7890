// Run parameters

use std::path::PathBuf;

use image::Rgba;

use crate::error::{Error, Result};
use crate::geometry::{Point2D, STEM_LENGTH};

pub const DEFAULT_SAMPLE_RATE: usize = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "vis";

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    // Log lines per simulated hour, only the first is rendered
    pub sample_rate: usize,
    pub start_step: usize,
    pub create_output_dir: bool,
    pub render: RenderConfig,
}

impl Config {
    pub fn new(input: PathBuf, output_dir: PathBuf) -> Config {
        Config {
            input,
            output_dir,
            sample_rate: DEFAULT_SAMPLE_RATE,
            start_step: 0,
            create_output_dir: false,
            render: RenderConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 || self.start_step >= self.sample_rate {
            return Err(Error::InvalidSampling {
                rate: self.sample_rate,
                start: self.start_step,
            });
        }
        Ok(())
    }
}

// Canvas layout and palette
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub stem_length: f64,
    // Gap between the hour label and the canvas edges
    pub label_margin: u32,
    // TrueType face for the label, the built-in digits when unset
    pub font: Option<PathBuf>,
    pub font_size: f32,
    pub background: Rgba<u8>,
    pub stem: Rgba<u8>,
    pub midrib: Rgba<u8>,
    pub blade: Rgba<u8>,
    pub label: Rgba<u8>,
}

impl RenderConfig {
    pub fn origin(&self) -> Point2D {
        Point2D {
            x: f64::from(self.width / 2),
            y: f64::from(self.height / 2),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 500,
            height: 500,
            stem_length: STEM_LENGTH,
            label_margin: 5,
            font: None,
            font_size: 20.0,
            background: Rgba([0, 0, 0, 255]),
            stem: Rgba([0, 255, 0, 255]),
            midrib: Rgba([255, 0, 0, 255]),
            blade: Rgba([0, 255, 0, 255]),
            label: Rgba([255, 255, 255, 255]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rate: usize, start: usize) -> Config {
        let mut cfg = Config::new("plant.out".into(), "vis".into());
        cfg.sample_rate = rate;
        cfg.start_step = start;
        cfg
    }

    #[test]
    fn defaults_are_valid() {
        assert!(config(DEFAULT_SAMPLE_RATE, 0).validate().is_ok());
        assert!(config(1, 0).validate().is_ok());
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert!(matches!(
            config(0, 0).validate(),
            Err(Error::InvalidSampling { rate: 0, start: 0 })
        ));
    }

    #[test]
    fn start_step_must_be_below_rate() {
        assert!(config(10, 9).validate().is_ok());
        assert!(config(10, 10).validate().is_err());
    }
}
