// Read the plant log, lay out each sampled hour and write it as a PNG frame.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geometry;
use crate::glyphs::LabelFont;
use crate::leaf;
use crate::log_reader::{LogReader, Sampler};
use crate::render;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub frames: usize,
}

pub fn run(config: &Config) -> Result<Summary> {
    config.validate()?;
    prepare_output_dir(&config.output_dir, config.create_output_dir)?;
    let font = match &config.render.font {
        Some(path) => LabelFont::load(path, config.render.font_size)?,
        None => LabelFont::default(),
    };

    let sampler = Sampler::new(config.sample_rate, config.start_step);
    let mut reader = LogReader::open(&config.input, sampler)?;
    let mut frames = 0;

    for record in reader.by_ref() {
        let record = record?;
        if !record.tick.is_sampled() {
            continue;
        }
        let hour = record.tick.hour;
        debug!(hour, line = record.line, tokens = %record.text, "Hour {}:", hour);

        let leaves = leaf::parse_record(&record.text, record.line)?;
        let shapes = geometry::layout(&leaves, config.render.origin(), config.render.stem_length);
        let frame = render::render_frame(&config.render, &font, &shapes, hour);
        let path = frame.save(&config.output_dir, hour)?;
        info!(hour, leaves = shapes.len(), path = %path.display(), "wrote frame");
        frames += 1;
    }

    Ok(Summary {
        lines: reader.lines_read(),
        frames,
    })
}

fn prepare_output_dir(dir: &Path, create: bool) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    if !create {
        return Err(Error::MissingOutputDir {
            path: dir.to_path_buf(),
        });
    }
    fs::create_dir_all(dir).map_err(|source| Error::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(path = %dir.display(), "created output directory");
    Ok(())
}
