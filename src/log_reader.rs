// Sequential reader over the plant log.
//
// Each line is one simulated timestep. A `Sampler` walks a step counter
// over the lines and only every `rate`-th line is rendered, the rest just
// move the clock forward.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};

// Position of a line on the simulated clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub step: usize,
    pub hour: u32,
}

impl Tick {
    pub fn is_sampled(self) -> bool {
        self.step == 0
    }
}

// `step` cycles through `0..rate`, `hour` grows by one on each wrap.
// `start` must be below `rate`, see `Config::validate`.
#[derive(Clone, Debug)]
pub struct Sampler {
    rate: usize,
    step: usize,
    hour: u32,
}

impl Sampler {
    pub fn new(rate: usize, start: usize) -> Sampler {
        Sampler {
            rate,
            step: start,
            hour: 0,
        }
    }

    pub fn current(&self) -> Tick {
        Tick {
            step: self.step,
            hour: self.hour,
        }
    }

    pub fn advance(&mut self) -> Tick {
        let tick = self.current();
        self.step += 1;
        if self.step == self.rate {
            self.step = 0;
            self.hour += 1;
        }
        tick
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub line: usize,
    pub tick: Tick,
    pub text: String,
}

pub struct LogReader<R = BufReader<File>> {
    input: R,
    buf: Vec<u8>,
    sampler: Sampler,
    line: usize,
}

impl LogReader {
    pub fn open(path: &Path, sampler: Sampler) -> Result<LogReader> {
        let file = File::open(path).map_err(|source| Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LogReader::from_reader(BufReader::new(file), sampler))
    }
}

impl<R: BufRead> LogReader<R> {
    pub fn from_reader(input: R, sampler: Sampler) -> LogReader<R> {
        LogReader {
            input,
            buf: Vec::new(),
            sampler,
            line: 0,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.line;
        self.buf.clear();
        match self.input.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(source) => return Some(Err(Error::ReadInput { line, source })),
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        // Bytes that are not UTF-8 become replacement characters; only
        // sampled lines are ever parsed.
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        self.line += 1;
        let tick = self.sampler.advance();
        trace!(line, step = tick.step, hour = tick.hour, "read record");
        Some(Ok(Record { line, tick, text }))
    }
}
