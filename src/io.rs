//! Text ingestion
//!
//! Reads whitespace-separated numbers and feeds them to
//! [`Histogram::add_number`] one at a time. Reading stops quietly at the
//! first token that does not parse as a number.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::binning::{AppendPolicy, Histogram};
use crate::error::HistogramError;

/// Error while loading values from a text source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read values: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
}

impl Histogram {
    /// Record every number read from `reader`
    ///
    /// Returns how many values were consumed, including ones the policy
    /// dropped.
    pub fn add_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        policy: AppendPolicy,
    ) -> Result<u64, LoadError> {
        let mut consumed = 0;
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                let Ok(value) = token.parse::<f64>() else {
                    debug!("stopped at non-numeric token {:?} after {} values", token, consumed);
                    return Ok(consumed);
                };
                self.add_number(value, policy)?;
                consumed += 1;
            }
        }
        Ok(consumed)
    }

    /// Record every number in the file at `path`
    pub fn add_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
        policy: AppendPolicy,
    ) -> Result<u64, LoadError> {
        let file = File::open(path)?;
        self.add_from_reader(BufReader::new(file), policy)
    }
}
