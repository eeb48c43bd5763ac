//! Capture directory loader
//!
//! Batch driver over the capture file convention: unit `n` is the pair
//! `tcp_addrs_<n>.txt` (one line, `"<source> <dest>"` dotted quads) and
//! `tcp_data_<n>.dat` (raw segment bytes). Units are validated in index
//! order and a unit that cannot be loaded or checked never aborts the
//! rest of the batch.

use std::fs;
use std::path::PathBuf;

use crate::addr::Ipv4Addr;
use crate::error::ValidationError;
use crate::validate;

/// Loader errors
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing capture file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Bad address line {0:?}: expected \"<source> <dest>\"")]
    AddressLine(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result alias for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Outcome of one capture unit.
///
/// `Ok(verdict)` means validation ran; `Err` means the unit could not be
/// loaded or checked. The two are never conflated.
#[derive(Debug)]
pub struct UnitOutcome {
    pub index: usize,
    pub outcome: LoaderResult<bool>,
}

/// A directory holding `tcp_addrs_<n>.txt` / `tcp_data_<n>.dat` pairs.
#[derive(Debug, Clone)]
pub struct CaptureDir {
    root: PathBuf,
}

impl CaptureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn addr_path(&self, index: usize) -> PathBuf {
        self.root.join(format!("tcp_addrs_{}.txt", index))
    }

    pub fn data_path(&self, index: usize) -> PathBuf {
        self.root.join(format!("tcp_data_{}.dat", index))
    }

    /// Counts consecutive complete pairs starting at unit 0.
    ///
    /// The first index missing either file of its pair ends the scan, so
    /// stray later files are ignored.
    pub fn scan(&self) -> usize {
        let mut count = 0;
        while self.addr_path(count).is_file() && self.data_path(count).is_file() {
            count += 1;
        }
        count
    }

    /// Loads unit `index` into addressing material plus segment bytes.
    pub fn load_unit(&self, index: usize) -> LoaderResult<(Ipv4Addr, Ipv4Addr, Vec<u8>)> {
        let addr_path = self.addr_path(index);
        if !addr_path.is_file() {
            return Err(LoaderError::MissingFile(addr_path));
        }
        let data_path = self.data_path(index);
        if !data_path.is_file() {
            return Err(LoaderError::MissingFile(data_path));
        }

        let text = fs::read_to_string(&addr_path)?;
        let (src, dst) = parse_addr_line(&text)?;
        let segment = fs::read(&data_path)?;
        Ok((src, dst, segment))
    }

    /// Loads and validates a single unit.
    pub fn validate_unit(&self, index: usize) -> LoaderResult<bool> {
        let (src, dst, segment) = self.load_unit(index)?;
        log::debug!(
            "unit {}: {} -> {}, {} byte segment",
            index,
            src,
            dst,
            segment.len()
        );
        Ok(validate::verify(src, dst, &segment)?)
    }
}

/// Parses the one-line `"<source> <dest>"` address file body.
///
/// Surrounding whitespace is tolerated; anything other than exactly two
/// fields is rejected.
fn parse_addr_line(text: &str) -> LoaderResult<(Ipv4Addr, Ipv4Addr)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [src, dst] => Ok((src.parse::<Ipv4Addr>()?, dst.parse::<Ipv4Addr>()?)),
        _ => Err(LoaderError::AddressLine(text.trim().to_string())),
    }
}

/// Validates units `0..count` of `capture`, one outcome per unit, in
/// index order.
///
/// With `count` of `None` the directory is scanned for consecutive
/// pairs; an explicit count forces exactly that many units and reports
/// missing files as unit errors.
pub fn run_units(capture: &CaptureDir, count: Option<usize>) -> Vec<UnitOutcome> {
    let total = count.unwrap_or_else(|| capture.scan());
    log::debug!("validating {} unit(s) under {}", total, capture.root().display());

    let mut outcomes = Vec::with_capacity(total);
    for index in 0..total {
        let outcome = capture.validate_unit(index);
        if let Err(err) = &outcome {
            log::warn!("unit {}: {}", index, err);
        }
        outcomes.push(UnitOutcome { index, outcome });
    }
    outcomes
}

/// Scans `dir` and validates everything it holds.
pub fn run(dir: impl Into<PathBuf>) -> Vec<UnitOutcome> {
    run_units(&CaptureDir::new(dir), None)
}
