use std::{
    fmt, io,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, info};
use path_clean::PathClean;

use crate::utils::cases::BenchmarkCase;
use crate::utils::method::Method;
use crate::utils::writer::Writer;

/// Outcome of a single timed lookup.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub tag: &'static str,
    pub case: BenchmarkCase,
    pub count: usize,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{},{},{},{},{:.3}",
            self.tag,
            self.case.name,
            self.case.pattern,
            self.count,
            self.elapsed_ms()
        )
    }
}

pub struct Runner<'a> {
    base: PathBuf,
    method: Method,
    writer: &'a dyn Writer,
}

impl<'a> Runner<'a> {
    pub fn new(base: &Path, method: Method, writer: &'a dyn Writer) -> Self {
        Runner {
            base: base.to_path_buf(),
            method,
            writer,
        }
    }

    /// Times one lookup. Failures of the matching facility count as zero matches.
    pub fn measure(&self, case: &BenchmarkCase) -> Measurement {
        let joined = self.base.join(case.pattern).clean();

        let start = Instant::now();
        let count = self.method.count(&self.base, case.pattern, &joined);
        let elapsed = start.elapsed();

        let count = count.unwrap_or_else(|e| {
            debug!("Failed to match '{}': {}", joined.display(), e);
            0
        });
        Measurement {
            tag: self.method.tag(),
            case: *case,
            count,
            elapsed,
        }
    }

    pub fn run(&self, case: &BenchmarkCase) -> io::Result<()> {
        let measurement = self.measure(case);
        info!(
            "{} matched {} in {:?}",
            case.name, measurement.count, measurement.elapsed
        );
        self.writer.write(&measurement.to_string())
    }

    pub fn run_all(&self, cases: &[BenchmarkCase]) -> io::Result<()> {
        for case in cases {
            self.run(case)?;
        }
        Ok(())
    }
}
