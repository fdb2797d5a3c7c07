//! CLI helpers.

mod bencher;
mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--help" => {
                    println!("Usage: [--bench] [--json] [--verbose] [--warmup <ms>] [--time-limit <ms>] [--count <n>]");
                    println!();
                    println!("Options:");
                    println!("  --bench            Run as a benchmark.");
                    println!("  --json             Output JSON lines instead of text.");
                    println!("  --verbose          Enable debug logging.");
                    println!("  --warmup <ms>      Benchmark warmup period in milliseconds.");
                    println!("  --time-limit <ms>  Benchmark sampling period in milliseconds.");
                    println!("  --count <n>        Run the benchmark exactly <n> times.");
                    std::process::exit(0);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set logger: {error}"))?;
        }

        Ok(opts)
    }

    /// Construct an output sink matching these options.
    pub fn output(&self) -> Output<io::StdoutLock<'static>> {
        Output::new(
            io::stdout().lock(),
            if self.json {
                OutputKind::Json
            } else {
                OutputKind::Normal
            },
        )
    }
}

/// A value which can be emitted as one or more named answers.
pub trait Answers {
    /// Emit the answers to the given output.
    fn emit<O>(&self, o: &mut Output<O>) -> io::Result<()>
    where
        O: Write;
}

macro_rules! single {
    ($ty:ty) => {
        impl Answers for $ty {
            #[inline]
            fn emit<O>(&self, o: &mut Output<O>) -> io::Result<()>
            where
                O: Write,
            {
                o.answer("part1", self)
            }
        }
    };
}

single!(usize);
single!(u8);
single!(u16);
single!(u32);
single!(u64);
single!(u128);
single!(i8);
single!(i16);
single!(i32);
single!(i64);
single!(i128);

impl<const N: usize> Answers for arrayvec::ArrayString<N> {
    #[inline]
    fn emit<O>(&self, o: &mut Output<O>) -> io::Result<()>
    where
        O: Write,
    {
        o.answer("part1", self)
    }
}

impl<A, B> Answers for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    #[inline]
    fn emit<O>(&self, o: &mut Output<O>) -> io::Result<()>
    where
        O: Write,
    {
        o.answer("part1", &self.0)?;
        o.answer("part2", &self.1)
    }
}

/// Emit the answers for a solved puzzle.
pub fn report_answers<T>(opts: &Opts, value: &T) -> Result<()>
where
    T: Answers,
{
    let mut o = opts.output();
    value.emit(&mut o)?;
    Ok(())
}

/// Timing summary over a collection of benchmark samples.
#[derive(Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report from a sorted collection of samples.
    pub(crate) fn from_samples(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().copied().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Pick the percentile sample out of a sorted collection, where `n` is in
/// units of one hundredth of a percent.
fn percentile(sorted: &[Duration], n: usize) -> Duration {
    if sorted.is_empty() {
        return Duration::default();
    }

    let index = (sorted.len().saturating_mul(n) / 10000).min(sorted.len() - 1);
    sorted[index]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{percentile, Report};

    #[test]
    fn percentiles() {
        let samples = (1..=100)
            .map(Duration::from_millis)
            .collect::<Vec<_>>();

        assert_eq!(percentile(&samples, 5000), Duration::from_millis(51));
        assert_eq!(percentile(&samples, 9900), Duration::from_millis(100));
        assert_eq!(percentile(&[], 5000), Duration::default());
    }

    #[test]
    fn from_samples() {
        let samples = [1, 2, 3, 4]
            .map(Duration::from_millis);

        let report = Report::from_samples(&samples);
        assert_eq!(report.count, 4);
        assert_eq!(report.min, Duration::from_millis(1));
        assert_eq!(report.max, Duration::from_millis(4));
        assert_eq!(report.avg, Duration::from_micros(2500));
    }

    #[test]
    fn aggregation() {
        let mut total = Report::default();

        total += &Report::from_samples(&[Duration::from_millis(2)]);
        total += &Report::from_samples(&[Duration::from_millis(3)]);

        assert_eq!(total.count, 2);
        assert_eq!(total.avg, Duration::from_millis(5));
    }
}
