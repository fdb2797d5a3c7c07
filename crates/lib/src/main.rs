//! Runner which builds every day binary, runs them in order and aggregates
//! their benchmark reports.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, ensure, Context, Result};
use lib::cli::Report;
use serde::de::IntoDeserializer;
use serde::Deserialize;

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    /// Arguments after `--` are forwarded to every day binary.
    args: Vec<OsString>,
}

impl Opts {
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

struct Day {
    name: String,
    path: PathBuf,
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let mut days = build()?;
    days.sort_by(|a, b| a.name.cmp(&b.name));

    let mut total = Report::default();
    let mut failed = Vec::new();

    for day in days {
        if !run_day(&opts, &day, &mut total)? {
            failed.push(day.name);
        }
    }

    println!("total: {total}");
    ensure!(failed.is_empty(), "failed: {}", failed.join(", "));
    Ok(())
}

/// Build the day binaries in release mode, returning the produced artifacts.
fn build() -> Result<Vec<Day>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release", "-p", "aoc2021"]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let mut days = Vec::new();

    for value in serde_json::Deserializer::from_reader(stdout).into_iter() {
        let value: serde_json::Value = value?;

        if value.get("reason").and_then(|v| v.as_str()) != Some("compiler-artifact") {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        if !artifact.target.kind.iter().any(|k| k == "bin") {
            continue;
        }

        days.push(Day {
            name: artifact.target.name,
            path: artifact.executable.context("missing executable")?,
        });
    }

    let status = child.wait()?;
    ensure!(status.success(), "cargo build failed: {status}");
    Ok(days)
}

/// Run one day with `--json` and relay its output, returning whether the day
/// succeeded.
fn run_day(opts: &Opts, day: &Day, total: &mut Report) -> Result<bool> {
    let mut cmd = Command::new(&day.path);
    cmd.stdout(Stdio::piped());
    cmd.arg("--json");
    cmd.args(&opts.args[..]);

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    for value in serde_json::Deserializer::from_reader(stdout).into_iter() {
        let value: serde_json::Value = value?;
        let name = &day.name;

        match value.get("type").and_then(|v| v.as_str()) {
            Some("answer") => {
                let Data { data: answer } =
                    Data::<Answer>::deserialize(value.into_deserializer())?;

                if !opts.quiet {
                    println!("{name}: {}: {}", answer.name, answer.value);
                }
            }
            Some("report") => {
                let Data { data: report } =
                    Data::<Report>::deserialize(value.into_deserializer())?;

                if !opts.quiet {
                    println!("{name}: {report}");
                }

                *total += &report;
            }
            Some("message") => {
                let Data { data: message } =
                    Data::<Message>::deserialize(value.into_deserializer())?;

                if opts.is_verbose() || message.kind == "error" {
                    println!("{name}: {}: {}", message.kind, message.output);
                }
            }
            _ => {}
        }
    }

    let status = child.wait()?;

    if !status.success() {
        println!("{name}: {status}", name = day.name);
        return Ok(false);
    }

    if opts.is_verbose() {
        println!("{name}: {status}", name = day.name);
    }

    Ok(true)
}

#[derive(Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Answer {
    name: String,
    value: String,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}
