//! Command-line access to the frontkit interval and geometry operations.
//!
//! Every argument is a JSON value in the same shape the library serializes:
//! intervals are `[start, end]` pairs, rects are `{"x","y","w","h"}`, points
//! are `{"x","y"}` and vectors are `{"length","angle"}`. The result is written
//! to stdout as a single line of JSON. NaN values print as `null`.

use std::{io, iter};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use frontkit_geom::{
    Coord, Interval, Rect, Vector,
    interval::{intersection, multi_complement, multi_intersection, union},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::Level;

/// Evaluate interval and rectangle operations on JSON input.
#[derive(Debug, Parser)]
#[command(name = "frontkitctl", version)]
struct Args {
    /// Increase log verbosity. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Reject reversed intervals and rects with negative extents.
    #[arg(long, global = true)]
    strict: bool,

    /// Operation to run.
    #[command(subcommand)]
    command: Command,
}

/// Available operations.
#[derive(Debug, Subcommand)]
enum Command {
    /// Merge overlapping and touching intervals.
    Union {
        /// Intervals, e.g. `[[6,8],[1,7]]`.
        intervals: String,
    },
    /// Intersect two intervals. Prints `null` if they are disjoint.
    Intersect {
        /// First interval.
        a: String,
        /// Second interval.
        b: String,
    },
    /// The parts of a domain not covered by any interval.
    Complement {
        /// The domain interval.
        #[arg(long)]
        domain: String,
        /// Covering intervals.
        intervals: String,
    },
    /// The parts of a domain covered by at least one interval.
    Cover {
        /// The domain interval.
        #[arg(long)]
        domain: String,
        /// Covering intervals.
        intervals: String,
    },
    /// Test two rects for intersection and compute the overlap.
    RectIntersect {
        /// First rect.
        a: String,
        /// Second rect.
        b: String,
    },
    /// Find the edge of the first rect the second one touches.
    Touching {
        /// The rect whose edges are checked.
        a: String,
        /// The neighbouring rect.
        b: String,
        /// Distance within which edges count as touching.
        #[arg(long, default_value_t = 0.0)]
        pixel: f64,
    },
    /// Convert a point to a vector.
    Vector {
        /// The point.
        coord: String,
    },
    /// Convert a vector to a point.
    Coord {
        /// The vector.
        vector: String,
    },
    /// Euclidean distance between two points.
    Distance {
        /// First point.
        a: String,
        /// Second point.
        b: String,
    },
    /// Is a point strictly inside a rect?
    Inside {
        /// The point.
        point: String,
        /// The rect.
        rect: String,
    },
}

/// Parse a JSON argument, naming it in the error.
fn parse<T: DeserializeOwned>(what: &str, src: &str) -> Result<T> {
    serde_json::from_str(src).with_context(|| format!("could not parse {what} from {src:?}"))
}

/// Input parsing, with optional validation.
struct Reader {
    /// Apply the checked constructors to every value.
    strict: bool,
}

impl Reader {
    /// Parse a single interval.
    fn interval(&self, what: &str, src: &str) -> Result<Interval> {
        let iv: Interval = parse(what, src)?;
        if self.strict {
            Interval::try_new(iv.start, iv.end).with_context(|| format!("bad {what}"))?;
        }
        Ok(iv)
    }

    /// Parse a list of intervals.
    fn intervals(&self, src: &str) -> Result<Vec<Interval>> {
        let ivs: Vec<Interval> = parse("intervals", src)?;
        if self.strict {
            for (i, iv) in ivs.iter().enumerate() {
                Interval::try_new(iv.start, iv.end)
                    .with_context(|| format!("bad interval at index {i}"))?;
            }
        }
        Ok(ivs)
    }

    /// Parse a rect.
    fn rect(&self, what: &str, src: &str) -> Result<Rect> {
        let r: Rect = parse(what, src)?;
        if self.strict {
            Rect::try_new(r.x, r.y, r.w, r.h).with_context(|| format!("bad {what}"))?;
        }
        Ok(r)
    }
}

/// Run a command and produce its JSON result.
fn run(args: &Args) -> Result<Value> {
    tracing::debug!(command = ?args.command, strict = args.strict, "running");
    let rd = Reader {
        strict: args.strict,
    };
    let out = match &args.command {
        Command::Union { intervals } => json!(union(&rd.intervals(intervals)?)),
        Command::Intersect { a, b } => {
            let a = rd.interval("first interval", a)?;
            let b = rd.interval("second interval", b)?;
            json!(intersection(&a, &b))
        }
        Command::Complement { domain, intervals } => {
            let domain = rd.interval("domain", domain)?;
            json!(multi_complement(domain, &rd.intervals(intervals)?))
        }
        Command::Cover { domain, intervals } => {
            let domain = rd.interval("domain", domain)?;
            json!(multi_intersection(domain, &rd.intervals(intervals)?))
        }
        Command::RectIntersect { a, b } => {
            let a = rd.rect("first rect", a)?;
            let b = rd.rect("second rect", b)?;
            json!({
                "intersects": a.intersects(&b),
                "intersection": a.intersection(&b),
            })
        }
        Command::Touching { a, b, pixel } => {
            let a = rd.rect("first rect", a)?;
            let b = rd.rect("second rect", b)?;
            json!(a.touching(&b, *pixel))
        }
        Command::Vector { coord } => json!(parse::<Coord>("point", coord)?.to_vector()),
        Command::Coord { vector } => json!(parse::<Vector>("vector", vector)?.to_coord()),
        Command::Distance { a, b } => {
            let a: Coord = parse("first point", a)?;
            let b: Coord = parse("second point", b)?;
            json!(a.distance(&b))
        }
        Command::Inside { point, rect } => {
            let p: Coord = parse("point", point)?;
            json!(rd.rect("rect", rect)?.contains_point(p))
        }
    };
    Ok(out)
}

/// Install a stderr log subscriber at a level set by the verbosity count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Parse arguments, run the command and print its result.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let out = run(&args)?;
    println!("{out}");
    Ok(())
}
