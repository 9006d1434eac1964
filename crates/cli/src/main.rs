use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::fmt::SubscriberBuilder;
use vector2d::naive_sum;
use vector2d::prelude::*;

mod input;

#[derive(Parser)]
#[command(name = "vector2d")]
#[command(version = vector2d::VERSION)]
#[command(about = "Inspect, rotate and sum 2D vectors")]
struct Cmd {
    /// Absolute tolerance for approximate comparisons
    #[arg(long, global = true, default_value_t = DEFAULT_EPS)]
    eps: f64,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Also write the JSON result to this path
    #[arg(long, global = true)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print length, angle and degrees of a vector
    Inspect {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Rotate a vector counter-clockwise, preserving its length
    Rotate {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        radians: f64,
    },
    /// Sum a JSON array of vectors with and without compensation
    Sum {
        #[arg(long)]
        input: String,
    },
}

#[derive(Debug, Serialize)]
struct VectorReport {
    x: f64,
    y: f64,
    length: f64,
    angle: f64,
    degrees: f64,
    display: String,
}

impl From<Vector2D> for VectorReport {
    fn from(v: Vector2D) -> Self {
        Self {
            x: v.x,
            y: v.y,
            length: v.length(),
            angle: v.angle(),
            degrees: v.degrees(),
            display: v.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SumReport {
    count: usize,
    compensated: [f64; 2],
    naive: [f64; 2],
    agree: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::Inspect { x, y } => inspect(Vector2D::new(x, y))?,
        Action::Rotate { x, y, radians } => rotate(Vector2D::new(x, y), radians)?,
        Action::Sum { ref input } => sum(input, cmd.eps)?,
    };
    emit(&value, cmd.pretty, cmd.out.as_deref())
}

fn inspect(v: Vector2D) -> Result<Value> {
    tracing::info!(x = v.x, y = v.y, "inspect");
    if v == Vector2D::ZERO {
        tracing::warn!("zero vector: angle is reported as 0");
    }
    Ok(serde_json::to_value(VectorReport::from(v))?)
}

fn rotate(v: Vector2D, radians: f64) -> Result<Value> {
    tracing::info!(x = v.x, y = v.y, radians, "rotate");
    let mut r = v;
    r.rotate(radians);
    if !(r.x.is_finite() && r.y.is_finite()) {
        tracing::warn!(x = r.x, y = r.y, "non-finite rotation result");
    }
    Ok(serde_json::to_value(VectorReport::from(r))?)
}

fn sum(input: &str, eps: f64) -> Result<Value> {
    let vectors = input::read_vectors(input)?;
    tracing::info!(input, count = vectors.len(), "sum");
    let report = sum_report(&vectors, eps)?;
    if !report.agree {
        tracing::warn!(
            compensated = ?report.compensated,
            naive = ?report.naive,
            eps,
            "naive sum drifted beyond tolerance"
        );
    }
    Ok(serde_json::to_value(report)?)
}

fn sum_report(vectors: &[Vector2D], eps: f64) -> Result<SumReport> {
    let compensated = Vector2D::sum(vectors)?;
    let naive = naive_sum(vectors);
    Ok(SumReport {
        count: vectors.len(),
        compensated: compensated.into(),
        naive: naive.into(),
        agree: compensated.approx_eq(naive, eps),
    })
}

fn emit(value: &Value, pretty: bool, out: Option<&str>) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    if let Some(out) = out {
        input::write_output(out, text.as_bytes())?;
        tracing::info!(out, "wrote");
    }
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn reports_library_version() {
        assert_eq!(Cmd::command().get_version(), Some(vector2d::VERSION));
        let err = Cmd::try_parse_from(["vector2d", "--version"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn negative_coordinates_parse() {
        let cmd = Cmd::try_parse_from(["vector2d", "inspect", "--x", "-3", "--y", "-4"]).unwrap();
        match cmd.action {
            Action::Inspect { x, y } => assert_eq!((x, y), (-3.0, -4.0)),
            _ => panic!("expected inspect"),
        }
        assert_eq!(cmd.eps, DEFAULT_EPS);
    }

    #[test]
    fn inspect_reports_polar_view() {
        let v = inspect(Vector2D::new(3.0, 4.0)).unwrap();
        assert_eq!(v["length"], 5.0);
        assert_eq!(v["display"], "X = 3, Y = 4, length = 5");
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate(Vector2D::new(1.0, 0.0), FRAC_PI_2).unwrap();
        assert!(v["x"].as_f64().unwrap().abs() < 1e-12);
        assert!((v["y"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sum_report_flags_drift_and_empty_input() {
        let vs = vec![Vector2D::new(1e-10, 0.0); 10_000];
        let report = sum_report(&vs, 0.0).unwrap();
        assert_eq!(report.count, 10_000);
        assert!(!report.agree);
        assert!(sum_report(&vs, 1e-12).unwrap().agree);

        let err = sum_report(&[], DEFAULT_EPS).unwrap_err();
        assert_eq!(err.downcast_ref::<SumError>(), Some(&SumError::Empty));
    }
}
