mod points;
mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use polygeom::prelude::*;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::points::parse_point;
use crate::report::{emit, ShapeReport};

#[derive(Parser)]
#[command(name = "polygeom")]
#[command(about = "Measure polygons and classify triangles, rectangles and squares")]
struct Cmd {
    /// Compare edges and angles with exact float equality
    #[arg(long, global = true)]
    strict: bool,

    /// Print one JSON document instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Args)]
struct PointsArg {
    /// Vertices in boundary order, each as `x,y`
    #[arg(
        long,
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    points: Vec<Point>,
}

#[derive(Subcommand)]
enum Action {
    /// Perimeter, angles and regularity of any polygon
    Shape(PointsArg),
    /// Classify a triangle and report its area
    Triangle(PointsArg),
    /// Validate a rectangle and report its area
    Rectangle(PointsArg),
    /// Validate a square and report its area
    Square(PointsArg),
    /// Pick the most specific shape type for the points
    Auto(PointsArg),
    /// Run the built-in example shapes
    Demo,
    /// Draw reproducible random shapes
    Sample {
        #[arg(long, value_enum, default_value_t = SampleKind::Triangle)]
        kind: SampleKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 3)]
        count: u64,
        /// Keep rectangles and squares axis-aligned
        #[arg(long)]
        no_rotation: bool,
    },
    /// Print version information as JSON
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleKind {
    Triangle,
    Rectangle,
    Square,
}

/// `RUST_LOG` directives when given, else the level picked by `-v`.
fn log_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(log_filter(rust_log.as_deref(), cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    let cfg = if cmd.strict {
        ShapeCfg::strict()
    } else {
        ShapeCfg::default()
    };
    let reports = match cmd.action {
        Action::Shape(arg) => vec![shape(arg.points, &cfg)?],
        Action::Triangle(arg) => vec![triangle(arg.points, &cfg)?],
        Action::Rectangle(arg) => vec![rectangle(arg.points, &cfg)?],
        Action::Square(arg) => vec![square(arg.points, &cfg)?],
        Action::Auto(arg) => vec![auto(arg.points, &cfg)?],
        Action::Demo => demo(&cfg)?,
        Action::Sample {
            kind,
            seed,
            count,
            no_rotation,
        } => sample(kind, seed, count, no_rotation, &cfg),
        Action::Version => return version(),
    };
    emit(&reports, cmd.json)
}

fn rejected(shape: &'static str, err: InvalidShapeError) -> anyhow::Error {
    tracing::debug!(shape, error = %err, "rejected");
    anyhow::Error::new(err).context(format!("building {shape}"))
}

fn shape(points: Vec<Point>, cfg: &ShapeCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "shape");
    let s = Shape::new(points).map_err(|e| rejected("shape", e))?;
    Ok(ShapeReport::new("Polygon", &s, None, cfg))
}

fn triangle(points: Vec<Point>, cfg: &ShapeCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "triangle");
    let t = classify_triangle_with(points, cfg).map_err(|e| rejected("triangle", e))?;
    tracing::info!(kind = %t.kind, "classified");
    Ok(ShapeReport::new(t.kind.name(), &t, Some(t.triangle.area()), cfg))
}

fn rectangle(points: Vec<Point>, cfg: &ShapeCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "rectangle");
    let r = Rectangle::new_with(points, cfg).map_err(|e| rejected("rectangle", e))?;
    Ok(ShapeReport::new("Rectangle", &r, Some(r.area()), cfg))
}

fn square(points: Vec<Point>, cfg: &ShapeCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "square");
    let s = Square::new_with(points, cfg).map_err(|e| rejected("square", e))?;
    Ok(ShapeReport::new("Square", &s, Some(s.area()), cfg))
}

fn auto(points: Vec<Point>, cfg: &ShapeCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "auto");
    let poly = Polygon::from_points(points, cfg).map_err(|e| rejected("polygon", e))?;
    tracing::info!(kind = poly.name(), "picked");
    Ok(ShapeReport::from_polygon(&poly, cfg))
}

fn demo(cfg: &ShapeCfg) -> Result<Vec<ShapeReport>> {
    tracing::info!("demo");
    let tri = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 12f64.sqrt()),
    ];
    let rect = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(0.0, 3.0),
    ];
    let sq = vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 2.0),
    ];
    Ok(vec![
        triangle(tri, cfg).context("demo triangle")?,
        rectangle(rect, cfg).context("demo rectangle")?,
        square(sq, cfg).context("demo square")?,
    ])
}

fn sample(
    kind: SampleKind,
    seed: u64,
    count: u64,
    no_rotation: bool,
    cfg: &ShapeCfg,
) -> Vec<ShapeReport> {
    tracing::info!(?kind, seed, count, no_rotation, "sample");
    let scfg = SampleCfg {
        random_rotation: !no_rotation,
        shape: *cfg,
        ..SampleCfg::default()
    };
    let mut out = Vec::new();
    for index in 0..count {
        let tok = ReplayToken::new(seed, index);
        let report = match kind {
            SampleKind::Triangle => draw_triangle(scfg, tok)
                .map(|t| ShapeReport::new(t.kind.name(), &t, Some(t.triangle.area()), cfg)),
            SampleKind::Rectangle => draw_rectangle(scfg, tok)
                .map(|r| ShapeReport::new("Rectangle", &r, Some(r.area()), cfg)),
            SampleKind::Square => {
                draw_square(scfg, tok).map(|s| ShapeReport::new("Square", &s, Some(s.area()), cfg))
            }
        };
        match report {
            Some(r) => out.push(r),
            // Rotated squares fail exact equality under --strict.
            None => tracing::debug!(index, "sample rejected, skipping"),
        }
    }
    out
}

fn version() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "name": "polygeom",
        "version": polygeom::VERSION,
        "code_rev": rev,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_sets_default_level() {
        assert_eq!(log_filter(None, 0).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(None, 1).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(None, 5).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_overrides_verbosity() {
        assert_eq!(
            log_filter(Some("trace"), 0).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(
            log_filter(Some("error"), 2).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn cli_parses_points_and_global_flags() {
        let cmd = Cmd::try_parse_from([
            "polygeom", "--json", "-vv", "rectangle", "--points", "0,0", "4,0", "4,3", "0,3",
        ])
        .unwrap();
        assert!(cmd.json);
        assert_eq!(cmd.verbose, 2);
        match cmd.action {
            Action::Rectangle(arg) => assert_eq!(arg.points.len(), 4),
            _ => panic!("expected rectangle"),
        }
    }
}
