use anyhow::{bail, Context, Result};
use polygeom::Point;

/// Parse `x,y` (optionally wrapped in parentheses) into a point.
pub fn parse_point(raw: &str) -> Result<Point> {
    let trimmed = raw
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    let Some((x, y)) = trimmed.split_once(',') else {
        bail!("expected `x,y`, got `{raw}`");
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("parsing x coordinate of `{raw}`"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("parsing y coordinate of `{raw}`"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_parenthesized() {
        assert_eq!(parse_point("4,3").unwrap(), Point::new(4.0, 3.0));
        assert_eq!(parse_point(" (-1.5, 2e1) ").unwrap(), Point::new(-1.5, 20.0));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("4").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,").is_err());
        let msg = format!("{:#}", parse_point("1,y").unwrap_err());
        assert!(msg.contains("y coordinate"));
    }
}
