use anyhow::Result;
use polygeom::{Polygon, Polygonal, ShapeCfg};
use serde::Serialize;

/// Computed values for one shape, printed as text or JSON.
#[derive(Debug, Serialize)]
pub struct ShapeReport {
    pub kind: String,
    pub points: Vec<[f64; 2]>,
    pub edges: Vec<f64>,
    pub perimeter: f64,
    pub angles: Vec<f64>,
    pub regular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl ShapeReport {
    pub fn new(
        kind: impl Into<String>,
        shape: &impl Polygonal,
        area: Option<f64>,
        cfg: &ShapeCfg,
    ) -> Self {
        Self {
            kind: kind.into(),
            points: shape.points().iter().map(|p| [p.x, p.y]).collect(),
            edges: shape.edges().to_vec(),
            perimeter: shape.perimeter(),
            angles: shape.angles(),
            regular: shape.is_regular_with(cfg),
            area,
        }
    }

    pub fn from_polygon(poly: &Polygon, cfg: &ShapeCfg) -> Self {
        Self::new(poly.name(), poly, poly.area(), cfg)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("The type of shape is: {}\n", self.kind);
        if let Some(area) = self.area {
            out.push_str(&format!("Area: {area:.6}\n"));
        }
        out.push_str(&format!("Perimeter: {:.6}\n", self.perimeter));
        let angles: Vec<String> = self.angles.iter().map(|a| format!("{a:.6}")).collect();
        out.push_str(&format!("Angles (deg): [{}]\n", angles.join(", ")));
        out.push_str(&format!("Regular: {}\n", self.regular));
        out
    }
}

/// Print reports to stdout: one JSON array, or text blocks separated by blank lines.
pub fn emit(reports: &[ShapeReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        let blocks: Vec<String> = reports.iter().map(ShapeReport::to_text).collect();
        print!("{}", blocks.join("\n"));
    }
    Ok(())
}
