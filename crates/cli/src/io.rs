use anyhow::{bail, Context, Result};
use pathsmooth::{Path as SmoothPath, PathSegment, Vec2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One input/output point as it appears in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: f64,
    pub y: f64,
}

impl From<Vec2<f64>> for PointRow {
    fn from(p: Vec2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRow> for Vec2<f64> {
    fn from(p: PointRow) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// JSON form of a path segment, tagged by `op`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SegmentRow {
    MoveTo {
        to: PointRow,
    },
    LineTo {
        to: PointRow,
    },
    QuadTo {
        ctrl: PointRow,
        to: PointRow,
    },
    CubicTo {
        ctrl1: PointRow,
        ctrl2: PointRow,
        to: PointRow,
    },
    Close,
}

impl From<&PathSegment> for SegmentRow {
    fn from(seg: &PathSegment) -> Self {
        match *seg {
            PathSegment::MoveTo(p) => SegmentRow::MoveTo { to: p.into() },
            PathSegment::LineTo(p) => SegmentRow::LineTo { to: p.into() },
            PathSegment::QuadTo { ctrl, to } => SegmentRow::QuadTo {
                ctrl: ctrl.into(),
                to: to.into(),
            },
            PathSegment::CubicTo { ctrl1, ctrl2, to } => SegmentRow::CubicTo {
                ctrl1: ctrl1.into(),
                ctrl2: ctrl2.into(),
                to: to.into(),
            },
            PathSegment::Close => SegmentRow::Close,
        }
    }
}

/// Output document written by `smooth`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathDoc {
    pub closed: bool,
    pub segments: Vec<SegmentRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polylines: Option<Vec<Vec<PointRow>>>,
}

impl PathDoc {
    pub fn new(path: &SmoothPath, samples: Option<usize>) -> Self {
        Self {
            closed: path.is_closed(),
            segments: path.iter().map(SegmentRow::from).collect(),
            polylines: samples.map(|k| {
                path.flatten(k)
                    .into_iter()
                    .map(|poly| poly.into_iter().map(PointRow::from).collect())
                    .collect()
            }),
        }
    }
}

/// Read points from `.json` (array of `{x, y}`) or `.csv` (columns `x`, `y`).
pub fn read_points(input: &str) -> Result<Vec<Vec2<f64>>> {
    if input.ends_with(".csv") {
        read_points_csv(input)
    } else {
        let bytes = fs::read(input).with_context(|| format!("reading {input}"))?;
        let rows: Vec<PointRow> =
            serde_json::from_slice(&bytes).with_context(|| format!("parsing {input}"))?;
        Ok(rows.into_iter().map(Vec2::from).collect())
    }
}

fn read_points_csv(input: &str) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {input}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Vec2::new(x, y)),
            _ => bail!("{input}: row {row} has a missing coordinate"),
        }
    }
    Ok(out)
}

pub fn write_points(out: &str, points: &[Vec2<f64>]) -> Result<()> {
    let rows: Vec<PointRow> = points.iter().copied().map(PointRow::from).collect();
    write_json(out, &rows)
}

pub fn write_json<T: Serialize>(out: &str, value: &T) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathsmooth::PathBuilder;
    use tempfile::tempdir;

    #[test]
    fn json_points_round_trip_through_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested/points.json");
        let file = file.to_str().unwrap();
        let pts = vec![Vec2::new(0.0, 1.0), Vec2::new(2.5, -3.0)];
        write_points(file, &pts).unwrap();
        assert_eq!(read_points(file).unwrap(), pts);
    }

    #[test]
    fn csv_points_are_read_by_column_name() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("points.csv");
        fs::write(&file, "y,x\n0,1\n2.5,3\n-1,4\n").unwrap();
        let pts = read_points(file.to_str().unwrap()).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(1.0, 0.0), Vec2::new(3.0, 2.5), Vec2::new(4.0, -1.0)]
        );
    }

    #[test]
    fn malformed_json_reports_the_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.json");
        fs::write(&file, "[{\"x\": 1}]").unwrap();
        let err = read_points(file.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn segments_serialize_with_op_tags() {
        let mut b = PathBuilder::new();
        b.move_to(Vec2::new(0.0, 0.0)).unwrap();
        b.cubic_to(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0), Vec2::new(3.0, 1.0))
            .unwrap();
        b.close().unwrap();
        let doc = PathDoc::new(&b.build(), Some(2));
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["closed"], true);
        assert_eq!(v["segments"][0]["op"], "move_to");
        assert_eq!(v["segments"][1]["op"], "cubic_to");
        assert_eq!(v["segments"][1]["ctrl2"]["x"], 2.0);
        assert_eq!(v["segments"][2]["op"], "close");
        // move + 2 samples + closing point
        assert_eq!(v["polylines"][0].as_array().unwrap().len(), 4);
    }
}
