use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::error::BoxoverError;
use crate::geom::Rect;

#[derive(Serialize)]
struct JsonReport {
    meta: Meta,
    collides: bool,
    rectangles: [Extent; 2],
    overlap: Option<Extent>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Extent {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

impl From<&Rect> for Extent {
    fn from(rect: &Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            w: rect.width,
            h: rect.height,
        }
    }
}

/// Write the JSON verdict report
pub fn write_json<W: Write>(
    out: &mut W,
    first: &Rect,
    second: &Rect,
    collides: bool,
) -> Result<()> {
    let report = JsonReport {
        meta: Meta {
            app: "boxover",
            version: env!("CARGO_PKG_VERSION"),
        },
        collides,
        rectangles: [first.into(), second.into()],
        overlap: first.intersection(second).map(|r| Extent::from(&r)),
    };

    let content = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{}", content).map_err(|source| BoxoverError::OutputWrite { source })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report_for(first: Rect, second: Rect) -> Value {
        let collides = first.intersects(&second);
        let mut out = Vec::new();
        write_json(&mut out, &first, &second, collides).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_overlapping_report() {
        let report = report_for(Rect::new(0, 0, 4, 4), Rect::new(2, 2, 4, 4));

        assert_eq!(report["collides"], Value::Bool(true));
        assert_eq!(report["rectangles"][1]["x"], 2);
        assert_eq!(report["rectangles"][1]["w"], 4);
        assert_eq!(report["overlap"]["x"], 2);
        assert_eq!(report["overlap"]["w"], 2);
        assert_eq!(report["meta"]["app"], "boxover");
    }

    #[test]
    fn test_disjoint_report_has_null_overlap() {
        let report = report_for(Rect::new(0, 0, 2, 2), Rect::new(5, 5, 2, 2));

        assert_eq!(report["collides"], Value::Bool(false));
        assert_eq!(report["overlap"], Value::Null);
    }
}
