//! Layout math of the SVG charts, kept free of DOM so it runs natively.

use contracts::dashboards::chart::series_total;
use contracts::dashboards::ChartSlice;

pub const PALETTE: [&str; 8] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Empty when the segment is the whole circle; draw a `<circle>` instead.
    pub path: String,
    pub color: &'static str,
}

impl PieSegment {
    pub fn is_full_circle(&self) -> bool {
        self.path.is_empty()
    }
}

/// Point on the circle; 0° is twelve o'clock, angles grow clockwise.
pub fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

pub fn arc_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let (x1, y1) = polar(cx, cy, r, start_deg);
    let (x2, y2) = polar(cx, cy, r, end_deg);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x1, y1, r, r, large_arc, x2, y2
    )
}

/// Zero and negative slices are skipped; an all-zero series yields nothing.
pub fn pie_segments(series: &[ChartSlice], cx: f64, cy: f64, r: f64) -> Vec<PieSegment> {
    let total = series_total(series);
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    series
        .iter()
        .enumerate()
        .filter(|(_, s)| s.value > 0.0)
        .map(|(i, s)| {
            let fraction = s.value / total;
            let sweep = fraction * 360.0;
            let start = angle;
            let end = angle + sweep;
            angle = end;
            let path = if fraction >= 0.9999 {
                String::new()
            } else {
                arc_path(cx, cy, r, start, end)
            };
            PieSegment {
                label: s.label.clone(),
                value: s.value,
                percent: fraction * 100.0,
                start_angle: start,
                end_angle: end,
                path,
                color: color_for(i),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    pub width: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Horizontal bars scaled so the largest value fills `max_width`.
pub fn bar_rows(series: &[ChartSlice], max_width: f64, row_height: f64) -> Vec<BarRow> {
    let max = series
        .iter()
        .map(|s| s.value)
        .fold(0.0_f64, f64::max);
    series
        .iter()
        .enumerate()
        .map(|(i, s)| BarRow {
            label: s.label.clone(),
            value: s.value,
            width: if max > 0.0 {
                (s.value.max(0.0) / max) * max_width
            } else {
                0.0
            },
            y: i as f64 * row_height,
            color: color_for(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_polar() {
        let (x, y) = polar(50.0, 50.0, 50.0, 0.0);
        assert!(approx(x, 50.0) && approx(y, 0.0));
        let (x, y) = polar(50.0, 50.0, 50.0, 90.0);
        assert!(approx(x, 100.0) && approx(y, 50.0));
    }

    #[test]
    fn test_pie_segments_halves() {
        let series = vec![ChartSlice::new("A", 3.0), ChartSlice::new("B", 3.0)];
        let segs = pie_segments(&series, 50.0, 50.0, 50.0);
        assert_eq!(segs.len(), 2);
        assert!(approx(segs[0].percent, 50.0));
        assert!(approx(segs[0].end_angle, 180.0));
        assert!(approx(segs[1].start_angle, 180.0));
        assert!(approx(segs[1].end_angle, 360.0));
        assert_eq!(
            segs[0].path,
            "M 50.00 50.00 L 50.00 0.00 A 50.00 50.00 0 0 1 50.00 100.00 Z"
        );
        assert_ne!(segs[0].color, segs[1].color);
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let series = vec![ChartSlice::new("big", 3.0), ChartSlice::new("small", 1.0)];
        let segs = pie_segments(&series, 50.0, 50.0, 50.0);
        assert!(segs[0].path.contains(" 0 1 1 "));
        assert!(segs[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let series = vec![ChartSlice::new("A", 0.0), ChartSlice::new("B", 7.0)];
        let segs = pie_segments(&series, 50.0, 50.0, 50.0);
        assert_eq!(segs.len(), 1);
        assert!(segs[0].is_full_circle());
        assert!(approx(segs[0].percent, 100.0));
    }

    #[test]
    fn test_pie_empty_series() {
        assert!(pie_segments(&[], 50.0, 50.0, 50.0).is_empty());
        assert!(pie_segments(&[ChartSlice::new("A", 0.0)], 50.0, 50.0, 50.0).is_empty());
    }

    #[test]
    fn test_bar_rows_scale_to_max() {
        let series = vec![
            ChartSlice::new("A", 50.0),
            ChartSlice::new("B", 100.0),
            ChartSlice::new("C", 0.0),
        ];
        let rows = bar_rows(&series, 200.0, 30.0);
        assert!(approx(rows[0].width, 100.0));
        assert!(approx(rows[1].width, 200.0));
        assert!(approx(rows[2].width, 0.0));
        assert!(approx(rows[2].y, 60.0));
    }

    #[test]
    fn test_bar_rows_all_zero() {
        let rows = bar_rows(&[ChartSlice::new("A", 0.0)], 200.0, 30.0);
        assert!(approx(rows[0].width, 0.0));
    }
}
