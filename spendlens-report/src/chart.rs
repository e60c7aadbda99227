//! SVG pie chart of the expense distribution.

use svg::Document;
use svg::node::element::{Circle, Path, Rectangle, Text, path::Data};

use crate::summary::SpendingSummary;

/// Slice color cycle; legend entries use the same index.
const COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Pie chart geometry and labeling knobs
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Rendered width in pixels, legend included
    pub width: f64,
    /// Rendered height in pixels
    pub height: f64,
    /// Minimum slice share (percent) that still gets an in-slice label
    pub label_min_pct: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            label_min_pct: 1.0,
        }
    }
}

/// Render the spending distribution as a pie chart with a side legend.
///
/// Returns `None` when the summary holds no expense slices, in which case
/// no chart artifact is produced at all.
pub fn spending_pie(summary: &SpendingSummary, opts: &ChartOptions) -> Option<Document> {
    if summary.is_empty() {
        return None;
    }

    let margin = 24.0;
    let radius = (opts.height - 2.0 * margin - 40.0) / 2.0;
    let cx = margin + radius;
    let cy = margin + 40.0 + radius;

    let mut doc = Document::new()
        .set("viewBox", (0.0, 0.0, opts.width, opts.height))
        .set("width", opts.width)
        .set("height", opts.height)
        .set("font-family", "sans-serif");

    doc = doc.add(
        Text::new("Spending Distribution")
            .set("x", cx)
            .set("y", margin + 8.0)
            .set("text-anchor", "middle")
            .set("font-size", 16)
            .set("font-weight", "bold"),
    );

    // Start angle and label distance follow the original presentation:
    // 85 degrees, labels at 0.85 r, counterclockwise winding.
    let mut angle = 85.0_f64.to_radians();
    let point = |a: f64, dist: f64| (cx + dist * a.cos(), cy - dist * a.sin());

    for (i, slice) in summary.slices.iter().enumerate() {
        let sweep = slice.share_pct / 100.0 * std::f64::consts::TAU;
        let color = COLORS[i % COLORS.len()];

        if summary.slices.len() == 1 {
            // A single slice is the whole disc; an arc from a point back to
            // itself would render nothing.
            doc = doc.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", radius)
                    .set("fill", color),
            );
        } else {
            let (x0, y0) = point(angle, radius);
            let (x1, y1) = point(angle + sweep, radius);
            let large = if sweep > std::f64::consts::PI { 1.0 } else { 0.0 };
            let data = Data::new()
                .move_to((cx, cy))
                .line_to((x0, y0))
                .elliptical_arc_to((radius, radius, 0.0, large, 0.0, x1, y1))
                .close();
            doc = doc.add(Path::new().set("fill", color).set("d", data));
        }

        if slice.share_pct > opts.label_min_pct {
            let (lx, ly) = point(angle + sweep / 2.0, radius * 0.85);
            doc = doc.add(
                Text::new(format!("{:.1}%", slice.share_pct))
                    .set("x", lx)
                    .set("y", ly)
                    .set("text-anchor", "middle")
                    .set("font-size", 12)
                    .set("fill", "white"),
            );
        }

        angle += sweep;
    }

    let legend_x = cx + radius + 40.0;
    let mut legend_y = cy - (summary.slices.len() as f64 * 22.0) / 2.0;
    doc = doc.add(
        Text::new("Categories")
            .set("x", legend_x)
            .set("y", legend_y - 16.0)
            .set("font-size", 13)
            .set("font-weight", "bold"),
    );
    for (i, slice) in summary.slices.iter().enumerate() {
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", legend_x)
                    .set("y", legend_y)
                    .set("width", 14)
                    .set("height", 14)
                    .set("fill", COLORS[i % COLORS.len()]),
            )
            .add(
                Text::new(format!("{} (${:.2})", slice.category.label(), slice.total))
                    .set("x", legend_x + 20.0)
                    .set("y", legend_y + 11.0)
                    .set("font-size", 12),
            );
        legend_y += 22.0;
    }

    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SpendingSummary;
    use chrono::NaiveDate;
    use spendlens_core::{Transaction, categorize};

    fn summary_of(entries: &[(&str, f64)]) -> SpendingSummary {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let txns: Vec<Transaction> = entries
            .iter()
            .map(|(desc, amount)| Transaction::new(date, *desc, *amount, categorize(desc)))
            .collect();
        SpendingSummary::from_transactions(&txns)
    }

    #[test]
    fn test_no_expenses_no_chart() {
        let summary = summary_of(&[("PAYROLL", 2000.0)]);
        assert!(spending_pie(&summary, &ChartOptions::default()).is_none());
    }

    #[test]
    fn test_chart_has_title_and_legend() {
        let summary = summary_of(&[("STARBUCKS", -4.75), ("COMCAST", -80.0)]);
        let doc = spending_pie(&summary, &ChartOptions::default()).unwrap();
        let out = doc.to_string();
        assert!(out.contains("Spending Distribution"));
        assert!(out.contains("Dining"));
        assert!(out.contains("Utilities"));
        assert!(out.contains("Categories"));
    }

    #[test]
    fn test_single_category_renders_full_disc() {
        let summary = summary_of(&[("STARBUCKS", -4.75)]);
        let doc = spending_pie(&summary, &ChartOptions::default()).unwrap();
        let out = doc.to_string();
        assert!(out.contains("<circle"));
        assert!(out.contains("100.0%"));
    }

    #[test]
    fn test_tiny_slices_get_no_percent_label() {
        // 0.5% slice stays unlabeled; 99.5% slice is labeled.
        let summary = summary_of(&[("STARBUCKS", -0.5), ("RENT APRIL", -99.5)]);
        let doc = spending_pie(&summary, &ChartOptions::default()).unwrap();
        let out = doc.to_string();
        assert!(out.contains("99.5%"));
        assert!(!out.contains("0.5%"));
    }
}
