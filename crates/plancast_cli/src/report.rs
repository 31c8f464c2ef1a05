//! Console rendering: box tables, text histograms and currency summaries.
//!
//! This is the reporting sink for the engine's output: it consumes
//! projection paths and simulation results and never feeds anything back.

use plancast_core::format::{currency, price, units};
use plancast_core::stats::Histogram;
use plancast_core::PeriodState;
use plancast_engine::mc::{ByPeriodResult, SummaryStats};

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

/// Renders a box-drawing table from a header row and data rows.
///
/// The first column is left-aligned, the rest right-aligned; column widths
/// fit the widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let mut line = String::from(left);
        for (i, width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            line.push_str(if i + 1 == columns { right } else { mid });
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("│");
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i == 0 {
                line.push_str(&format!(" {cell:<width$} │"));
            } else {
                line.push_str(&format!(" {cell:>width$} │"));
            }
        }
        line.push('\n');
        line
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&format_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&format_row(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

fn optional_units(value: Option<f64>) -> String {
    value.map(units).unwrap_or_else(|| "-".to_string())
}

fn optional_price(value: Option<f64>) -> String {
    value.map(price).unwrap_or_else(|| "-".to_string())
}

/// Income-statement columns shared by the projection and by-period tables.
const STATEMENT_HEADERS: [&str; 9] = [
    "Year",
    "Units",
    "Avg Price",
    "Sales",
    "COGS",
    "Gross Profit",
    "Commissions",
    "G&A",
    "EBITDA",
];

/// Renders a deterministic projection path as a table.
pub fn projection_table(path: &[PeriodState]) -> String {
    let rows: Vec<Vec<String>> = path
        .iter()
        .map(|p| {
            vec![
                p.year.to_string(),
                optional_units(p.unit_sales),
                optional_price(p.avg_unit_price),
                currency(p.sales),
                currency(p.cogs),
                currency(p.gross_profit),
                currency(p.sales_commissions),
                currency(p.general_and_admin),
                currency(p.ebitda),
            ]
        })
        .collect();
    render_table(&STATEMENT_HEADERS, &rows)
}

/// Renders per-period expected metrics as a table.
pub fn by_period_table(result: &ByPeriodResult) -> String {
    let rows: Vec<Vec<String>> = result
        .periods
        .iter()
        .map(|p| {
            vec![
                p.year.to_string(),
                optional_units(p.unit_sales),
                optional_price(p.avg_unit_price),
                currency(p.sales),
                currency(p.cogs),
                currency(p.gross_profit),
                currency(p.sales_commissions),
                currency(p.general_and_admin),
                currency(p.ebitda),
            ]
        })
        .collect();
    render_table(&STATEMENT_HEADERS, &rows)
}

/// Renders a histogram as `#`-bars, one line per bin.
pub fn histogram_chart(histogram: &Histogram) -> String {
    let max_count = histogram.max_count().max(1);
    let mut out = String::new();
    for (lo, hi, count) in histogram.bins() {
        let bar_len = count * BAR_WIDTH / max_count;
        out.push_str(&format!(
            "  {:>14} .. {:>14} │{:<BAR_WIDTH$}│ {}\n",
            currency(lo),
            currency(hi),
            "#".repeat(bar_len),
            count
        ));
    }
    out
}

/// One-line mean/std-dev summary formatted as currency.
pub fn summary_line(label: &str, summary: &SummaryStats) -> String {
    format!(
        "{label}: mean = {}, std dev = {} (min {}, max {})",
        currency(summary.mean),
        currency(summary.std_dev),
        currency(summary.min),
        currency(summary.max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_period(year: i32) -> PeriodState {
        PeriodState {
            year,
            unit_sales: Some(101_000.0),
            avg_unit_price: Some(260.0),
            sales: 26_260_000.0,
            cogs: 12_342_200.0,
            gross_profit: 13_917_800.0,
            sales_commissions: 1_313_000.0,
            general_and_admin: 6_565_000.0,
            ebitda: 6_039_800.0,
        }
    }

    #[test]
    fn test_projection_table_contains_values() {
        let table = projection_table(&[sample_period(2019), sample_period(2020)]);
        assert!(table.contains("2019"));
        assert!(table.contains("101,000"));
        assert!(table.contains("$260.00"));
        assert!(table.contains("$26,260,000"));
        assert!(table.contains("EBITDA"));
    }

    #[test]
    fn test_table_handles_missing_units() {
        let mut period = sample_period(2019);
        period.unit_sales = None;
        period.avg_unit_price = None;
        let table = projection_table(&[period]);
        assert!(table.contains('-'));
    }

    #[test]
    fn test_table_rows_share_width() {
        let table = render_table(
            &["A", "B"],
            &[
                vec!["x".to_string(), "1".to_string()],
                vec!["longer".to_string(), "22".to_string()],
            ],
        );
        let line_widths: Vec<usize> = table
            .lines()
            .map(|l| l.chars().count())
            .collect();
        assert!(line_widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_histogram_chart_scales_bars() {
        let hist = Histogram::from_values(&[1.0, 1.0, 1.0, 2.0, 9.0], 2).unwrap();
        let chart = histogram_chart(&hist);
        assert_eq!(chart.lines().count(), 2);
        assert!(chart.contains('#'));
    }

    #[test]
    fn test_summary_line() {
        let summary = SummaryStats {
            mean: 6_565_000.0,
            std_dev: 250_000.0,
            min: 5_800_000.0,
            max: 7_400_000.0,
        };
        let line = summary_line("Alt 1: Premium Line", &summary);
        assert!(line.contains("$6,565,000"));
        assert!(line.contains("$250,000"));
    }
}
