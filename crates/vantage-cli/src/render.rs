//! Plain-text dashboard rendering.
//!
//! Consumes a dataset and a validated plan. Validation guarantees every
//! referenced column exists, but rendering still degrades per entry: a
//! chart or KPI that cannot be computed prints a one-line notice and the
//! rest of the dashboard renders anyway.

use colored::Colorize;

use vantage::{
    Aggregation, ChartSpec, ChartType, DashboardPlan, Dataset, KpiFormat, KpiSpec, Result,
    VantageError,
};

const BAR_WIDTH: usize = 30;
const MAX_GROUPS: usize = 8;
const HISTOGRAM_BINS: usize = 8;

/// Print the full dashboard.
pub fn render_dashboard(dataset: &Dataset, plan: &DashboardPlan) {
    println!("\n{}", plan.template_name.bold().underline());

    if !plan.kpis.is_empty() {
        println!();
        for kpi in &plan.kpis {
            match render_kpi(dataset, kpi) {
                Ok(line) => println!("  {}", line),
                Err(e) => println!(
                    "  {}",
                    format!("(could not compute '{}': {})", kpi.label, e).red()
                ),
            }
        }
    }

    for chart in &plan.visualizations {
        println!();
        if let Err(e) = render_chart(dataset, chart) {
            println!(
                "  {}",
                format!("(could not render '{}': {})", chart_label(chart), e).red()
            );
        }
    }

    if let Some(analysis) = &plan.analysis_summary {
        println!("\n{}", "Why this dashboard".bold());
        if !analysis.approach.is_empty() {
            println!("  {}", analysis.approach);
        }
        for line in &analysis.reasoning {
            println!("  - {}", line);
        }
    }
    println!();
}

fn chart_label(chart: &ChartSpec) -> &str {
    if chart.title.is_empty() {
        &chart.x_axis
    } else {
        &chart.title
    }
}

fn render_kpi(dataset: &Dataset, kpi: &KpiSpec) -> Result<String> {
    let index = dataset.column_index(&kpi.column).ok_or_else(|| {
        VantageError::EmptyData(format!("column '{}' not found", kpi.column))
    })?;

    let non_null: Vec<&str> = dataset
        .column_values(index)
        .filter(|v| !Dataset::is_null_value(v))
        .collect();
    let numbers: Vec<f64> = non_null
        .iter()
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();

    let value = match kpi.aggregation {
        Aggregation::Count => non_null.len() as f64,
        Aggregation::Sum => numbers.iter().sum(),
        Aggregation::Mean => {
            if numbers.is_empty() {
                return Err(VantageError::EmptyData(format!(
                    "no numeric values in '{}'",
                    kpi.column
                )));
            }
            numbers.iter().sum::<f64>() / numbers.len() as f64
        }
    };

    let rendered = match kpi.format {
        Some(KpiFormat::Percent) => format!("{:.1}%", value * 100.0),
        None => format_number(value),
    };

    let label = if kpi.label.is_empty() {
        kpi.column.as_str()
    } else {
        kpi.label.as_str()
    };

    Ok(if kpi.unit.is_empty() {
        format!("{}: {}", label.bold(), rendered)
    } else {
        format!("{}: {} {}", label.bold(), rendered, kpi.unit)
    })
}

fn render_chart(dataset: &Dataset, chart: &ChartSpec) -> Result<()> {
    let title = if chart.title.is_empty() {
        format!("{} ({} vs {})", chart.chart_type, chart.x_axis, chart.y_axis)
    } else {
        chart.title.clone()
    };
    println!("  {}", title.bold());

    match chart.chart_type {
        ChartType::Bar | ChartType::Pie => render_grouped(dataset, chart),
        ChartType::Histogram => render_histogram(dataset, chart),
        ChartType::Line | ChartType::Scatter => render_xy(dataset, chart),
    }
}

/// Bars and pies: aggregate the y column per x group. When the axes name
/// the same column, the group's row count stands in for the value.
fn render_grouped(dataset: &Dataset, chart: &ChartSpec) -> Result<()> {
    let x = column_index(dataset, &chart.x_axis)?;
    let y = column_index(dataset, &chart.y_axis)?;
    let count_mode = x == y;

    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for row in &dataset.rows {
        let Some(key) = row.get(x).map(|v| v.trim()) else {
            continue;
        };
        if Dataset::is_null_value(key) {
            continue;
        }

        let idx = match groups.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                groups.push((key.to_string(), Vec::new()));
                groups.len() - 1
            }
        };

        if count_mode {
            groups[idx].1.push(1.0);
        } else if let Some(Ok(v)) = row.get(y).map(|v| v.trim().parse::<f64>()) {
            groups[idx].1.push(v);
        }
    }

    let mut totals: Vec<(String, f64)> = groups
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(key, values)| {
            let total = if count_mode {
                values.len() as f64
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            (key, total)
        })
        .collect();

    if totals.is_empty() {
        return Err(VantageError::EmptyData(format!(
            "no plottable values for '{}'",
            chart.x_axis
        )));
    }

    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(MAX_GROUPS);

    if chart.chart_type == ChartType::Pie {
        let sum: f64 = totals.iter().map(|(_, v)| v).sum();
        for (key, value) in &totals {
            let share = if sum > 0.0 { value / sum * 100.0 } else { 0.0 };
            println!("    {:<16} {:>5.1}%", key, share);
        }
    } else {
        let max = totals.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        for (key, value) in &totals {
            let width = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            println!(
                "    {:<16} {} {}",
                key,
                "\u{2588}".repeat(width),
                format_number(*value)
            );
        }
    }

    Ok(())
}

fn render_histogram(dataset: &Dataset, chart: &ChartSpec) -> Result<()> {
    let index = column_index(dataset, &chart.x_axis)?;
    let values: Vec<f64> = dataset
        .column_values(index)
        .filter(|v| !Dataset::is_null_value(v))
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();

    if values.is_empty() {
        return Err(VantageError::EmptyData(format!(
            "no numeric values in '{}'",
            chart.x_axis
        )));
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        println!("    all {} values equal {}", values.len(), format_number(min));
        return Ok(());
    }

    let mut counts = [0usize; HISTOGRAM_BINS];
    let width = (max - min) / HISTOGRAM_BINS as f64;
    for v in &values {
        let bin = (((v - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(1).max(1);
    for (i, count) in counts.iter().enumerate() {
        let lo = min + width * i as f64;
        let hi = lo + width;
        let bar = ((count * BAR_WIDTH) as f64 / peak as f64).round() as usize;
        println!(
            "    {:>10} - {:<10} {} {}",
            format_number(lo),
            format_number(hi),
            "\u{2588}".repeat(bar),
            count
        );
    }

    Ok(())
}

/// Lines and scatters summarize textually rather than drawing.
fn render_xy(dataset: &Dataset, chart: &ChartSpec) -> Result<()> {
    let x = column_index(dataset, &chart.x_axis)?;
    let y = column_index(dataset, &chart.y_axis)?;

    let points: Vec<f64> = dataset
        .rows
        .iter()
        .filter(|row| {
            row.get(x)
                .map(|v| !Dataset::is_null_value(v))
                .unwrap_or(false)
        })
        .filter_map(|row| row.get(y).and_then(|v| v.trim().parse::<f64>().ok()))
        .collect();

    if points.is_empty() {
        return Err(VantageError::EmptyData(format!(
            "no plottable values for '{}'",
            chart.y_axis
        )));
    }

    let min = points.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = points.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!(
        "    {} points; {} from {} to {}",
        points.len(),
        chart.y_axis,
        format_number(min),
        format_number(max)
    );

    Ok(())
}

fn column_index(dataset: &Dataset, name: &str) -> Result<usize> {
    dataset
        .column_index(name)
        .ok_or_else(|| VantageError::EmptyData(format!("column '{}' not found", name)))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
