//! Shape-directed chart selection for query results.
//!
//! The renderer is a pure mapping from a tabular result to a chart
//! description; actually drawing it is the presentation shell's problem.

use serde::Serialize;

use crate::result::{CellValue, QueryResult};

/// X-axis tick labels are rotated for readability.
pub const X_TICK_ROTATION_DEGREES: u32 = 90;

/// One bar of a two-column chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    /// Missing for null or non-numeric measure cells.
    pub value: Option<f64>,
}

/// One point of the long-form reshape: (category, series, value).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedPoint {
    pub category: String,
    pub series: String,
    pub value: Option<f64>,
}

/// Which chart variant to draw and the data feeding it.
///
/// Chosen once from the result's column count; each variant carries exactly
/// the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Single column: bars keyed by row ordinal on the X-axis.
    SingleSeries {
        y_label: String,
        values: Vec<Option<f64>>,
    },
    /// Two columns: column 0 is the categorical X-axis, column 1 the measure.
    TwoColumn {
        x_label: String,
        y_label: String,
        bars: Vec<Bar>,
    },
    /// Three or more columns: column 0 is the category axis and every
    /// remaining column becomes a distinct series sharing it.
    MultiSeriesGrouped {
        x_label: String,
        value_label: String,
        points: Vec<GroupedPoint>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &'static str {
        match self {
            ChartSpec::SingleSeries { .. } | ChartSpec::TwoColumn { .. } => {
                "Bar Chart of Query Results"
            }
            ChartSpec::MultiSeriesGrouped { .. } => {
                "Bar Chart of Query Results with Multiple Categories"
            }
        }
    }

    pub fn x_tick_rotation(&self) -> u32 {
        X_TICK_ROTATION_DEGREES
    }
}

/// Choose a chart for the result based on its column count.
///
/// Stateless and idempotent; a zero-row result yields the matching empty
/// variant rather than an error.
pub fn chart_for_result(result: &QueryResult) -> ChartSpec {
    match result.num_columns() {
        0 | 1 => single_series(result),
        2 => two_column(result),
        _ => multi_series(result),
    }
}

fn single_series(result: &QueryResult) -> ChartSpec {
    ChartSpec::SingleSeries {
        y_label: result.columns().first().cloned().unwrap_or_default(),
        values: result
            .rows()
            .iter()
            .map(|row| row.first().and_then(CellValue::as_f64))
            .collect(),
    }
}

fn two_column(result: &QueryResult) -> ChartSpec {
    ChartSpec::TwoColumn {
        x_label: result.columns()[0].clone(),
        y_label: result.columns()[1].clone(),
        bars: result
            .rows()
            .iter()
            .map(|row| Bar {
                category: category_label(&row[0]),
                value: row[1].as_f64(),
            })
            .collect(),
    }
}

/// Unpivot all non-first columns into (category, series, value) triples.
fn multi_series(result: &QueryResult) -> ChartSpec {
    let mut points = Vec::with_capacity(result.num_rows() * (result.num_columns() - 1));
    for row in result.rows() {
        let category = category_label(&row[0]);
        for (column, cell) in result.columns().iter().zip(row.iter()).skip(1) {
            points.push(GroupedPoint {
                category: category.clone(),
                series: column.clone(),
                value: cell.as_f64(),
            });
        }
    }
    ChartSpec::MultiSeriesGrouped {
        x_label: result.columns()[0].clone(),
        value_label: "Value".to_string(),
        points,
    }
}

fn category_label(cell: &CellValue) -> String {
    cell.to_string()
}
