//! Indicator table loading: header normalization, row selection and
//! duplicate collapsing on top of the raw CSV frame.

use std::path::Path;

use gts_model::{ColumnLayout, parse_year_column};
use polars::prelude::*;
use tracing::{debug, info, warn};

use crate::csv::{
    check_file_size_with_limit, normalize_header, read_csv_frame, read_csv_headers,
    validate_encoding,
};
use crate::error::{IngestError, Result};
use crate::options::{IngestOptions, RowFilter};

/// A wide indicator table together with its header classification.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    pub frame: DataFrame,
    pub layout: ColumnLayout,
}

impl IndicatorTable {
    /// Number of entity rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }
}

/// Reads a wide indicator CSV and classifies its columns.
///
/// The header row is classified before the body is parsed, so a file missing
/// an identifier column fails without loading the data.
pub fn read_indicator_csv(path: &Path, options: &IngestOptions) -> Result<IndicatorTable> {
    let span = tracing::info_span!("read_indicator_csv", path = %path.display());
    let _guard = span.enter();

    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let headers: Vec<String> = read_csv_headers(path)?
        .iter()
        .map(|h| normalize_column_name(h, options.year_prefix.as_deref()))
        .collect();
    ColumnLayout::classify(&headers, &options.identifier_columns)?;

    let frame = read_csv_frame(path)?;
    let table = prepare_indicator_frame(frame, options)?;

    info!(
        rows = table.height(),
        years = table.layout.year_columns().len(),
        ignored = table.layout.ignored_columns().len(),
        "loaded indicator table"
    );
    Ok(table)
}

/// Applies [`IngestOptions`] to an already loaded wide frame.
///
/// Steps, in order: trim headers and strip the year prefix, apply the row
/// filter, classify columns, collapse rows sharing an entity.
///
/// # Errors
///
/// [`IngestError::DuplicateEntities`] when rows share an entity and
/// `collapse_duplicates` is off.
pub fn prepare_indicator_frame(
    mut frame: DataFrame,
    options: &IngestOptions,
) -> Result<IndicatorTable> {
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str(), options.year_prefix.as_deref()))
        .collect();
    frame.set_column_names(names.iter().map(String::as_str))?;

    if let Some(filter) = &options.row_filter {
        frame = apply_row_filter(frame, filter)?;
    }

    let layout = ColumnLayout::classify(&names, &options.identifier_columns)?;
    for column in layout.ignored_columns() {
        debug!(column = %column, "column is not a year, skipping");
    }

    let entity = layout.entity_column();
    let distinct = frame
        .column(entity)?
        .as_materialized_series()
        .n_unique()?;
    if distinct == frame.height() {
        return Ok(IndicatorTable { frame, layout });
    }

    if !options.collapse_duplicates {
        return Err(IngestError::DuplicateEntities {
            column: entity.to_string(),
            rows: frame.height(),
            distinct,
        });
    }

    let collapsed = collapse_duplicate_rows(frame, &layout)?;
    let names: Vec<String> = collapsed
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();
    let layout = ColumnLayout::classify(&names, layout.identifier_columns())?;
    Ok(IndicatorTable {
        frame: collapsed,
        layout,
    })
}

/// Trims a header and strips `prefix` when what remains is a year.
fn normalize_column_name(raw: &str, prefix: Option<&str>) -> String {
    let name = normalize_header(raw);
    if let Some(prefix) = prefix
        && let Some(rest) = name.strip_prefix(prefix)
        && parse_year_column(rest).is_some()
    {
        return rest.to_string();
    }
    name
}

fn apply_row_filter(frame: DataFrame, filter: &RowFilter) -> Result<DataFrame> {
    if frame.column(&filter.column).is_err() {
        return Err(IngestError::ColumnNotFound {
            column: filter.column.clone(),
        });
    }
    let before = frame.height();
    let filtered = frame
        .lazy()
        .filter(
            col(filter.column.as_str())
                .cast(DataType::String)
                .eq(lit(filter.value.clone())),
        )
        .collect()?;
    debug!(
        column = %filter.column,
        value = %filter.value,
        before,
        after = filtered.height(),
        "applied row filter"
    );
    if filtered.height() == 0 {
        warn!(column = %filter.column, value = %filter.value, "row filter matched no rows");
    }
    Ok(filtered)
}

/// One row per entity: mean of each year column, first value of every other
/// identifier. Non-identifier, non-year columns are dropped.
fn collapse_duplicate_rows(frame: DataFrame, layout: &ColumnLayout) -> Result<DataFrame> {
    let before = frame.height();
    let mut aggs: Vec<Expr> = layout
        .identifier_columns()
        .iter()
        .skip(1)
        .map(|name| col(name.as_str()).first())
        .collect();
    aggs.extend(
        layout
            .year_columns()
            .iter()
            .map(|column| col(column.name.as_str()).cast(DataType::Float64).mean()),
    );

    let collapsed = frame
        .lazy()
        .group_by_stable([col(layout.entity_column())])
        .agg(aggs)
        .collect()?;
    debug!(before, after = collapsed.height(), "collapsed duplicate entity rows");
    Ok(collapsed)
}
