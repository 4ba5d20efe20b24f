//! Stateless helpers used by the grid planner.

use indexmap::IndexMap;

use crate::conf::{N_COLS_MARKSHEET_MIN, N_COLS_SUBTITLE_SPLIT_THRESHOLD};
use crate::spec::{EnumCellValue, PlanGridError, SpecColumnDescriptor};

////////////////////////////////////////////////////////////////////////////////
// #region SubjectGrouping

/// Group scored descriptors by subject, preserving first-occurrence order.
///
/// Unnamed subparts are not collected, so a subject scored directly maps to
/// an empty list and resolves to exactly one column.
pub fn derive_subject_groups(
    columns_scored: &[SpecColumnDescriptor],
) -> IndexMap<String, Vec<String>> {
    let mut dict_groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for descriptor in columns_scored {
        let l_subparts = dict_groups.entry(descriptor.subject.clone()).or_default();
        if let Some(c_subpart) = &descriptor.subpart {
            l_subparts.push(c_subpart.clone());
        }
    }
    dict_groups
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region BandGeometry

/// Subtitle split column: pinned at the threshold for wide sheets, halfway
/// otherwise.
///
/// The halved value is lopsided for small widths; that behavior is kept
/// as observed.
pub fn calculate_subtitle_split_point(n_cols_total: usize) -> usize {
    if n_cols_total > N_COLS_SUBTITLE_SPLIT_THRESHOLD {
        N_COLS_SUBTITLE_SPLIT_THRESHOLD
    } else {
        n_cols_total / 2
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ShapeValidation

/// Validate caller input shape before any region is planned.
pub fn validate_marksheet_shape(
    columns: &[SpecColumnDescriptor],
    rows: &[Vec<EnumCellValue>],
) -> Result<(), PlanGridError> {
    if columns.is_empty() {
        return Err(PlanGridError::EmptyColumns);
    }
    if columns.len() < N_COLS_MARKSHEET_MIN {
        return Err(PlanGridError::TooFewColumns {
            expected: N_COLS_MARKSHEET_MIN,
            actual: columns.len(),
        });
    }
    if rows.is_empty() {
        return Err(PlanGridError::EmptyRows);
    }

    let n_cols_expected = columns.len();
    for (n_idx_row, l_values) in rows.iter().enumerate() {
        if l_values.len() != n_cols_expected {
            return Err(PlanGridError::RowWidthMismatch {
                row_idx: n_idx_row,
                n_values: l_values.len(),
                n_cols_expected,
            });
        }
    }

    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
