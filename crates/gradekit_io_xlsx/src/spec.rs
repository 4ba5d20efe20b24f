//! Renderer and wire-request error types.

use gradekit_layout::PlanGridError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Workbook serialization failed" errors for [`crate::writer`].
#[derive(Debug, Error)]
pub enum RenderXlsxError {
    /// A planned region falls outside the worksheet bounds.
    #[error(
        "region exceeds worksheet bounds: rows {row_idx_start}..={row_idx_end}, \
         cols {col_idx_start}..={col_idx_end}"
    )]
    ExceedsSheetLimits {
        /// Inclusive start row index of the offending region.
        row_idx_start: usize,
        /// Inclusive end row index of the offending region.
        row_idx_end: usize,
        /// Inclusive start column index of the offending region.
        col_idx_start: usize,
        /// Inclusive end column index of the offending region.
        col_idx_end: usize,
    },
    /// Row index does not fit the workbook row type.
    #[error("row index overflow: {0}")]
    RowIndexOverflow(usize),
    /// Column index does not fit the workbook column type.
    #[error("column index overflow: {0}")]
    ColIndexOverflow(usize),
    /// Underlying workbook writer failure.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Wire-request failures, tagged by pipeline stage so the boundary layer
/// can translate each tag to its wire-level response.
#[derive(Debug, Error)]
pub enum MarksheetRequestError {
    /// Request body is not a valid marksheet payload.
    #[error("invalid marksheet request: {0}")]
    Parse(#[from] serde_json::Error),
    /// Caller input shape rejected by the grid planner.
    #[error(transparent)]
    Layout(#[from] PlanGridError),
    /// Workbook serialization failed.
    #[error(transparent)]
    Render(#[from] RenderXlsxError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
