//! Shared marksheet layout models and error types.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellValueAndFormat

/// Normalized scalar cell value flowing through the planning pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

/// Cell format specification mapped onto workbook formats by the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Named format preset applied to a planned region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFormatTag {
    /// School-name band.
    Title,
    /// Class/exam band.
    Subtitle,
    /// Student/subject header cell.
    Header,
    /// Subpart header cell.
    Subheader,
    /// Total header cell.
    TotalHeader,
    /// Rank header cell.
    RankHeader,
    /// Body data cell.
    Cell,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region InputModels

/// One `(subject, subpart)` wire descriptor resolved to a physical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumnDescriptor {
    /// Top-level scored category, or pseudo-column label.
    pub subject: String,
    /// Scored subdivision; `None` when the subject is scored directly.
    pub subpart: Option<String>,
}

impl SpecColumnDescriptor {
    /// Build a descriptor from wire text, mapping an empty subpart to `None`.
    pub fn new(subject: impl Into<String>, subpart: impl Into<String>) -> Self {
        let c_subpart = subpart.into();
        Self {
            subject: subject.into(),
            subpart: if c_subpart.is_empty() {
                None
            } else {
                Some(c_subpart)
            },
        }
    }
}

/// Presentation metadata for one marksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMarksheetMeta {
    /// School display name (title band).
    pub school_name: String,
    /// Class display name (subtitle band, left).
    pub class_name: String,
    /// Exam display name (subtitle band, right).
    pub exam_name: String,
    /// Worksheet name.
    pub sheet_name: String,
    /// Suggested attachment filename; the kernel never opens it.
    pub filename: String,
}

impl Default for SpecMarksheetMeta {
    fn default() -> Self {
        Self {
            school_name: crate::conf::C_DEFAULT_SCHOOL_NAME.to_string(),
            class_name: crate::conf::C_DEFAULT_CLASS_NAME.to_string(),
            exam_name: crate::conf::C_DEFAULT_EXAM_NAME.to_string(),
            sheet_name: crate::conf::C_DEFAULT_SHEET_NAME.to_string(),
            filename: crate::conf::C_DEFAULT_FILENAME.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridModels

/// One planned rectangular region with inclusive row/column spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCellRegion {
    /// Inclusive start row index.
    pub row_idx_start: usize,
    /// Inclusive end row index.
    pub row_idx_end: usize,
    /// Inclusive start column index.
    pub col_idx_start: usize,
    /// Inclusive end column index.
    pub col_idx_end: usize,
    /// Region content.
    pub value: EnumCellValue,
    /// Format preset applied to every covered cell.
    pub tag: EnumFormatTag,
}

impl SpecCellRegion {
    /// Whether this region spans more than one physical cell.
    pub fn is_merged(&self) -> bool {
        self.row_idx_start != self.row_idx_end || self.col_idx_start != self.col_idx_end
    }
}

/// One column-width plan item over an inclusive column range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumnWidth {
    /// Inclusive start column index.
    pub col_idx_start: usize,
    /// Inclusive end column index.
    pub col_idx_end: usize,
    /// Width in character units.
    pub width: usize,
}

/// Planner output: the full serializer-agnostic sheet description.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecGridLayout {
    /// Caller-requested worksheet name (sanitized by the serializer).
    pub sheet_name: String,
    /// Resolved physical column count.
    pub n_cols_total: usize,
    /// All planned regions, in emission order.
    pub regions: Vec<SpecCellRegion>,
    /// Column-width plan.
    pub widths: Vec<SpecColumnWidth>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Caller input shape is invalid" errors for [`crate::grid::plan_marksheet_grid`].
///
/// No partial grid is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanGridError {
    /// `columns` is missing or empty.
    #[error("columns are required and must not be empty")]
    EmptyColumns,
    /// `columns` is shorter than the student/total/rank minimum.
    #[error("expected at least {expected} column descriptors, got {actual}")]
    TooFewColumns {
        /// Required descriptor minimum.
        expected: usize,
        /// Descriptors actually supplied.
        actual: usize,
    },
    /// `rows` is missing or empty.
    #[error("rows are required and must not be empty")]
    EmptyRows,
    /// One row's value count differs from the resolved column count.
    #[error("row {row_idx} has {n_values} values, expected {n_cols_expected}")]
    RowWidthMismatch {
        /// Zero-based offending row index.
        row_idx: usize,
        /// Values supplied in that row.
        n_values: usize,
        /// Resolved column count.
        n_cols_expected: usize,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
