//! `gradekit_layout` v1:
//! Marksheet grid planning kernel.
//!
//! Pure layout computation, no I/O:
//! - `conf` : constants and default palette presets
//! - `spec` : specs/models/errors
//! - `util` : pure helper functions
//! - `grid` : grid planning kernel
pub mod conf;
pub mod grid;
pub mod spec;
pub mod util;

pub use conf::{
    C_DEFAULT_CLASS_NAME, C_DEFAULT_EXAM_NAME, C_DEFAULT_FILENAME, C_DEFAULT_SCHOOL_NAME,
    C_DEFAULT_SHEET_NAME, N_COLS_MARKSHEET_MIN, derive_default_marksheet_formats,
};
pub use grid::plan_marksheet_grid;
pub use spec::{
    EnumCellValue, EnumFormatTag, PlanGridError, SpecCellFormat, SpecCellRegion,
    SpecColumnDescriptor, SpecColumnWidth, SpecGridLayout, SpecMarksheetMeta,
};
pub use util::{calculate_subtitle_split_point, derive_subject_groups, validate_marksheet_shape};
