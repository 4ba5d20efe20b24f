//! `gradekit_io_xlsx` v1:
//! Workbook renderer for planned marksheet grids.
//!
//! - `conf`    : workbook limits and wire constants
//! - `spec`    : error types
//! - `util`    : pure helper functions
//! - `writer`  : grid-to-workbook renderer
//! - `request` : wire-payload entry points
pub mod conf;
pub mod request;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_MIME_XLSX, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL,
};
pub use request::{
    EnumRequestScalar, SpecMarksheetArtifact, SpecMarksheetRequest,
    render_marksheet_from_json_bytes, render_marksheet_from_request,
};
pub use spec::{MarksheetRequestError, RenderXlsxError};
pub use util::{sanitize_sheet_name, validate_grid_bounds};
pub use writer::{render_grid_to_workbook, write_grid_to_bytes};
