//! Wire-payload model for the marksheet generator.

use gradekit_layout::{
    EnumCellValue, SpecColumnDescriptor, SpecMarksheetMeta, plan_marksheet_grid,
};
use serde::Deserialize;

use crate::conf::C_MIME_XLSX;
use crate::spec::MarksheetRequestError;
use crate::writer::write_grid_to_bytes;

////////////////////////////////////////////////////////////////////////////////
// #region RequestModels

/// JSON body accepted by the generator.
///
/// Key casing is part of the wire contract: `schoolName`/`className` are
/// camelCase while the remaining fields are snake_case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecMarksheetRequest {
    /// `(subject, subpart)` descriptor pairs; empty subpart means the
    /// subject is scored directly.
    pub columns: Vec<(String, String)>,
    /// Row-major cell scalars.
    pub rows: Vec<Vec<EnumRequestScalar>>,
    /// Worksheet name.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Suggested attachment filename.
    #[serde(default = "default_filename")]
    pub filename: String,
    /// School display name.
    #[serde(rename = "schoolName", default = "default_school_name")]
    pub school_name: String,
    /// Class display name.
    #[serde(rename = "className", default = "default_class_name")]
    pub class_name: String,
    /// Exam display name.
    #[serde(default = "default_exam_name")]
    pub exam_name: String,
}

/// Loosely typed request scalar prior to normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumRequestScalar {
    /// JSON null.
    Null,
    /// JSON boolean.
    Boolean(bool),
    /// JSON number.
    Number(f64),
    /// JSON string.
    Text(String),
}

/// Rendered workbook plus the attachment metadata the caller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMarksheetArtifact {
    /// Serialized single-sheet workbook.
    pub v_bytes: Vec<u8>,
    /// Suggested attachment filename.
    pub filename: String,
    /// Attachment content type.
    pub content_type: &'static str,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RequestResolution

impl SpecMarksheetRequest {
    /// Resolve the wire request into planner inputs.
    pub fn into_layout_inputs(
        self,
    ) -> (
        Vec<SpecColumnDescriptor>,
        Vec<Vec<EnumCellValue>>,
        SpecMarksheetMeta,
    ) {
        let l_columns = self
            .columns
            .into_iter()
            .map(|(c_subject, c_subpart)| SpecColumnDescriptor::new(c_subject, c_subpart))
            .collect();
        let l_rows = self
            .rows
            .into_iter()
            .map(|l_values| l_values.into_iter().map(convert_request_scalar).collect())
            .collect();
        let meta = SpecMarksheetMeta {
            school_name: self.school_name,
            class_name: self.class_name,
            exam_name: self.exam_name,
            sheet_name: self.sheet_name,
            filename: self.filename,
        };
        (l_columns, l_rows, meta)
    }
}

/// Normalize one wire scalar; booleans render as text.
fn convert_request_scalar(value: EnumRequestScalar) -> EnumCellValue {
    match value {
        EnumRequestScalar::Null => EnumCellValue::None,
        EnumRequestScalar::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        EnumRequestScalar::Number(val) => EnumCellValue::Number(val),
        EnumRequestScalar::Text(val) => EnumCellValue::String(val),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region EntryPoints

/// Plan and render one marksheet from a resolved request.
pub fn render_marksheet_from_request(
    request: SpecMarksheetRequest,
) -> Result<SpecMarksheetArtifact, MarksheetRequestError> {
    let (l_columns, l_rows, meta) = request.into_layout_inputs();
    let grid = plan_marksheet_grid(&l_columns, &l_rows, &meta)?;
    let v_bytes = write_grid_to_bytes(&grid)?;
    Ok(SpecMarksheetArtifact {
        v_bytes,
        filename: meta.filename,
        content_type: C_MIME_XLSX,
    })
}

/// Parse a JSON request body and render the finished workbook bytes.
pub fn render_marksheet_from_json_bytes(
    v_json: &[u8],
) -> Result<SpecMarksheetArtifact, MarksheetRequestError> {
    let request: SpecMarksheetRequest = serde_json::from_slice(v_json)?;
    render_marksheet_from_request(request)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

fn default_sheet_name() -> String {
    gradekit_layout::C_DEFAULT_SHEET_NAME.to_string()
}

fn default_filename() -> String {
    gradekit_layout::C_DEFAULT_FILENAME.to_string()
}

fn default_school_name() -> String {
    gradekit_layout::C_DEFAULT_SCHOOL_NAME.to_string()
}

fn default_class_name() -> String {
    gradekit_layout::C_DEFAULT_CLASS_NAME.to_string()
}

fn default_exam_name() -> String {
    gradekit_layout::C_DEFAULT_EXAM_NAME.to_string()
}
