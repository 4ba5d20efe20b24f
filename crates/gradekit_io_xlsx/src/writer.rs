//! Workbook renderer: planned grid layout to OpenXML byte buffer.

use std::collections::BTreeMap;

use gradekit_layout::{
    EnumCellValue, EnumFormatTag, SpecCellFormat, SpecCellRegion, SpecGridLayout,
    derive_default_marksheet_formats,
};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::spec::RenderXlsxError;
use crate::util::{sanitize_sheet_name, validate_grid_bounds};

/// Serialize a planned grid into a single-sheet workbook byte buffer.
pub fn write_grid_to_bytes(grid: &SpecGridLayout) -> Result<Vec<u8>, RenderXlsxError> {
    let mut workbook = render_grid_to_workbook(grid)?;
    Ok(workbook.save_to_buffer()?)
}

/// Materialize a planned grid into an in-memory workbook.
pub fn render_grid_to_workbook(grid: &SpecGridLayout) -> Result<Workbook, RenderXlsxError> {
    validate_grid_bounds(grid)?;

    let dict_fmts = derive_workbook_formats();
    let fmt_fallback = Format::new();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(&grid.sheet_name, "_"))?;

    for region in &grid.regions {
        let fmt = dict_fmts.get(&region.tag).unwrap_or(&fmt_fallback);
        write_region(worksheet, region, fmt)?;
    }

    for width in &grid.widths {
        for n_idx_col in width.col_idx_start..=width.col_idx_end {
            worksheet.set_column_width(cast_col_num(n_idx_col)?, width.width as f64)?;
        }
    }

    Ok(workbook)
}

fn write_region(
    worksheet: &mut Worksheet,
    region: &SpecCellRegion,
    fmt: &Format,
) -> Result<(), RenderXlsxError> {
    let n_row_start = cast_row_num(region.row_idx_start)?;
    let n_col_start = cast_col_num(region.col_idx_start)?;

    if !region.is_merged() {
        return write_cell_with_format(worksheet, n_row_start, n_col_start, &region.value, fmt);
    }

    let n_row_end = cast_row_num(region.row_idx_end)?;
    let n_col_end = cast_col_num(region.col_idx_end)?;
    match &region.value {
        EnumCellValue::String(val) => {
            worksheet.merge_range(n_row_start, n_col_start, n_row_end, n_col_end, val, fmt)?;
        }
        // Non-text content anchors in the top-left cell of the merge.
        value => {
            worksheet.merge_range(n_row_start, n_col_start, n_row_end, n_col_end, "", fmt)?;
            write_cell_with_format(worksheet, n_row_start, n_col_start, value, fmt)?;
        }
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    n_idx_row: u32,
    n_idx_col: u16,
    value: &EnumCellValue,
    fmt: &Format,
) -> Result<(), RenderXlsxError> {
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(n_idx_row, n_idx_col, fmt)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(n_idx_row, n_idx_col, val, fmt)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(n_idx_row, n_idx_col, *val, fmt)?;
        }
    }
    Ok(())
}

fn derive_workbook_formats() -> BTreeMap<EnumFormatTag, Format> {
    derive_default_marksheet_formats()
        .iter()
        .map(|(tag, spec)| (*tag, derive_workbook_format(spec)))
        .collect()
}

fn derive_workbook_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, RenderXlsxError> {
    u32::try_from(value).map_err(|_| RenderXlsxError::RowIndexOverflow(value))
}

fn cast_col_num(value: usize) -> Result<u16, RenderXlsxError> {
    u16::try_from(value).map_err(|_| RenderXlsxError::ColIndexOverflow(value))
}

#[cfg(test)]
mod tests {
    use gradekit_layout::{
        SpecColumnDescriptor, SpecMarksheetMeta, plan_marksheet_grid,
    };

    use super::*;

    fn sample_grid() -> SpecGridLayout {
        let l_columns = vec![
            SpecColumnDescriptor::new("Name", ""),
            SpecColumnDescriptor::new("Math", "Algebra"),
            SpecColumnDescriptor::new("Math", "Geometry"),
            SpecColumnDescriptor::new("Total", ""),
            SpecColumnDescriptor::new("Rank", ""),
        ];
        let l_rows = vec![vec![
            EnumCellValue::String("Asha".to_string()),
            EnumCellValue::Number(40.0),
            EnumCellValue::Number(37.0),
            EnumCellValue::Number(77.0),
            EnumCellValue::Number(1.0),
        ]];
        plan_marksheet_grid(&l_columns, &l_rows, &SpecMarksheetMeta::default()).unwrap()
    }

    #[test]
    fn test_write_grid_to_bytes_produces_zip_container() {
        let v_bytes = write_grid_to_bytes(&sample_grid()).unwrap();
        assert!(v_bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_write_grid_to_bytes_is_rejected_beyond_sheet_limits() {
        let mut grid = sample_grid();
        grid.regions[0].row_idx_end = crate::conf::N_NROWS_EXCEL_MAX;

        assert!(matches!(
            write_grid_to_bytes(&grid),
            Err(RenderXlsxError::ExceedsSheetLimits { .. })
        ));
    }

    #[test]
    fn test_merged_numeric_region_is_anchored_top_left() {
        let grid = SpecGridLayout {
            sheet_name: "Sheet1".to_string(),
            n_cols_total: 2,
            regions: vec![SpecCellRegion {
                row_idx_start: 0,
                row_idx_end: 0,
                col_idx_start: 0,
                col_idx_end: 1,
                value: EnumCellValue::Number(42.0),
                tag: EnumFormatTag::Cell,
            }],
            widths: vec![],
        };

        let v_bytes = write_grid_to_bytes(&grid).unwrap();
        assert!(v_bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_requested_sheet_name_is_sanitized() {
        let mut grid = sample_grid();
        grid.sheet_name = "Mid*Term".to_string();

        // An illegal requested name must not abort the render.
        assert!(write_grid_to_bytes(&grid).is_ok());
    }

    #[test]
    fn test_derive_workbook_formats_covers_all_tags() {
        let dict_fmts = derive_workbook_formats();
        assert_eq!(dict_fmts.len(), 7);
    }
}
