//! Stateless helpers used by the workbook renderer.

use gradekit_layout::SpecGridLayout;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::RenderXlsxError;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to a valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridBounds

/// Reject grids with regions outside the worksheet bounds.
pub fn validate_grid_bounds(grid: &SpecGridLayout) -> Result<(), RenderXlsxError> {
    for region in &grid.regions {
        if region.row_idx_end >= N_NROWS_EXCEL_MAX || region.col_idx_end >= N_NCOLS_EXCEL_MAX {
            return Err(RenderXlsxError::ExceedsSheetLimits {
                row_idx_start: region.row_idx_start,
                row_idx_end: region.row_idx_end,
                col_idx_start: region.col_idx_start,
                col_idx_end: region.col_idx_end,
            });
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use gradekit_layout::{EnumCellValue, EnumFormatTag, SpecCellRegion};

    use super::*;

    #[test]
    fn test_sanitize_sheet_name_replaces_illegal_chars() {
        assert_eq!(sanitize_sheet_name("Mid*Term:2025?", "_"), "Mid_Term_2025_");
        assert_eq!(sanitize_sheet_name("a/b\\c[d]e", "_"), "a_b_c_d_e");
    }

    #[test]
    fn test_sanitize_sheet_name_trims_and_defaults() {
        assert_eq!(sanitize_sheet_name("  Sheet1  ", "_"), "Sheet1");
        assert_eq!(sanitize_sheet_name("", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
    }

    #[test]
    fn test_sanitize_sheet_name_caps_length() {
        let c_name = sanitize_sheet_name(&"x".repeat(40), "_");
        assert_eq!(c_name.len(), N_LEN_EXCEL_SHEET_NAME_MAX);
    }

    #[test]
    fn test_validate_grid_bounds_rejects_oversized_regions() {
        let region = SpecCellRegion {
            row_idx_start: N_NROWS_EXCEL_MAX,
            row_idx_end: N_NROWS_EXCEL_MAX,
            col_idx_start: 0,
            col_idx_end: 0,
            value: EnumCellValue::None,
            tag: EnumFormatTag::Cell,
        };
        let grid = SpecGridLayout {
            sheet_name: "Sheet1".to_string(),
            n_cols_total: 1,
            regions: vec![region],
            widths: vec![],
        };

        assert!(matches!(
            validate_grid_bounds(&grid),
            Err(RenderXlsxError::ExceedsSheetLimits { .. })
        ));
    }
}
