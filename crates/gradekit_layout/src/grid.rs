//! Marksheet grid planning kernel.

use crate::conf::{
    C_LABEL_RANK, C_LABEL_STUDENT, C_LABEL_TOTAL, N_COL_IDX_TITLE_CAP, N_ROW_IDX_HEADER,
    N_ROW_IDX_SUBTITLE, N_ROW_IDX_TITLE, N_ROWS_HEADER_BAND, N_WIDTH_COL_SCORE,
    N_WIDTH_COL_STUDENT,
};
use crate::spec::{
    EnumCellValue, EnumFormatTag, PlanGridError, SpecCellRegion, SpecColumnDescriptor,
    SpecColumnWidth, SpecGridLayout, SpecMarksheetMeta,
};
use crate::util::{calculate_subtitle_split_point, derive_subject_groups, validate_marksheet_shape};

/// Plan the full marksheet grid from caller input.
///
/// Pure function of its inputs: identical inputs always produce an
/// identical layout, region order included.
pub fn plan_marksheet_grid(
    columns: &[SpecColumnDescriptor],
    rows: &[Vec<EnumCellValue>],
    meta: &SpecMarksheetMeta,
) -> Result<SpecGridLayout, PlanGridError> {
    validate_marksheet_shape(columns, rows)?;

    let n_cols_total = columns.len();
    let mut l_regions = Vec::new();

    // Title band: school name across the sheet, capped at the title width.
    l_regions.push(SpecCellRegion {
        row_idx_start: N_ROW_IDX_TITLE,
        row_idx_end: N_ROW_IDX_TITLE,
        col_idx_start: 0,
        col_idx_end: usize::min(n_cols_total - 1, N_COL_IDX_TITLE_CAP),
        value: EnumCellValue::String(meta.school_name.clone()),
        tag: EnumFormatTag::Title,
    });

    // Subtitle band: class left of the split column, exam right of it.
    let n_col_idx_split = calculate_subtitle_split_point(n_cols_total);
    l_regions.push(SpecCellRegion {
        row_idx_start: N_ROW_IDX_SUBTITLE,
        row_idx_end: N_ROW_IDX_SUBTITLE,
        col_idx_start: 0,
        col_idx_end: n_col_idx_split - 1,
        value: EnumCellValue::String(format!("Class: {}", meta.class_name)),
        tag: EnumFormatTag::Subtitle,
    });
    l_regions.push(SpecCellRegion {
        row_idx_start: N_ROW_IDX_SUBTITLE,
        row_idx_end: N_ROW_IDX_SUBTITLE,
        col_idx_start: n_col_idx_split,
        col_idx_end: n_cols_total - 1,
        value: EnumCellValue::String(format!("Exam: {}", meta.exam_name)),
        tag: EnumFormatTag::Subtitle,
    });

    // Header band: student column, subject groups, then total and rank.
    let n_row_idx_subrow = N_ROW_IDX_HEADER + 1;
    let mut n_col_cursor = 0usize;

    l_regions.push(create_vertical_header_region(
        n_col_cursor,
        C_LABEL_STUDENT,
        EnumFormatTag::Header,
    ));
    n_col_cursor += 1;

    let dict_groups = derive_subject_groups(&columns[1..n_cols_total - 2]);
    for (c_subject, l_subparts) in &dict_groups {
        let n_col_idx_start = n_col_cursor;

        if l_subparts.len() > 1 {
            l_regions.push(SpecCellRegion {
                row_idx_start: N_ROW_IDX_HEADER,
                row_idx_end: N_ROW_IDX_HEADER,
                col_idx_start: n_col_idx_start,
                col_idx_end: n_col_idx_start + l_subparts.len() - 1,
                value: EnumCellValue::String(c_subject.clone()),
                tag: EnumFormatTag::Header,
            });
        } else if l_subparts.len() == 1 {
            l_regions.push(SpecCellRegion {
                row_idx_start: N_ROW_IDX_HEADER,
                row_idx_end: N_ROW_IDX_HEADER,
                col_idx_start: n_col_idx_start,
                col_idx_end: n_col_idx_start,
                value: EnumCellValue::String(c_subject.clone()),
                tag: EnumFormatTag::Header,
            });
        } else {
            // No sub-row content: merge down and advance one column.
            l_regions.push(create_vertical_header_region(
                n_col_idx_start,
                c_subject,
                EnumFormatTag::Header,
            ));
            n_col_cursor += 1;
        }

        for c_subpart in l_subparts {
            l_regions.push(SpecCellRegion {
                row_idx_start: n_row_idx_subrow,
                row_idx_end: n_row_idx_subrow,
                col_idx_start: n_col_cursor,
                col_idx_end: n_col_cursor,
                value: EnumCellValue::String(c_subpart.clone()),
                tag: EnumFormatTag::Subheader,
            });
            n_col_cursor += 1;
        }
    }

    l_regions.push(create_vertical_header_region(
        n_col_cursor,
        C_LABEL_TOTAL,
        EnumFormatTag::TotalHeader,
    ));
    n_col_cursor += 1;
    l_regions.push(create_vertical_header_region(
        n_col_cursor,
        C_LABEL_RANK,
        EnumFormatTag::RankHeader,
    ));

    // Data band: one physical row per input row, values untransformed.
    let n_row_idx_data_start = N_ROW_IDX_HEADER + N_ROWS_HEADER_BAND;
    for (n_idx_row, l_values) in rows.iter().enumerate() {
        for (n_idx_col, value) in l_values.iter().enumerate() {
            l_regions.push(SpecCellRegion {
                row_idx_start: n_row_idx_data_start + n_idx_row,
                row_idx_end: n_row_idx_data_start + n_idx_row,
                col_idx_start: n_idx_col,
                col_idx_end: n_idx_col,
                value: value.clone(),
                tag: EnumFormatTag::Cell,
            });
        }
    }

    // Width plan: wide student column, uniform score columns through the
    // cursor position reached by the header band.
    let l_widths = vec![
        SpecColumnWidth {
            col_idx_start: 0,
            col_idx_end: 0,
            width: N_WIDTH_COL_STUDENT,
        },
        SpecColumnWidth {
            col_idx_start: 1,
            col_idx_end: n_col_cursor,
            width: N_WIDTH_COL_SCORE,
        },
    ];

    Ok(SpecGridLayout {
        sheet_name: meta.sheet_name.clone(),
        n_cols_total,
        regions: l_regions,
        widths: l_widths,
    })
}

fn create_vertical_header_region(
    col_idx: usize,
    label: &str,
    tag: EnumFormatTag,
) -> SpecCellRegion {
    SpecCellRegion {
        row_idx_start: N_ROW_IDX_HEADER,
        row_idx_end: N_ROW_IDX_HEADER + 1,
        col_idx_start: col_idx,
        col_idx_end: col_idx,
        value: EnumCellValue::String(label.to_string()),
        tag,
    }
}
