//! Marksheet constants and default palette presets.

use std::collections::BTreeMap;

use crate::spec::{EnumFormatTag, SpecCellFormat};

/// Minimum descriptor count: student pseudo-column plus total and rank.
pub const N_COLS_MARKSHEET_MIN: usize = 3;
/// Last column index reachable by the title merge.
pub const N_COL_IDX_TITLE_CAP: usize = 14;
/// Column count above which the subtitle split column is pinned.
pub const N_COLS_SUBTITLE_SPLIT_THRESHOLD: usize = 10;

/// Sheet row carrying the school name.
pub const N_ROW_IDX_TITLE: usize = 0;
/// Sheet row carrying the class/exam pair.
pub const N_ROW_IDX_SUBTITLE: usize = 1;
/// First row of the two-row header band.
pub const N_ROW_IDX_HEADER: usize = 2;
/// Header band height in physical rows.
pub const N_ROWS_HEADER_BAND: usize = 2;

/// Fixed student-name column width in character units.
pub const N_WIDTH_COL_STUDENT: usize = 20;
/// Uniform width for score/total/rank columns.
pub const N_WIDTH_COL_SCORE: usize = 12;

/// Student pseudo-column header label.
pub const C_LABEL_STUDENT: &str = "STUDENT NAME";
/// Total pseudo-column header label.
pub const C_LABEL_TOTAL: &str = "TOTAL";
/// Rank pseudo-column header label.
pub const C_LABEL_RANK: &str = "RANK";

/// Default school display name.
pub const C_DEFAULT_SCHOOL_NAME: &str = "My School Name";
/// Default class display name.
pub const C_DEFAULT_CLASS_NAME: &str = "Class 10A";
/// Default exam display name.
pub const C_DEFAULT_EXAM_NAME: &str = "Mid Term 2025";
/// Default worksheet name.
pub const C_DEFAULT_SHEET_NAME: &str = "Sheet1";
/// Default attachment filename.
pub const C_DEFAULT_FILENAME: &str = "marksheet.xlsx";

/// Build the fixed per-tag format presets used by the serializer.
pub fn derive_default_marksheet_formats() -> BTreeMap<EnumFormatTag, SpecCellFormat> {
    let cfg_banner_fmt_spec = SpecCellFormat {
        bold: Some(true),
        align: Some("center".to_string()),
        valign: Some("vcenter".to_string()),
        border: Some(1),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFormatTag::Title,
        SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            valign: Some("vcenter".to_string()),
            font_size: Some(14),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFormatTag::Subtitle,
        SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            valign: Some("vcenter".to_string()),
            font_size: Some(12),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFormatTag::Header,
        cfg_banner_fmt_spec.with_(SpecCellFormat {
            bg_color: Some("#8E44AD".to_string()),
            font_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFormatTag::Subheader,
        cfg_banner_fmt_spec.with_(SpecCellFormat {
            bg_color: Some("#5DADE2".to_string()),
            font_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFormatTag::TotalHeader,
        cfg_banner_fmt_spec.with_(SpecCellFormat {
            bg_color: Some("#27AE60".to_string()),
            font_color: Some("#FFFFFF".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFormatTag::RankHeader,
        cfg_banner_fmt_spec.with_(SpecCellFormat {
            bg_color: Some("#F4D03F".to_string()),
            font_color: Some("#000000".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFormatTag::Cell,
        SpecCellFormat {
            align: Some("center".to_string()),
            border: Some(1),
            ..Default::default()
        },
    );

    dict_fmt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_default_marksheet_formats_covers_every_tag() {
        let dict_fmt = derive_default_marksheet_formats();
        for tag in [
            EnumFormatTag::Title,
            EnumFormatTag::Subtitle,
            EnumFormatTag::Header,
            EnumFormatTag::Subheader,
            EnumFormatTag::TotalHeader,
            EnumFormatTag::RankHeader,
            EnumFormatTag::Cell,
        ] {
            assert!(dict_fmt.contains_key(&tag), "missing preset for {tag:?}");
        }
    }

    #[test]
    fn test_banner_presets_inherit_border_and_override_palette() {
        let dict_fmt = derive_default_marksheet_formats();

        let fmt_header = &dict_fmt[&EnumFormatTag::Header];
        assert_eq!(fmt_header.border, Some(1));
        assert_eq!(fmt_header.bold, Some(true));
        assert_eq!(fmt_header.bg_color.as_deref(), Some("#8E44AD"));
        assert_eq!(fmt_header.font_color.as_deref(), Some("#FFFFFF"));

        let fmt_rank = &dict_fmt[&EnumFormatTag::RankHeader];
        assert_eq!(fmt_rank.bg_color.as_deref(), Some("#F4D03F"));
        assert_eq!(fmt_rank.font_color.as_deref(), Some("#000000"));

        // Title/subtitle carry a size but no fill or border.
        let fmt_title = &dict_fmt[&EnumFormatTag::Title];
        assert_eq!(fmt_title.font_size, Some(14));
        assert_eq!(fmt_title.border, None);
        assert_eq!(dict_fmt[&EnumFormatTag::Subtitle].font_size, Some(12));
    }
}
