use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::core::models::record::CostRecord;

/// Report file name, unique per run at second precision.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    format!("ocr_cost_report_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write one report row per record into `dir`, header first, and return
/// the report path. Callers skip this entirely when no records exist.
pub fn write_report(
    dir: &Path,
    records: &[CostRecord],
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = dir.join(report_file_name(now));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write report row for '{}'", record.file_id))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::CostRecord;
    use crate::core::pricing::Pricing;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 14, 30, 5).unwrap()
    }

    #[test]
    fn report_name_embeds_timestamp() {
        assert_eq!(
            report_file_name(&fixed_time()),
            "ocr_cost_report_20250601_143005.csv"
        );
    }

    #[test]
    fn report_names_differ_across_seconds() {
        let a = Local.with_ymd_and_hms(2025, 6, 1, 14, 30, 5).unwrap();
        let b = Local.with_ymd_and_hms(2025, 6, 1, 14, 30, 6).unwrap();
        assert_ne!(report_file_name(&a), report_file_name(&b));
    }

    #[test]
    fn report_has_fixed_header_and_one_row_per_record() {
        let dir = std::env::temp_dir().join("ocrbatch_test_report");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let pricing = Pricing::default();
        let records = vec![
            CostRecord::success("photo.jpg", 120, 30, &pricing),
            CostRecord::failed("corrupt.png"),
        ];

        let path = write_report(&dir, &records, &fixed_time()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "File ID,Status,Input Tokens,Output Tokens,Total Tokens,USD Cost,INR Cost"
        );
        assert!(lines[1].starts_with("photo.jpg,Success,120,30,150,"));
        assert_eq!(lines[2], "corrupt.png,Failed,0,0,0,0.0,0.0");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn report_preserves_record_order() {
        let dir = std::env::temp_dir().join("ocrbatch_test_report_order");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let records = vec![
            CostRecord::failed("z_last_listed.png"),
            CostRecord::failed("a_first_listed.jpg"),
        ];

        let path = write_report(&dir, &records, &fixed_time()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert!(lines[1].starts_with("z_last_listed.png,"));
        assert!(lines[2].starts_with("a_first_listed.jpg,"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn report_lands_in_target_directory() {
        let dir = std::env::temp_dir().join("ocrbatch_test_report_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let records = vec![CostRecord::failed("x.jpg")];
        let path = write_report(&dir, &records, &fixed_time()).unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(path.is_file());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_into_missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join("ocrbatch_test_report_missing_dir");
        let _ = std::fs::remove_dir_all(&dir);

        let records = vec![CostRecord::failed("x.jpg")];
        assert!(write_report(&dir, &records, &fixed_time()).is_err());
    }
}
