//! Display formatting helpers

use chrono::NaiveDateTime;
use loglens_core::domain::log::LogRecord;

/// Error messages longer than this many characters are clipped to the
/// first 50 in the table
const ERROR_CLIP_THRESHOLD: usize = 50;
const ERROR_CLIP_KEEP: usize = 50;

/// Analysis results longer than 40 characters show only their first 30
const ANALYSIS_CLIP_THRESHOLD: usize = 40;
const ANALYSIS_CLIP_KEEP: usize = 30;

/// Clip `s` to its first `keep` characters when it exceeds `threshold`
///
/// Character-counted, so multibyte text never splits mid-codepoint.
fn clip(s: &str, threshold: usize, keep: usize) -> String {
    if s.chars().count() > threshold {
        let mut out: String = s.chars().take(keep).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

/// Table preview of an error message
pub fn error_preview(message: &str) -> String {
    clip(message, ERROR_CLIP_THRESHOLD, ERROR_CLIP_KEEP)
}

/// Table preview of an analysis result
pub fn analysis_preview(result: &str) -> String {
    clip(result, ANALYSIS_CLIP_THRESHOLD, ANALYSIS_CLIP_KEEP)
}

/// Timestamp in the long form used everywhere in the UI
pub fn timestamp(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Full multi-line detail text for the modal viewer
pub fn record_detail(record: &LogRecord) -> String {
    format!(
        "Error message:\n{}\n\nAnalysis result:\n{}\n\nTime: {}\nID: {}",
        record.error_message,
        record.analysis_result,
        timestamp(record.log_time),
        record.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn long_error_message_clips_to_fifty() {
        let message = "x".repeat(60);
        let preview = error_preview(&message);
        assert_eq!(preview, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn error_message_at_threshold_is_unmodified() {
        let message = "x".repeat(50);
        assert_eq!(error_preview(&message), message);
    }

    #[test]
    fn long_analysis_result_clips_to_thirty() {
        let result = "y".repeat(45);
        let preview = analysis_preview(&result);
        assert_eq!(preview, format!("{}...", "y".repeat(30)));
    }

    #[test]
    fn analysis_result_at_threshold_is_unmodified() {
        // 40 chars is on the threshold: longer than the kept prefix, but not clipped
        let result = "y".repeat(40);
        assert_eq!(analysis_preview(&result), result);
    }

    #[test]
    fn clipping_is_character_based() {
        let message = "é".repeat(60);
        let preview = error_preview(&message);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn timestamp_uses_long_form() {
        let t = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        assert_eq!(timestamp(t), "2025-03-14 09:26:53");
    }

    #[test]
    fn record_detail_contains_all_fields() {
        let record = LogRecord {
            id: 12,
            log_time: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 26, 53)
                .unwrap(),
            error_message: "boom".to_string(),
            analysis_result: "cause".to_string(),
            application_id: None,
            created_at: None,
        };
        let detail = record_detail(&record);
        assert!(detail.contains("boom"));
        assert!(detail.contains("cause"));
        assert!(detail.contains("2025-03-14 09:26:53"));
        assert!(detail.contains("ID: 12"));
    }
}
