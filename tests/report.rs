#[cfg(test)]
mod tests {
    use dayrep::libs::clock::{normalize_clock, Period};
    use dayrep::libs::dates::IsoDate;
    use dayrep::libs::report::{extract_activities, extract_summary, report_title, retain_filled, summary_line, Activity, Report};

    const REPORT: &str = "\
Daily Report – February 16, 2026

09:30 AM – Fixed ticket X
01:15 PM – Call with support about ticket Y
06:00 PM – Summary of today
- Solved ticket X
- Discussed ticket Y with support";

    #[test]
    fn test_extract_summary() {
        assert_eq!(
            extract_summary(REPORT).as_deref(),
            Some("- Solved ticket X\n- Discussed ticket Y with support")
        );
    }

    #[test]
    fn test_missing_or_empty_summary_is_none() {
        assert_eq!(extract_summary("Daily Report – February 16, 2026\n09:30 AM – Fixed ticket X"), None);
        assert_eq!(extract_summary("09:30 AM – Fixed ticket X\n06:00 PM – Summary of today\n   \n"), None);
        // Only the 06:00 PM header counts.
        assert_eq!(extract_summary("05:00 PM – Summary of today\n- Solved ticket X"), None);
    }

    #[test]
    fn test_extract_activities_stops_at_summary() {
        let activities = extract_activities(&format!("{}\n07:00 PM – Not an activity", REPORT));
        assert_eq!(
            activities,
            vec![
                Activity::new("09:30 AM", "Fixed ticket X"),
                Activity::new("01:15 PM", "Call with support about ticket Y"),
            ]
        );
    }

    #[test]
    fn test_activity_mentioning_summary_is_kept() {
        let text = "\
Daily Report – February 16, 2026
09:30 AM – Fixed ticket X
10:00 AM – Drafted Summary of today's sync
11:00 AM – Reviewed pull requests
06:00 PM – Summary of today
- Solved ticket X";
        assert_eq!(
            extract_activities(text),
            vec![
                Activity::new("09:30 AM", "Fixed ticket X"),
                Activity::new("10:00 AM", "Drafted Summary of today's sync"),
                Activity::new("11:00 AM", "Reviewed pull requests"),
            ]
        );
        assert_eq!(extract_summary(text).as_deref(), Some("- Solved ticket X"));
    }

    #[test]
    fn test_from_submission_derives_fields() {
        let report = Report::from_submission("Feb 16, 2026", vec![], REPORT).unwrap();
        assert_eq!(report.report_date.to_string(), "2026-02-16");
        assert_eq!(report.activities.len(), 2);
        assert!(report.summary.is_some());
        assert_eq!(report.full_report, REPORT);
        assert_eq!(report.id, None);
        assert_eq!(report.title(), "Daily Report – February 16, 2026");
    }

    #[test]
    fn test_from_submission_keeps_given_activities() {
        let given = vec![
            Activity::new("09:30 AM", "Fixed ticket X"),
            Activity::new("", "No time"),
            Activity::new("10:00 AM", "   "),
        ];
        let report = Report::from_submission("2026-02-16", given, REPORT).unwrap();
        assert_eq!(report.activities, vec![Activity::new("09:30 AM", "Fixed ticket X")]);
    }

    #[test]
    fn test_from_submission_rejects_bad_date() {
        assert!(Report::from_submission("02/16/2026", vec![], REPORT).is_err());
    }

    #[test]
    fn test_preview_skips_title_and_takes_three_lines() {
        let report = Report::from_submission("2026-02-16", vec![], REPORT).unwrap();
        assert_eq!(
            report.preview(),
            "09:30 AM – Fixed ticket X | 01:15 PM – Call with support about ticket Y | 06:00 PM – Summary of today..."
        );
    }

    #[test]
    fn test_preview_is_truncated() {
        let long = format!("Daily Report – February 16, 2026\n{}", "x".repeat(400));
        let report = Report::from_submission("2026-02-16", vec![], long).unwrap();
        let preview = report.preview();
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_activity_helpers() {
        let activity = Activity::new("09:30 AM", "Fixed ticket X");
        assert_eq!(activity.line(), "09:30 AM – Fixed ticket X");
        assert!(!activity.is_blank());
        assert!(Activity::new(" ", "x").is_blank());
        assert_eq!(retain_filled(vec![Activity::new("", ""), activity.clone()]), vec![activity]);
    }

    #[test]
    fn test_title_and_summary_lines() {
        let date = IsoDate::from_ymd(2026, 2, 16).unwrap();
        assert_eq!(report_title(&date), "Daily Report – February 16, 2026");
        assert_eq!(summary_line(), "06:00 PM – Summary of today");
    }

    #[test]
    fn test_normalize_clock() {
        let cases = [
            ("9", "09:00 AM"),
            ("12", "12:00 AM"),
            ("930", "09:30 AM"),
            ("0225", "02:25 AM"),
            ("1430", "14:30 AM"),
            ("2599", "23:59 AM"),
            ("12345", "12:34 AM"),
            ("9:30", "09:30 AM"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_clock(input, Period::Am).as_deref(), Some(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_normalize_clock_period() {
        assert_eq!(normalize_clock("115", Period::Pm).as_deref(), Some("01:15 PM"));
        assert_eq!(normalize_clock("9:30 pm", Period::Am).as_deref(), Some("09:30 PM"));
        assert_eq!(normalize_clock("9am", Period::Pm).as_deref(), Some("09:00 AM"));
        assert_eq!(normalize_clock("", Period::Am), None);
        assert_eq!(normalize_clock("noon", Period::Am), None);
    }

    #[test]
    fn test_period_parses_as_cli_value() {
        use clap::ValueEnum;

        assert_eq!(Period::from_str("pm", true), Ok(Period::Pm));
        assert_eq!(Period::from_str("AM", true), Ok(Period::Am));
        assert!(Period::from_str("noon", true).is_err());
        assert_eq!(Period::Pm.to_string(), "PM");
    }
}
