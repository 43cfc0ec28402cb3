#[cfg(test)]
mod tests {
    use dayrep::libs::classify::{classify, classify_report, split_time, LineKind};

    #[test]
    fn test_title() {
        let line = classify("Daily Report – February 16, 2026");
        assert_eq!(line.kind, LineKind::Title);
        assert!(line.is_title());
    }

    #[test]
    fn test_timed_activity() {
        let line = classify("09:30 AM – Fixed ticket X");
        assert!(line.is_timed_activity());
        assert_eq!(line.time(), Some("09:30 AM"));
        assert_eq!(line.description(), Some("Fixed ticket X"));
    }

    #[test]
    fn test_bullet() {
        assert_eq!(classify("- Solved ticket X").kind, LineKind::Bullet);
    }

    #[test]
    fn test_summary_header() {
        let line = classify("06:00 PM – Summary of today");
        assert!(line.is_summary_header());
        assert_eq!(line.time(), Some("06:00 PM"));
        assert_eq!(line.description(), Some("Summary of today"));
    }

    #[test]
    fn test_blank_and_plain() {
        assert!(classify("").is_blank());
        assert!(classify("   \t").is_blank());
        assert!(classify("Waiting for the database dump").is_plain());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let line = classify("   09:30 AM – Fixed ticket X   ");
        assert_eq!(line.text, "09:30 AM – Fixed ticket X");
        assert_eq!(line.description(), Some("Fixed ticket X"));
    }

    #[test]
    fn test_summary_marker_wins_over_bullet() {
        let line = classify("- Summary of today was short");
        assert!(line.is_summary_header());
        assert_eq!(line.split(), None);
    }

    #[test]
    fn test_summary_marker_without_time_degrades() {
        let line = classify("Summary of today");
        assert!(line.is_summary_header());
        assert_eq!(line.description(), None);
    }

    #[test]
    fn test_timed_line_without_description_degrades() {
        let line = classify("09:30 AM –");
        assert_eq!(line.kind, LineKind::TimedActivity(None));
        assert_eq!(line.text, "09:30 AM –");
    }

    #[test]
    fn test_hyphen_is_not_a_time_separator() {
        assert!(classify("09:30 AM - Fixed ticket X").is_plain());
        assert!(classify("9:30 AM – Fixed ticket X").is_plain());
        assert!(classify("09:30 am – Fixed ticket X").is_plain());
    }

    #[test]
    fn test_split_keeps_exact_separator() {
        let split = split_time("09:30 AM–Fixed ticket X").unwrap();
        assert_eq!(split.time, "09:30 AM");
        assert_eq!(split.separator, "–");
        assert_eq!(split.description, "Fixed ticket X");
        assert_eq!(split.lead(), "09:30 AM–");

        let split = split_time("01:15 PM  –  Call").unwrap();
        assert_eq!(split.lead(), "01:15 PM  –  ");
        assert_eq!(split.description, "Call");
    }

    #[test]
    fn test_classify_report_keeps_order() {
        let report = "Daily Report – February 16, 2026\n\n09:30 AM – Fixed ticket X\n06:00 PM – Summary of today\n- Solved ticket X";
        let kinds: Vec<_> = classify_report(report).iter().map(|line| std::mem::discriminant(&line.kind)).collect();
        let expected: Vec<_> = [
            LineKind::Title,
            LineKind::Blank,
            LineKind::TimedActivity(None),
            LineKind::SummaryHeader(None),
            LineKind::Bullet,
        ]
        .iter()
        .map(std::mem::discriminant)
        .collect();
        assert_eq!(kinds, expected);
    }
}
