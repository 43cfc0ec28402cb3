#[cfg(test)]
mod tests {
    use dayrep::libs::classify::classify;
    use dayrep::libs::segment::{render, render_report, Rendered, Spacing};

    #[test]
    fn test_title_is_one_bold_segment_with_heading_gap() {
        let rendered = render(&classify("Daily Report – February 16, 2026"));
        let segments = rendered.segments();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].bold);
        assert_eq!(segments[0].spacing_after, Spacing::Heading);
        assert_eq!(segments[0].indent_level, 0);
    }

    #[test]
    fn test_timed_activity_has_bold_lead_and_plain_description() {
        let rendered = render(&classify("09:30 AM – Fixed ticket X"));
        let segments = rendered.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].text.as_str(), segments[0].bold), ("09:30 AM – ", true));
        assert_eq!((segments[1].text.as_str(), segments[1].bold), ("Fixed ticket X", false));
        assert_eq!(segments[1].spacing_after, Spacing::Compact);
    }

    #[test]
    fn test_summary_header_has_half_line_around_it() {
        let rendered = render(&classify("06:00 PM – Summary of today"));
        let segments = rendered.segments();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.spacing_before == Spacing::HalfLine && s.spacing_after == Spacing::HalfLine));
    }

    #[test]
    fn test_failed_split_renders_whole_line_unbolded() {
        let rendered = render(&classify("09:30 AM –"));
        let segments = rendered.segments();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].bold);
        assert_eq!(segments[0].text, "09:30 AM –");
    }

    #[test]
    fn test_bullet_is_indented() {
        let rendered = render(&classify("- Solved ticket X"));
        let segments = rendered.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].indent_level, 1);
        assert_eq!(segments[0].spacing_after, Spacing::Compact);
        assert!(!segments[0].bold);
    }

    #[test]
    fn test_blank_line_only_advances() {
        assert_eq!(render(&classify("  ")), Rendered::Advance(Spacing::HalfLine));
        assert!(render(&classify("")).segments().is_empty());
    }

    #[test]
    fn test_rendered_text_matches_trimmed_line() {
        let report = "Daily Report – February 16, 2026\n\n09:30 AM – Fixed ticket X\n09:45 AM –\nNote\n06:00 PM – Summary of today\n- Solved ticket X";
        for (line, rendered) in report.lines().zip(render_report(report)) {
            assert_eq!(rendered.text(), line.trim());
        }
    }

    #[test]
    fn test_spacing_units() {
        assert_eq!(Spacing::Heading.twips(), 400);
        assert_eq!(Spacing::HalfLine.twips(), 200);
        assert_eq!(Spacing::Compact.twips(), 100);
        assert_eq!(Spacing::None.twips(), 0);
        assert!(Spacing::Heading.lines() > Spacing::HalfLine.lines());
    }
}
