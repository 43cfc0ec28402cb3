#[cfg(test)]
mod tests {
    use dayrep::commands::{parse_activities, parse_activity, resolve_date};
    use dayrep::libs::clock::Period;
    use dayrep::libs::dates::{today, IsoDate};
    use dayrep::libs::prompt::{build_user_prompt, SYSTEM_PROMPT};
    use dayrep::libs::report::Activity;

    #[test]
    fn test_user_prompt_lists_activities_in_order() {
        let date = IsoDate::from_ymd(2026, 2, 16).unwrap();
        let prompt = build_user_prompt(
            &date,
            &[Activity::new("09:30 AM", "Fixed ticket X"), Activity::new("01:15 PM", "Call with support")],
        );

        assert!(prompt.contains("February 16, 2026"));
        assert!(prompt.contains("Daily Report – February 16, 2026"));
        assert!(prompt.contains("09:30 AM – Fixed ticket X\n01:15 PM – Call with support"));
        assert!(prompt.contains("06:00 PM – Summary of today"));
    }

    #[test]
    fn test_system_prompt_fixes_summary_line() {
        assert!(SYSTEM_PROMPT.contains("06:00 PM – Summary of today"));
        assert!(SYSTEM_PROMPT.contains("no markdown"));
    }

    #[test]
    fn test_parse_activity_argument() {
        let activity = parse_activity("930=Fixed ticket X", Period::Am).unwrap();
        assert_eq!(activity, Activity::new("09:30 AM", "Fixed ticket X"));

        let activity = parse_activity("1:15pm= Call with support ", Period::Am).unwrap();
        assert_eq!(activity, Activity::new("01:15 PM", "Call with support"));
    }

    #[test]
    fn test_parse_activity_rejects_malformed_arguments() {
        assert!(parse_activity("Fixed ticket X", Period::Am).is_err());
        assert!(parse_activity("noon=Lunch", Period::Am).is_err());
        assert!(parse_activities(&["9=ok".to_string(), "bad".to_string()], Period::Pm).is_err());
    }

    #[test]
    fn test_resolve_date() {
        assert_eq!(resolve_date("today").unwrap(), today());
        assert_eq!(resolve_date("Feb 16, 2026").unwrap().to_string(), "2026-02-16");
        let err = resolve_date("02/16/2026").unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }
}
