//! Prompts for the external text model that composes report text.
//!
//! The model only ever sees the activities the user typed. Its answer is
//! expected in the exact line format understood by
//! [`crate::libs::classify`], and is stored and exported as-is.

use crate::libs::classify::EN_DASH;
use crate::libs::dates::IsoDate;
use crate::libs::report::{report_title, summary_line, Activity};

/// Instructions sent as the system message.
pub const SYSTEM_PROMPT: &str = "\
You write short, factual daily work reports from a list of activities.

The summary lists final status and key outcomes, it does not repeat every activity.
- Group activities by ticket or topic and mention each ticket once.
- An activity that says a ticket was solved becomes \"Solved <TICKET>\".
- Work that was started or continued but not finished becomes \"Worked on <TICKET>\".
- Calls or discussions without a solution become \"Discussed <TICKET> with support\".
- Keep context for work that is done but not yet approved, in parentheses.
- Mention non-ticket activities only when they matter.

Never change the given times or descriptions, never add activities, never
guess tickets or outcomes. The summary always starts at exactly
\"06:00 PM \u{2013} Summary of today\".

Output plain text only: no markdown, no emojis, no commentary, no extra
blank lines. The text must be ready for Word or PDF export.
";

/// Builds the user message for one day of activities.
///
/// ```rust
/// use dayrep::libs::dates::IsoDate;
/// use dayrep::libs::prompt::build_user_prompt;
/// use dayrep::libs::report::Activity;
///
/// let date = IsoDate::from_ymd(2026, 2, 16).unwrap();
/// let prompt = build_user_prompt(&date, &[Activity::new("09:30 AM", "Fixed ticket X")]);
/// assert!(prompt.contains("09:30 AM – Fixed ticket X"));
/// assert!(prompt.contains("Daily Report – February 16, 2026"));
/// ```
pub fn build_user_prompt(date: &IsoDate, activities: &[Activity]) -> String {
    let display = date.to_display();
    let activity_lines = activities.iter().map(Activity::line).collect::<Vec<_>>().join("\n");

    format!(
        "Write the daily work report for {display}.

Activities:
{activity_lines}

Use exactly this format:
{title}

[every activity exactly as given, one per line]
{summary}
- [key outcome]
- [key outcome]
- [more outcomes if needed]

Formatting:
- one blank line between the title and the activities
- no blank lines between activities
- no blank line between \"{summary}\" and its bullets
- bullets start with \"- \"
- times are written as HH:MM AM or HH:MM PM followed by \" {dash} \"",
        title = report_title(date),
        summary = summary_line(),
        dash = EN_DASH,
    )
}
