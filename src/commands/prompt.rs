//! Prints the messages an external text model needs to compose a report.
//!
//! The output is meant to be piped or pasted; the composed answer can then
//! be stored with `dayrep save`.

use crate::{
    commands::{parse_activities, resolve_date},
    libs::{
        clock::Period,
        messages::Message,
        prompt::{build_user_prompt, SYSTEM_PROMPT},
        report::retain_filled,
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PromptArgs {
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Activity as TIME=DESCRIPTION, e.g. "930=Fixed ticket X"; repeatable
    #[arg(short, long = "activity")]
    activities: Vec<String>,

    /// Period used for times typed without AM/PM
    #[arg(short, long, value_enum, default_value = "am")]
    period: Period,

    /// Print only the user message
    #[arg(long)]
    user_only: bool,
}

pub fn cmd(args: PromptArgs) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let activities = retain_filled(parse_activities(&args.activities, args.period)?);
    if activities.is_empty() {
        msg_bail_anyhow!(Message::NoActivities);
    }

    if !args.user_only {
        msg_print!(Message::PromptSystemHeader);
        msg_print!(SYSTEM_PROMPT.trim_end());
        msg_print!(Message::PromptUserHeader);
    }
    msg_print!(build_user_prompt(&date, &activities));
    Ok(())
}
