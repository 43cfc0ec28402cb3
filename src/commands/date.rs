use crate::{commands::resolve_date, libs::messages::Message, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DateArgs {
    /// Date to normalize, e.g. "Feb 16, 2026", "16 February 2026" or "today"
    input: String,
}

pub fn cmd(args: DateArgs) -> Result<()> {
    let date = resolve_date(&args.input)?;

    msg_print!(Message::DateIso(date.to_string()));
    msg_print!(Message::DateDisplay(date.to_display()));
    Ok(())
}
