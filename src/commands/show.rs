use crate::{
    db::reports::Reports,
    libs::{
        export::{paint, TextPainter},
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: i64,

    /// Also print the stored activities as a table
    #[arg(short, long)]
    activities: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let report = Reports::new()?.fetch(args.id)?.ok_or_else(|| msg_error_anyhow!(Message::ReportNotFound(args.id)))?;

    let mut painter = TextPainter::new();
    paint(&report.full_report, &mut painter);
    msg_print!(painter.as_str().trim_end());

    if args.activities {
        msg_print!("");
        View::activities(&report)?;
    }
    Ok(())
}
