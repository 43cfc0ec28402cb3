use crate::{
    db::reports::Reports,
    libs::messages::Message,
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut reports = Reports::new()?;
    let report = reports.fetch(args.id)?.ok_or_else(|| msg_error_anyhow!(Message::ReportNotFound(args.id)))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteReport(args.id, report.report_date.to_display()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if !reports.delete(args.id)? {
        msg_bail_anyhow!(Message::ReportNotFound(args.id));
    }
    msg_success!(Message::ReportDeleted(args.id));
    Ok(())
}
