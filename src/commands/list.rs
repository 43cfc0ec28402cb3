use crate::{
    db::reports::Reports,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let reports = Reports::new()?.fetch_all()?;
    if reports.is_empty() {
        msg_info!(Message::NoReportsFound);
        return Ok(());
    }

    msg_print!(Message::ReportsHeader, true);
    View::reports(&reports)
}
