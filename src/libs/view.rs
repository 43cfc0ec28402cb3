use super::report::Report;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints stored reports as a table: id, date, summary flag, preview.
    pub fn reports(reports: &[Report]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "ACTIVITIES", "SUMMARY", "PREVIEW"]);
        for report in reports {
            table.add_row(row![
                report.id.unwrap_or(0),
                report.report_date.to_display(),
                report.activities.len(),
                if report.summary.is_some() { "yes" } else { "no" },
                report.preview()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the activities of one report.
    pub fn activities(report: &Report) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "DESCRIPTION"]);
        for activity in &report.activities {
            table.add_row(row![activity.time, activity.description]);
        }
        table.printstd();

        Ok(())
    }
}
