#[cfg(test)]
mod tests {
    use dayrep::db::db::Db;
    use dayrep::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use dayrep::db::reports::Reports;
    use dayrep::libs::report::{Activity, Report};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReportsTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for ReportsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("dayrep.db");
            ReportsTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    fn report(date: &str, text: &str) -> Report {
        Report::from_submission(date, vec![], text).unwrap()
    }

    const TEXT: &str = "Daily Report – February 16, 2026\n\n09:30 AM – Fixed ticket X\n06:00 PM – Summary of today\n- Solved ticket X";

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_insert_and_fetch(ctx: &mut ReportsTestContext) {
        let mut reports = Reports::open(&ctx.db_path).unwrap();
        let id = reports.insert(&report("2026-02-16", TEXT)).unwrap();

        let stored = reports.fetch(id).unwrap().unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.report_date.to_string(), "2026-02-16");
        assert_eq!(stored.activities, vec![Activity::new("09:30 AM", "Fixed ticket X")]);
        assert_eq!(stored.summary.as_deref(), Some("- Solved ticket X"));
        assert_eq!(stored.full_report, TEXT);
        assert!(stored.created_at.is_some());
    }

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_fetch_missing_report(ctx: &mut ReportsTestContext) {
        let mut reports = Reports::open(&ctx.db_path).unwrap();
        assert!(reports.fetch(42).unwrap().is_none());
    }

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_fetch_all_is_newest_date_first(ctx: &mut ReportsTestContext) {
        let mut reports = Reports::open(&ctx.db_path).unwrap();
        let older = reports.insert(&report("2026-02-15", TEXT)).unwrap();
        let first = reports.insert(&report("2026-02-16", TEXT)).unwrap();
        let second = reports.insert(&report("2026-02-16", TEXT)).unwrap();

        let ids: Vec<i64> = reports.fetch_all().unwrap().iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![second, first, older]);

        assert_eq!(reports.fetch_by_date("2026-02-16").unwrap().len(), 2);
    }

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_update_replaces_content(ctx: &mut ReportsTestContext) {
        let mut reports = Reports::open(&ctx.db_path).unwrap();
        let id = reports.insert(&report("2026-02-16", TEXT)).unwrap();

        let edited = report("17 February 2026", "Daily Report – February 17, 2026\n\n10:00 AM – Deployed release");
        assert!(reports.update(id, &edited).unwrap());

        let stored = reports.fetch(id).unwrap().unwrap();
        assert_eq!(stored.report_date.to_string(), "2026-02-17");
        assert_eq!(stored.activities, vec![Activity::new("10:00 AM", "Deployed release")]);
        assert_eq!(stored.summary, None);

        assert!(!reports.update(id + 100, &edited).unwrap());
    }

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_delete(ctx: &mut ReportsTestContext) {
        let mut reports = Reports::open(&ctx.db_path).unwrap();
        let id = reports.insert(&report("2026-02-16", TEXT)).unwrap();

        assert!(reports.delete(id).unwrap());
        assert!(!reports.delete(id).unwrap());
        assert!(reports.fetch_all().unwrap().is_empty());
    }

    #[test_context(ReportsTestContext)]
    #[test]
    fn test_migrations_are_applied_once(ctx: &mut ReportsTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        drop(conn);

        Db::open(&ctx.db_path).unwrap();
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 1);
        assert!(!needs_migration(&db.conn).unwrap());

        let manager = MigrationManager::new();
        assert!(manager.is_migration_applied(&db.conn, 1).unwrap());
        let history = manager.get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].1, "create_daily_reports");
    }
}
