#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todolist::db::db::Db;
    use todolist::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use todolist::libs::config::DatabaseConfig;

    struct MigrationTestContext {
        _temp_dir: TempDir,
        config: DatabaseConfig,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = DatabaseConfig::at_path(temp_dir.path().join("tasks.db"));
            MigrationTestContext { _temp_dir: temp_dir, config }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::new(&ctx.config).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());

        let tables: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.config).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert!(MigrationManager::new().get_migration_history(&conn).unwrap().is_empty());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_broken_migrations_table_is_an_error(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.config).unwrap();
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.config).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_tasks_table");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        // Opening twice must not recreate or fail on the existing schema
        let first = Db::new(&ctx.config).unwrap();
        let version1 = get_db_version(&first.conn).unwrap();
        drop(first);

        let second = Db::new(&ctx.config).unwrap();
        let version2 = get_db_version(&second.conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_status_check_constraint(ctx: &mut MigrationTestContext) {
        let db = Db::new(&ctx.config).unwrap();

        let result = db.conn.execute(
            "INSERT INTO tasks (description, due_date, status) VALUES ('Bad', '2025-01-01', 'Archived')",
            [],
        );
        assert!(result.is_err());
    }
}
