#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todolist::libs::config::{Config, DatabaseConfig, CONFIG_FILE_NAME, DEFAULT_DATABASE_NAME};
    use todolist::libs::data_storage::DataStorage;

    /// Points the data directory at a fresh temporary folder.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        base: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let base = temp_dir.path().join("todolist");
            ConfigTestContext {
                storage: DataStorage::with_base(&base),
                base,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.database.is_none());

        let database = config.database_config();
        assert_eq!(database.name, DEFAULT_DATABASE_NAME);
        assert!(database.path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig::named("groceries")),
        };
        config.save_to(&ctx.storage).unwrap();
        assert!(ctx.base.join(CONFIG_FILE_NAME).exists());

        let read_config = Config::read_from(&ctx.storage).unwrap();
        let database = read_config.database_config();
        assert_eq!(database.name, "groceries");
        assert!(database.path.is_none());

        // Name-based location resolves inside the same data directory
        assert_eq!(database.resolve_path_with(None).unwrap(), ctx.base.join("groceries.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_explicit_path_round_trips(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig::at_path("/var/lib/todo/tasks.db")),
        };
        config.save_to(&ctx.storage).unwrap();

        let database = Config::read_from(&ctx.storage).unwrap().database_config();
        assert_eq!(database.resolve_path_with(None).unwrap(), PathBuf::from("/var/lib/todo/tasks.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete_from(&ctx.storage).unwrap());

        Config::default().save_to(&ctx.storage).unwrap();
        assert!(Config::delete_from(&ctx.storage).unwrap());
        assert!(!ctx.base.join(CONFIG_FILE_NAME).exists());
    }
}
