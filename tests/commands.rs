#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::process::{Command, Output, Stdio};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todolist::db::tasks::Tasks;
    use todolist::libs::config::DatabaseConfig;
    use todolist::libs::task::TaskStatus;

    struct CommandTestContext {
        temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            CommandTestContext { temp_dir, db_path }
        }
    }

    impl CommandTestContext {
        /// Runs the `todolist` binary against this context's database only.
        fn run(&self, args: &[&str]) -> Output {
            Command::new(env!("CARGO_BIN_EXE_todolist"))
                .args(args)
                .current_dir(self.temp_dir.path())
                .env("HOME", self.temp_dir.path())
                .env("LOCALAPPDATA", self.temp_dir.path())
                .env("TODOLIST_DATABASE_PATH", &self.db_path)
                .env_remove("RUST_LOG")
                .env_remove("TODOLIST_DEBUG")
                .stdin(Stdio::null())
                .output()
                .unwrap()
        }

        fn tasks(&self) -> Tasks {
            Tasks::new(&DatabaseConfig::at_path(self.db_path.clone())).unwrap()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_json_on_fresh_database(ctx: &mut CommandTestContext) {
        let output = ctx.run(&["list", "--json"]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_json_prints_tasks(ctx: &mut CommandTestContext) {
        assert!(ctx.run(&["add", "Buy milk", "--due", "2025-06-01"]).status.success());
        assert!(ctx.run(&["add", "Walk dog", "--due", "2025-06-02"]).status.success());
        assert!(ctx.run(&["complete", "2"]).status.success());

        let output = ctx.run(&["list", "--filter", "pending", "--json"]);
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], 1);
        assert_eq!(list[0]["description"], "Buy milk");
        assert_eq!(list[0]["due_date"], "2025-06-01");
        assert_eq!(list[0]["status"], "Pending");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_without_due_keeps_due_date(ctx: &mut CommandTestContext) {
        assert!(ctx.run(&["add", "Buy milk", "--due", "2025-06-01"]).status.success());

        assert!(ctx.run(&["edit", "1", "Buy bread"]).status.success());

        let task = ctx.tasks().get_by_id(1).unwrap().unwrap();
        assert_eq!(task.description, "Buy bread");
        assert_eq!(task.due_date, date(2025, 6, 1));
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_with_due_replaces_due_date(ctx: &mut CommandTestContext) {
        assert!(ctx.run(&["add", "Buy milk", "--due", "2025-06-01"]).status.success());

        assert!(ctx.run(&["edit", "1", "Buy bread", "--due", "2025-07-15"]).status.success());

        let task = ctx.tasks().get_by_id(1).unwrap().unwrap();
        assert_eq!(task.due_date, date(2025, 7, 15));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_clear_with_yes_skips_prompt(ctx: &mut CommandTestContext) {
        for description in ["One", "Two", "Three"] {
            assert!(ctx.run(&["add", description]).status.success());
        }
        assert_eq!(ctx.tasks().count().unwrap(), 3);

        // stdin is closed, so a prompt would fail the command
        let output = ctx.run(&["clear", "--yes"]);
        assert!(output.status.success());

        assert_eq!(ctx.tasks().count().unwrap(), 0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unknown_id_is_not_a_failure(ctx: &mut CommandTestContext) {
        assert!(ctx.run(&["add", "Buy milk"]).status.success());

        assert!(ctx.run(&["delete", "42"]).status.success());
        assert!(ctx.run(&["complete", "42"]).status.success());
        assert_eq!(ctx.tasks().count().unwrap(), 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_rejected_input_exits_with_failure(ctx: &mut CommandTestContext) {
        assert!(!ctx.run(&["add", "   "]).status.success());
        assert!(!ctx.run(&["delete", "0"]).status.success());
        assert_eq!(ctx.tasks().count().unwrap(), 0);
    }
}
