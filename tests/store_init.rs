#[cfg(test)]
mod tests {
    use orgnice::db::migrations::{get_db_version, needs_migration};
    use orgnice::db::store::Store;
    use orgnice::libs::error::ErrorKind;
    use orgnice::libs::project::Project;
    use rusqlite::Connection;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreInitContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StoreInitContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("t.db");
            StoreInitContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_fresh_store_has_inbox_and_no_tasks(ctx: &mut StoreInitContext) {
        assert!(!ctx.db_path.exists());

        let store = Store::open(&ctx.db_path).unwrap();

        assert!(ctx.db_path.exists());
        assert_eq!(store.path(), ctx.db_path.as_path());
        assert_eq!(store.find_project_by_id(0).unwrap(), Project::inbox());
        assert!(store.list_all_tasks().unwrap().is_empty());
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_reopen_keeps_data_and_schema(ctx: &mut StoreInitContext) {
        {
            let mut store = Store::open(&ctx.db_path).unwrap();
            store.create_project("Garden").unwrap();
            store.create_task("Plant tomatoes", 1).unwrap();
        }

        let store = Store::open(&ctx.db_path).unwrap();
        assert_eq!(store.search_projects("").unwrap().len(), 2);
        assert_eq!(store.list_all_tasks().unwrap().len(), 1);

        let conn = Connection::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(!needs_migration(&conn).unwrap());
        let inboxes: i64 = conn.query_row("SELECT COUNT(*) FROM projects WHERE id = 0", [], |r| r.get(0)).unwrap();
        assert_eq!(inboxes, 1);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_non_database_file_is_corrupt(ctx: &mut StoreInitContext) {
        fs::write(&ctx.db_path, "Hello").unwrap();

        let err = Store::open(&ctx.db_path).err().unwrap();

        assert_eq!(err.kind(), ErrorKind::StorageCorrupt);
        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), "Hello");
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_newer_schema_version_is_rejected(ctx: &mut StoreInitContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.pragma_update(None, "user_version", 99).unwrap();
        }

        let err = Store::open(&ctx.db_path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::StorageCorrupt);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_unopenable_location_is_io_error(ctx: &mut StoreInitContext) {
        // A regular file where the parent directory should be.
        let blocker = ctx.db_path.with_file_name("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let err = Store::open(blocker.join("t.db")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_missing_parent_directory_is_io_error(ctx: &mut StoreInitContext) {
        let path = ctx.db_path.with_file_name("missing").join("t.db");

        let err = Store::open(&path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_legacy_unversioned_store_is_adopted(ctx: &mut StoreInitContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY, name STRING NOT NULL, project INTEGER DEFAULT 0, done INTEGER DEFAULT 0);
                 CREATE TABLE projects (id INTEGER PRIMARY KEY, name STRING NOT NULL);
                 INSERT INTO projects (id, name) VALUES (0, 'Inbox');
                 INSERT INTO tasks (id, name, project, done) VALUES (5, 'Old task', 0, 1);",
            )
            .unwrap();
        }

        let store = Store::open(&ctx.db_path).unwrap();
        let task = store.find_task_by_id(5).unwrap();
        assert_eq!(task.name, "Old task");
        assert!(task.done);
        assert_eq!(task.project, Project::inbox());
    }

    fn assert_rejected_untouched(db_path: &Path) {
        let err = Store::open(db_path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::StorageCorrupt);

        let conn = Connection::open(db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        let projects: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE name = 'projects'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(projects, 0);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_foreign_tasks_table_with_title_column_is_corrupt(ctx: &mut StoreInitContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch("CREATE TABLE tasks (id INTEGER PRIMARY KEY, title TEXT, project INTEGER);")
                .unwrap();
        }

        assert_rejected_untouched(&ctx.db_path);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_foreign_tasks_table_without_project_is_corrupt(ctx: &mut StoreInitContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch("CREATE TABLE tasks (id, title);").unwrap();
        }

        assert_rejected_untouched(&ctx.db_path);
    }

    #[test_context(StoreInitContext)]
    #[test]
    fn test_unrelated_tables_are_left_alone(ctx: &mut StoreInitContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);").unwrap();
        }

        let store = Store::open(&ctx.db_path).unwrap();
        assert_eq!(store.find_project_by_id(0).unwrap(), Project::inbox());
    }
}
