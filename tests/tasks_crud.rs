#[cfg(test)]
mod tests {
    use orgnice::db::store::Store;
    use orgnice::libs::error::{Error, ErrorKind};
    use orgnice::libs::project::{Project, INBOX_ID};
    use orgnice::libs::task::Task;
    use rusqlite::{params, Connection};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        store: Store,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            let store = Store::open(&db_path).unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                db_path,
                store,
            }
        }
    }

    impl TaskTestContext {
        /// Writes straight to the file, bypassing the store.
        fn raw(&self, sql: &str, values: &[i64]) {
            let conn = Connection::open(&self.db_path).unwrap();
            conn.execute(sql, rusqlite::params_from_iter(values.iter())).unwrap();
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_find_returns_same_task(ctx: &mut TaskTestContext) {
        let project = ctx.store.create_project("Garden").unwrap();

        let created = ctx.store.create_task("Plant tomatoes", project.id).unwrap();
        assert_eq!(created.name, "Plant tomatoes");
        assert_eq!(created.project, project);
        assert!(!created.done);

        let found = ctx.store.find_task_by_id(created.id).unwrap();
        assert_eq!(found, created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_task_in_missing_project(ctx: &mut TaskTestContext) {
        let err = ctx.store.create_task("Orphan", 99).err().unwrap();

        assert!(matches!(err, Error::NotFound { entity: "project", id: 99 }));
        assert!(ctx.store.list_all_tasks().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_blank_task_name_is_rejected(ctx: &mut TaskTestContext) {
        let err = ctx.store.create_task("", INBOX_ID).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_find_missing_task(ctx: &mut TaskTestContext) {
        let err = ctx.store.find_task_by_id(7).err().unwrap();
        assert!(matches!(err, Error::NotFound { entity: "task", id: 7 }));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ten_inbox_tasks_scenario(ctx: &mut TaskTestContext) {
        let mut created = Vec::new();
        for i in 1..=10 {
            created.push(ctx.store.create_task(&format!("Task {}", i), INBOX_ID).unwrap());
        }

        let all = ctx.store.list_all_tasks().unwrap();
        assert_eq!(all, created);
        for task in &created {
            assert_eq!(&ctx.store.find_task_by_id(task.id).unwrap(), task);
        }

        let mut third = created[2].clone();
        third.done = true;
        ctx.store.store_task(&third).unwrap();

        let reread = ctx.store.find_task_by_id(third.id).unwrap();
        assert!(reread.done);
        assert_eq!(reread.name, "Task 3");
        assert_eq!(reread.project, Project::inbox());
        assert_eq!(ctx.store.list_all_tasks().unwrap().len(), 10);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_tasks_in_project(ctx: &mut TaskTestContext) {
        let garden = ctx.store.create_project("Garden").unwrap();
        let house = ctx.store.create_project("House").unwrap();
        ctx.store.create_task("Weed beds", garden.id).unwrap();
        ctx.store.create_task("Fix door", house.id).unwrap();
        ctx.store.create_task("Mow lawn", garden.id).unwrap();

        let garden_tasks = ctx.store.list_tasks_in_project(garden.id).unwrap();
        let names: Vec<&str> = garden_tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Weed beds", "Mow lawn"]);
        assert!(garden_tasks.iter().all(|t| t.project == garden));

        assert!(ctx.store.list_tasks_in_project(INBOX_ID).unwrap().is_empty());
        assert!(ctx.store.list_tasks_in_project(42).err().unwrap().is_not_found());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_store_task_inserts_with_supplied_id(ctx: &mut TaskTestContext) {
        let project = ctx.store.create_project("Imported").unwrap();
        let task = Task {
            id: 42,
            name: "Restored task".to_string(),
            project: project.clone(),
            done: true,
        };

        ctx.store.store_task(&task).unwrap();

        assert_eq!(ctx.store.find_task_by_id(42).unwrap(), task);
        assert_eq!(ctx.store.list_all_tasks().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_store_task_updates_in_place(ctx: &mut TaskTestContext) {
        let project = ctx.store.create_project("Garden").unwrap();
        let mut task = ctx.store.create_task("Original name", INBOX_ID).unwrap();

        task.name = "Updated name".to_string();
        task.project = project.clone();
        task.done = true;
        ctx.store.store_task(&task).unwrap();

        let all = ctx.store.list_all_tasks().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], task);
        assert_eq!(all[0].project, project);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_store_task_rejects_missing_project(ctx: &mut TaskTestContext) {
        let mut task = ctx.store.create_task("Stay put", INBOX_ID).unwrap();
        task.project = Project::new(77, "Ghost");
        task.done = true;

        let err = ctx.store.store_task(&task).err().unwrap();
        assert!(err.is_not_found());

        let unchanged = ctx.store.find_task_by_id(task.id).unwrap();
        assert_eq!(unchanged.project, Project::inbox());
        assert!(!unchanged.done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_project_name_is_resolved_on_read(ctx: &mut TaskTestContext) {
        let project = ctx.store.create_project("Old name").unwrap();
        let task = ctx.store.create_task("Follow the rename", project.id).unwrap();

        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute("UPDATE projects SET name = ?1 WHERE id = ?2", params!["New name", project.id])
                .unwrap();
        }

        assert_eq!(ctx.store.find_task_by_id(task.id).unwrap().project.name, "New name");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_dangling_project_reference_is_not_found(ctx: &mut TaskTestContext) {
        ctx.raw("INSERT INTO tasks (id, name, project, done) VALUES (?1, 'Lost', ?2, 0)", &[3, 55]);

        let err = ctx.store.find_task_by_id(3).err().unwrap();
        assert!(matches!(err, Error::NotFound { entity: "project", id: 55 }));
        assert!(ctx.store.list_all_tasks().err().unwrap().is_not_found());
    }
}
