use rolecrm_core::{
    MemorySessionStorage, NewTask, StoreError, TaskAction, TaskPatch, TaskPriority, TaskStatus,
    TaskStore,
};
use uuid::Uuid;

fn open_store() -> TaskStore {
    TaskStore::open(MemorySessionStorage::shared()).unwrap()
}

#[test]
fn update_task_merges_fields_and_leaves_others_identical() {
    let mut store = open_store();
    let first = store.add_task(NewTask::titled("first")).unwrap();
    let target = store
        .add_task(NewTask {
            title: "target".to_string(),
            description: "keep me".to_string(),
            deadline: Some(1_000),
            ..NewTask::default()
        })
        .unwrap();
    let last = store.add_task(NewTask::titled("last")).unwrap();
    let before_first = serde_json::to_string(store.get_task(first.id).unwrap()).unwrap();
    let before_last = serde_json::to_string(store.get_task(last.id).unwrap()).unwrap();

    let updated = store
        .update_task(
            target.id,
            TaskPatch {
                title: Some("renamed".to_string()),
                priority: Some(TaskPriority::High),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.priority, TaskPriority::High);
    assert_eq!(updated.description, "keep me");
    assert_eq!(updated.deadline, Some(1_000));
    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(updated.activity.last().unwrap().action, TaskAction::Updated);
    assert_eq!(
        updated.activity.last().unwrap().detail.as_deref(),
        Some("title,priority")
    );

    assert_eq!(
        serde_json::to_string(store.get_task(first.id).unwrap()).unwrap(),
        before_first
    );
    assert_eq!(
        serde_json::to_string(store.get_task(last.id).unwrap()).unwrap(),
        before_last
    );
    let order: Vec<_> = store.tasks().iter().map(|task| task.id).collect();
    assert_eq!(order, vec![first.id, target.id, last.id]);
}

#[test]
fn update_task_refreshes_bookkeeping_fields_only_for_non_empty_patches() {
    let mut store = open_store();
    let task = store.add_task(NewTask::titled("bookkeeping")).unwrap();
    let revision = store.revision();

    let unchanged = store.update_task(task.id, TaskPatch::default()).unwrap();
    assert_eq!(unchanged, task);
    assert_eq!(store.revision(), revision);

    let updated = store
        .update_task(
            task.id,
            TaskPatch {
                description: Some("details".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.activity.len(), task.activity.len() + 1);
    assert!(updated.updated_at >= task.updated_at);
    assert_eq!(updated.created_at, task.created_at);
    assert_eq!(store.revision(), revision + 1);
}

#[test]
fn update_missing_task_reports_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();
    let err = store
        .update_task(
            missing,
            TaskPatch {
                title: Some("x".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn blank_title_is_rejected_without_side_effects() {
    let mut store = open_store();
    assert!(matches!(
        store.add_task(NewTask::titled("   ")),
        Err(StoreError::Validation(_))
    ));
    let task = store.add_task(NewTask::titled("ok")).unwrap();
    let revision = store.revision();
    let err = store
        .update_task(
            task.id,
            TaskPatch {
                title: Some(String::new()),
                ..TaskPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get_task(task.id).unwrap(), &task);
    assert_eq!(store.revision(), revision);
}

#[test]
fn assignment_delegation_and_completion_are_tracked() {
    let mut store = open_store();
    let admin = Uuid::new_v4();
    let manager = Uuid::new_v4();
    let employee_a = Uuid::new_v4();
    let employee_b = Uuid::new_v4();
    let task = store.add_task(NewTask::titled("onboard")).unwrap();

    let delegated = store.delegate_task(task.id, manager, admin).unwrap();
    assert_eq!(delegated.assigned_to_manager, Some(manager));
    assert_eq!(delegated.delegated_by, Some(admin));

    let assigned = store
        .assign_task(task.id, vec![employee_a, employee_b, employee_a], Some(manager))
        .unwrap();
    assert_eq!(assigned.assigned_to, vec![employee_a, employee_b]);

    let completed = store.complete_task(task.id, Some(employee_a)).unwrap();
    assert_eq!(completed.status, TaskStatus::Completed);
    assert!(completed.completed_at.is_some());

    let actions: Vec<_> = completed.activity.iter().map(|entry| entry.action).collect();
    assert_eq!(
        actions,
        vec![
            TaskAction::Created,
            TaskAction::Delegated,
            TaskAction::Assigned,
            TaskAction::Completed
        ]
    );

    assert_eq!(store.tasks_by_manager(manager).len(), 1);
    assert_eq!(store.tasks_for_employee(employee_b).len(), 1);
    assert!(store.tasks_for_employee(Uuid::new_v4()).is_empty());
    assert_eq!(store.tasks_by_status(TaskStatus::Completed).len(), 1);
    assert!(store.tasks_by_status(TaskStatus::Pending).is_empty());
}

#[test]
fn overdue_query_uses_deadline_and_status() {
    let mut store = open_store();
    let late = store
        .add_task(NewTask {
            title: "late".to_string(),
            deadline: Some(100),
            ..NewTask::default()
        })
        .unwrap();
    let done = store
        .add_task(NewTask {
            title: "done".to_string(),
            deadline: Some(100),
            ..NewTask::default()
        })
        .unwrap();
    store.add_task(NewTask::titled("no deadline")).unwrap();
    store.complete_task(done.id, None).unwrap();

    let overdue = store.overdue_tasks(200);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, late.id);
}

#[test]
fn delete_and_reload_from_storage() {
    let storage = MemorySessionStorage::shared();
    let mut store = TaskStore::open(storage.clone()).unwrap();
    let keep = store.add_task(NewTask::titled("keep")).unwrap();
    let dropped = store.add_task(NewTask::titled("drop")).unwrap();
    store.delete_task(dropped.id).unwrap();
    assert!(matches!(
        store.delete_task(dropped.id),
        Err(StoreError::NotFound(_))
    ));

    let reloaded = TaskStore::open(storage).unwrap();
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.get_task(keep.id).unwrap(), &keep);
}

#[test]
fn rapid_inserts_get_distinct_ids() {
    let mut store = open_store();
    for index in 0..200 {
        store.add_task(NewTask::titled(format!("task {index}"))).unwrap();
    }
    let mut ids: Vec<_> = store.tasks().iter().map(|task| task.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}
