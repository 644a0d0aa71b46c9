//! Task store: creation, shallow-merge updates, assignment and delegation.
//!
//! # Invariants
//! - Every mutation appends exactly one activity entry to the touched task.
//! - `update_task` changes only the target task; all others keep identical
//!   serialized form.
//! - Derived queries are linear scans in insertion order.

use crate::model::task::{NewTask, Task, TaskAction, TaskActivity, TaskPatch, TaskStatus};
use crate::model::{new_record_id, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, TASK_STORAGE_KEY};
use log::info;

impl Record for Task {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct TaskStore {
    tasks: Collection<Task>,
}

impl TaskStore {
    pub fn open(storage: SharedStorage) -> RepoResult<Self> {
        Ok(Self {
            tasks: Collection::load(storage, TASK_STORAGE_KEY)?,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.items()
    }

    pub fn get_task(&self, id: RecordId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.tasks.revision()
    }

    /// Creates a pending task with a fresh id.
    pub fn add_task(&mut self, request: NewTask) -> StoreResult<Task> {
        let task = request.into_task(new_record_id());
        task.validate()?;
        self.tasks.insert(task.clone())?;
        info!(
            "event=task_add module=task status=ok task_id={} assignees={}",
            task.id,
            task.assigned_to.len()
        );
        Ok(task)
    }

    /// Shallow-merges `patch` into the task with `id`.
    ///
    /// Besides the patched fields, `updatedAt` is refreshed and one `updated`
    /// activity entry naming the fields is appended. An empty patch changes
    /// nothing.
    pub fn update_task(&mut self, id: RecordId, patch: TaskPatch) -> StoreResult<Task> {
        if patch.is_empty() {
            return self.get_task(id).cloned().ok_or(StoreError::NotFound(id));
        }
        let detail = patch.field_names().join(",");
        self.mutate(id, move |task| {
            let activity = TaskActivity::now(TaskAction::Updated, None, Some(detail));
            patch.apply_to(task, activity.at);
            task.validate()?;
            task.record(activity);
            Ok(())
        })
    }

    pub fn delete_task(&mut self, id: RecordId) -> StoreResult<Task> {
        let removed = self.tasks.remove(id)?;
        info!("event=task_delete module=task status=ok task_id={id}");
        Ok(removed)
    }

    /// Replaces the assignee list of a task.
    pub fn assign_task(
        &mut self,
        id: RecordId,
        employee_ids: Vec<RecordId>,
        actor: Option<RecordId>,
    ) -> StoreResult<Task> {
        let mut unique = Vec::with_capacity(employee_ids.len());
        for employee_id in employee_ids {
            if !unique.contains(&employee_id) {
                unique.push(employee_id);
            }
        }
        let detail = format!("{} assignee(s)", unique.len());
        self.mutate(id, move |task| {
            task.assigned_to = unique;
            task.record(TaskActivity::now(TaskAction::Assigned, actor, Some(detail)));
            Ok(())
        })
    }

    /// Hands the task to `manager_id` on behalf of `delegated_by`.
    pub fn delegate_task(
        &mut self,
        id: RecordId,
        manager_id: RecordId,
        delegated_by: RecordId,
    ) -> StoreResult<Task> {
        self.mutate(id, move |task| {
            task.assigned_to_manager = Some(manager_id);
            task.delegated_by = Some(delegated_by);
            task.record(TaskActivity::now(
                TaskAction::Delegated,
                Some(delegated_by),
                Some(manager_id.to_string()),
            ));
            Ok(())
        })
    }

    pub fn set_task_status(
        &mut self,
        id: RecordId,
        status: TaskStatus,
        actor: Option<RecordId>,
    ) -> StoreResult<Task> {
        self.mutate(id, move |task| {
            let action = if status == TaskStatus::Completed {
                TaskAction::Completed
            } else {
                TaskAction::StatusChanged
            };
            let activity = TaskActivity::now(action, actor, Some(status.as_str().to_string()));
            task.set_status(status, activity.at);
            task.record(activity);
            Ok(())
        })
    }

    pub fn complete_task(&mut self, id: RecordId, actor: Option<RecordId>) -> StoreResult<Task> {
        self.set_task_status(id, TaskStatus::Completed, actor)
    }

    /// Tasks owned by `manager_id`.
    pub fn tasks_by_manager(&self, manager_id: RecordId) -> Vec<Task> {
        self.tasks.filter(|task| task.assigned_to_manager == Some(manager_id))
    }

    /// Tasks where `employee_id` is an assignee.
    pub fn tasks_for_employee(&self, employee_id: RecordId) -> Vec<Task> {
        self.tasks.filter(|task| task.is_assigned_to(employee_id))
    }

    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks.filter(|task| task.status == status)
    }

    /// Open tasks whose deadline passed before `now`.
    pub fn overdue_tasks(&self, now: i64) -> Vec<Task> {
        self.tasks.filter(|task| task.is_past_deadline(now))
    }

    fn mutate(
        &mut self,
        id: RecordId,
        change: impl FnOnce(&mut Task) -> StoreResult<()>,
    ) -> StoreResult<Task> {
        let task = self.tasks.update(id, change)?;
        info!(
            "event=task_update module=task status=ok task_id={id} activity_len={}",
            task.activity.len()
        );
        Ok(task)
    }
}
