//! Client-side task store backing the dashboard, task, and trash views.
//!
//! DESIGN
//! ======
//! Every mutation is a named method that validates its input, applies the
//! change, and appends an [`Activity`] to the task's history. Time and actor
//! are passed in so the rules stay deterministic under test.
//!
//! Stage and progress are linked: entering `Completed` forces progress to 100
//! and stamps `completed_at_ms`; leaving it clears the stamp. Setting progress
//! to 100 stamps completion, anything lower clears it.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::types::{Activity, ActivityKind, Priority, Task, TaskStage, UserRef};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    NotFound(String),
    #[error("task is already in {}", .0.label())]
    SameStage(TaskStage),
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(i32),
    #[error("due date cannot be before the start date")]
    DueBeforeStart,
    #[error("assignee {0} is not an active team member")]
    InactiveAssignee(String),
    #[error("task {0} is not in the trash")]
    NotTrashed(String),
}

/// Editable task fields, as collected from the task form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub stage: TaskStage,
    pub priority: Priority,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub assignees: Vec<String>,
}

/// Per-stage totals over non-trashed tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StageCounts {
    pub fn for_stage(&self, stage: TaskStage) -> usize {
        match stage {
            TaskStage::Todo => self.todo,
            TaskStage::InProgress => self.in_progress,
            TaskStage::Completed => self.completed,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TasksState {
    /// Newest first.
    tasks: Vec<Task>,
}

impl TasksState {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Task, TaskError> {
        self.tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| TaskError::NotFound(id.to_owned()))
    }

    /// Non-trashed tasks, optionally limited to one stage.
    pub fn by_stage(&self, stage: Option<TaskStage>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| !t.is_trashed && stage.map_or(true, |s| t.stage == s))
            .collect()
    }

    pub fn trashed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_trashed).collect()
    }

    pub fn stage_counts(&self) -> StageCounts {
        self.tasks.iter().filter(|t| !t.is_trashed).fold(StageCounts::default(), |mut acc, t| {
            acc.total += 1;
            match t.stage {
                TaskStage::Todo => acc.todo += 1,
                TaskStage::InProgress => acc.in_progress += 1,
                TaskStage::Completed => acc.completed += 1,
            }
            acc
        })
    }

    /// Add a task and return its id.
    ///
    /// # Errors
    ///
    /// Fails when the dates are out of order or an assignee is not an active
    /// member of `members`.
    pub fn create(
        &mut self,
        draft: TaskDraft,
        members: &[UserRef],
        actor: Option<&str>,
        now_ms: f64,
    ) -> Result<String, TaskError> {
        check_dates(draft.date.as_deref(), draft.due_date.as_deref())?;
        check_assignees(&draft.assignees, members)?;

        let mut task = Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title.trim().to_owned(),
            stage: draft.stage,
            priority: draft.priority,
            date: draft.date,
            due_date: draft.due_date,
            progress: 0,
            completed_at_ms: None,
            assignees: draft.assignees,
            activities: Vec::new(),
            is_trashed: false,
        };
        if task.stage == TaskStage::Completed {
            task.progress = 100;
            task.completed_at_ms = Some(now_ms);
        }
        let detail = format!("title={}", task.title);
        record(&mut task, ActivityKind::Created, detail, actor, now_ms);
        let id = task.id.clone();
        self.tasks.insert(0, task);
        Ok(id)
    }

    /// Replace the editable fields of a task. Stage changes go through
    /// [`Self::change_stage`] so completion bookkeeping stays in one place.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks, out-of-order dates, newly added inactive
    /// assignees, or a stage change that [`Self::change_stage`] rejects.
    /// Assignees already on the task are kept even if they left the team.
    pub fn update(
        &mut self,
        id: &str,
        draft: TaskDraft,
        members: &[UserRef],
        actor: Option<&str>,
        now_ms: f64,
    ) -> Result<(), TaskError> {
        check_dates(draft.date.as_deref(), draft.due_date.as_deref())?;
        let current = &self.get(id).ok_or_else(|| TaskError::NotFound(id.to_owned()))?.assignees;
        let added: Vec<String> = draft.assignees.iter().filter(|a| !current.contains(a)).cloned().collect();
        check_assignees(&added, members)?;

        let stage_changed = self.get_mut(id)?.stage != draft.stage;
        if stage_changed {
            self.change_stage(id, draft.stage, actor, None, now_ms)?;
        }
        let task = self.get_mut(id)?;
        task.title = draft.title.trim().to_owned();
        task.priority = draft.priority;
        task.date = draft.date;
        task.due_date = draft.due_date;
        task.assignees = draft.assignees;
        record(task, ActivityKind::Updated, "fields updated".to_owned(), actor, now_ms);
        Ok(())
    }

    /// Move a task to another stage.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks and for a move into the stage the task is
    /// already in.
    pub fn change_stage(
        &mut self,
        id: &str,
        to: TaskStage,
        actor: Option<&str>,
        note: Option<&str>,
        now_ms: f64,
    ) -> Result<(), TaskError> {
        let task = self.get_mut(id)?;
        if task.stage == to {
            return Err(TaskError::SameStage(to));
        }
        let from = task.stage;
        task.stage = to;
        if to == TaskStage::Completed {
            task.progress = 100;
            task.completed_at_ms = Some(now_ms);
        } else {
            task.completed_at_ms = None;
        }
        let detail = format!("{}->{}, note={}", from.segment(), to.segment(), note.unwrap_or("-"));
        record(task, ActivityKind::StageChanged, detail, actor, now_ms);
        Ok(())
    }

    /// Set the completion percentage.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks and for values outside `0..=100`.
    pub fn update_progress(
        &mut self,
        id: &str,
        progress: i32,
        actor: Option<&str>,
        now_ms: f64,
    ) -> Result<(), TaskError> {
        let value = u8::try_from(progress)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(TaskError::ProgressOutOfRange(progress))?;
        let task = self.get_mut(id)?;
        task.progress = value;
        if value == 100 {
            if task.completed_at_ms.is_none() {
                task.completed_at_ms = Some(now_ms);
            }
        } else {
            task.completed_at_ms = None;
        }
        record(task, ActivityKind::ProgressUpdated, format!("progress={value}"), actor, now_ms);
        Ok(())
    }

    /// Replace the assignee list.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks or assignees that are not active members.
    pub fn assign(
        &mut self,
        id: &str,
        assignees: Vec<String>,
        members: &[UserRef],
        actor: Option<&str>,
        now_ms: f64,
    ) -> Result<(), TaskError> {
        check_assignees(&assignees, members)?;
        let task = self.get_mut(id)?;
        let detail = format!("assigned_to={}", assignees.join(","));
        task.assignees = assignees;
        record(task, ActivityKind::Assigned, detail, actor, now_ms);
        Ok(())
    }

    /// Move a task to the trash. Trashing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks.
    pub fn trash(&mut self, id: &str, actor: Option<&str>, now_ms: f64) -> Result<(), TaskError> {
        let task = self.get_mut(id)?;
        if !task.is_trashed {
            task.is_trashed = true;
            record(task, ActivityKind::Trashed, String::new(), actor, now_ms);
        }
        Ok(())
    }

    /// Bring a trashed task back.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks and tasks that are not trashed.
    pub fn restore(&mut self, id: &str, actor: Option<&str>, now_ms: f64) -> Result<(), TaskError> {
        let task = self.get_mut(id)?;
        if !task.is_trashed {
            return Err(TaskError::NotTrashed(id.to_owned()));
        }
        task.is_trashed = false;
        record(task, ActivityKind::Restored, String::new(), actor, now_ms);
        Ok(())
    }

    /// Permanently remove a trashed task.
    ///
    /// # Errors
    ///
    /// Fails for unknown tasks and tasks that are not trashed.
    pub fn delete_forever(&mut self, id: &str) -> Result<(), TaskError> {
        if !self.get_mut(id)?.is_trashed {
            return Err(TaskError::NotTrashed(id.to_owned()));
        }
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }

    /// Restore every trashed task. Returns how many were restored.
    pub fn restore_all(&mut self, actor: Option<&str>, now_ms: f64) -> usize {
        let mut restored = 0;
        for task in self.tasks.iter_mut().filter(|t| t.is_trashed) {
            task.is_trashed = false;
            record(task, ActivityKind::Restored, String::new(), actor, now_ms);
            restored += 1;
        }
        restored
    }

    /// Permanently remove every trashed task. Returns how many were removed.
    pub fn empty_trash(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.is_trashed);
        before - self.tasks.len()
    }
}

fn record(task: &mut Task, kind: ActivityKind, detail: String, actor: Option<&str>, now_ms: f64) {
    task.activities.push(Activity {
        id: uuid::Uuid::new_v4().to_string(),
        kind,
        detail,
        by: actor.map(str::to_owned),
        at_ms: now_ms,
    });
}

/// ISO `YYYY-MM-DD` strings order lexically, so a plain comparison works.
fn check_dates(start: Option<&str>, due: Option<&str>) -> Result<(), TaskError> {
    match (start, due) {
        (Some(start), Some(due)) if due < start => Err(TaskError::DueBeforeStart),
        _ => Ok(()),
    }
}

fn check_assignees(assignees: &[String], members: &[UserRef]) -> Result<(), TaskError> {
    for id in assignees {
        let active = members.iter().any(|m| &m.id == id && m.is_active);
        if !active {
            return Err(TaskError::InactiveAssignee(id.clone()));
        }
    }
    Ok(())
}
