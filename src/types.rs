//! Shared DTOs for users, tasks, and their activity history.
//!
//! DESIGN
//! ======
//! These types are serde-friendly so a create/update API client plugged in at
//! the form submission boundary can forward them without remapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user or team member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserRef {
    /// Two-letter initials shown in avatars.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Workflow stage of a task. Each stage owns a route segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStage {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStage {
    pub const ALL: [TaskStage; 3] = [TaskStage::Todo, TaskStage::InProgress, TaskStage::Completed];

    /// Route segment used by the stage-filtered task views.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_segment(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.segment() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Normal,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::High, Priority::Medium, Priority::Normal, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Kind of entry recorded in a task's activity history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Created,
    Updated,
    StageChanged,
    ProgressUpdated,
    Assigned,
    Trashed,
    Restored,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
            Self::StageChanged => "Stage changed",
            Self::ProgressUpdated => "Progress updated",
            Self::Assigned => "Assigned",
            Self::Trashed => "Moved to trash",
            Self::Restored => "Restored",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub detail: String,
    /// Id of the acting user, if known.
    pub by: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub at_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub stage: TaskStage,
    pub priority: Priority,
    /// Start date as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Completion percentage in `0..=100`.
    pub progress: u8,
    pub completed_at_ms: Option<f64>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub is_trashed: bool,
}
