//! Operations subject to authorization.

use std::fmt;

/// An operation a caller asks to perform on tasks or unit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List every task.
    ListTasks,
    /// Read one task.
    GetTask,
    /// Create a task.
    CreateTask,
    /// Partially update a task.
    UpdateTask,
    /// Delete a task and its unit tests.
    DeleteTask,
    /// List the unit tests of a task.
    ListUnitTests,
    /// Append a unit test to a task.
    AppendUnitTest,
    /// Partially update a unit test.
    UpdateUnitTest,
    /// Remove a unit test from a task.
    RemoveUnitTest,
}

impl Operation {
    /// Returns `true` for operations that change stored state.
    ///
    /// Only privileged callers may perform these.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        !matches!(self, Self::ListTasks | Self::GetTask | Self::ListUnitTests)
    }

    /// Returns a stable snake-case name for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListTasks => "list_tasks",
            Self::GetTask => "get_task",
            Self::CreateTask => "create_task",
            Self::UpdateTask => "update_task",
            Self::DeleteTask => "delete_task",
            Self::ListUnitTests => "list_unit_tests",
            Self::AppendUnitTest => "append_unit_test",
            Self::UpdateUnitTest => "update_unit_test",
            Self::RemoveUnitTest => "remove_unit_test",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
