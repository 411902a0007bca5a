//! Task aggregate root and its validated scalar types.

use super::{NewUnitTest, TaskDomainError, TaskId, UnitTest, UnitTestId, UnitTestUpdate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty label of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskName {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(value: TaskName) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coding-challenge task aggregate root.
///
/// The unit tests are owned by the task: they are only reachable through it,
/// they are persisted with it, and they disappear with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: TaskName,
    level: i64,
    unit_tests: Vec<UnitTest>,
}

/// Validated field set for a task that has not been assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    name: TaskName,
    level: i64,
    unit_tests: Vec<NewUnitTest>,
}

impl NewTask {
    /// Creates a task field set with no unit tests.
    #[must_use]
    pub const fn new(name: TaskName, level: i64) -> Self {
        Self {
            name,
            level,
            unit_tests: Vec::new(),
        }
    }

    /// Sets the initial unit tests, kept in the given order.
    #[must_use]
    pub fn with_unit_tests(mut self, unit_tests: impl IntoIterator<Item = NewUnitTest>) -> Self {
        self.unit_tests = unit_tests.into_iter().collect();
        self
    }
}

/// Partial update for a task; `None` leaves a field untouched.
///
/// Unit tests are not part of a task update; they change only through the
/// unit test operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement name.
    pub name: Option<TaskName>,
    /// Replacement difficulty level.
    pub level: Option<i64>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted difficulty level.
    pub level: i64,
    /// Persisted unit tests in stored order.
    pub unit_tests: Vec<UnitTest>,
}

impl Task {
    /// Creates a task with a fresh identifier.
    ///
    /// Initial unit tests receive fresh identifiers and keep their order.
    #[must_use]
    pub fn create(new_task: NewTask) -> Self {
        let NewTask {
            name,
            level,
            unit_tests,
        } = new_task;
        let mut task = Self {
            id: TaskId::new(),
            name,
            level,
            unit_tests: Vec::with_capacity(unit_tests.len()),
        };
        for new_test in unit_tests {
            task.append_unit_test(new_test);
        }
        task
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            level: data.level,
            unit_tests: data.unit_tests,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the difficulty level.
    #[must_use]
    pub const fn level(&self) -> i64 {
        self.level
    }

    /// Returns the unit tests in stored order.
    #[must_use]
    pub fn unit_tests(&self) -> &[UnitTest] {
        &self.unit_tests
    }

    /// Looks up a unit test by its identifier within this task.
    #[must_use]
    pub fn unit_test(&self, test_id: UnitTestId) -> Option<&UnitTest> {
        self.unit_tests.iter().find(|test| test.id() == test_id)
    }

    /// Merges the fields present in `update`, leaving the rest unchanged.
    pub fn apply(&mut self, update: TaskUpdate) {
        let TaskUpdate { name, level } = update;
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = level {
            self.level = value;
        }
    }

    /// Appends a unit test to the end of the sequence and returns a copy of
    /// the stored entity.
    pub fn append_unit_test(&mut self, new_test: NewUnitTest) -> UnitTest {
        let mut test_id = UnitTestId::new();
        while self.unit_test(test_id).is_some() {
            test_id = UnitTestId::new();
        }
        let unit_test = UnitTest::from_new(test_id, new_test);
        self.unit_tests.push(unit_test.clone());
        unit_test
    }

    /// Merges `update` into the unit test with `test_id`.
    ///
    /// Returns `None` when this task has no such unit test.
    pub fn update_unit_test(
        &mut self,
        test_id: UnitTestId,
        update: UnitTestUpdate,
    ) -> Option<&UnitTest> {
        let test = self
            .unit_tests
            .iter_mut()
            .find(|test| test.id() == test_id)?;
        test.apply(update);
        Some(test)
    }

    /// Removes the unit test with `test_id`, keeping the order of the rest.
    ///
    /// Returns `None` when this task has no such unit test.
    pub fn remove_unit_test(&mut self, test_id: UnitTestId) -> Option<UnitTest> {
        let position = self
            .unit_tests
            .iter()
            .position(|test| test.id() == test_id)?;
        Some(self.unit_tests.remove(position))
    }
}
