//! Request payloads accepted by the task services.
//!
//! Every field is optional at this level so that absent fields can be told
//! apart from malformed ones. Create requests turn into validated domain
//! values; update requests turn into typed partial updates.

use crate::task::domain::{
    Language, NewTask, NewUnitTest, ScoreFactor, TaskDomainError, TaskName, TaskUpdate,
    UnitTestUpdate,
};
use serde::Deserialize;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    name: Option<String>,
    level: Option<i64>,
    #[serde(default)]
    unit_tests: Vec<CreateUnitTestRequest>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self::default().with_name(name).with_level(level)
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the difficulty level.
    #[must_use]
    pub const fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Appends an initial unit test.
    #[must_use]
    pub fn with_unit_test(mut self, unit_test: CreateUnitTestRequest) -> Self {
        self.unit_tests.push(unit_test);
        self
    }

    /// Validates the request into a task field set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when `name` or `level` is missing, the name
    /// is blank, or any initial unit test is invalid.
    pub fn into_new_task(self) -> Result<NewTask, TaskDomainError> {
        let raw_name = self.name.ok_or(TaskDomainError::MissingField("name"))?;
        let name = TaskName::new(raw_name)?;
        let level = self.level.ok_or(TaskDomainError::MissingField("level"))?;
        let unit_tests = self
            .unit_tests
            .into_iter()
            .map(CreateUnitTestRequest::into_new_unit_test)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NewTask::new(name, level).with_unit_tests(unit_tests))
    }
}

/// Request payload for a partial task update.
///
/// `id` and `unitTests` in the incoming payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    name: Option<String>,
    level: Option<i64>,
}

impl UpdateTaskRequest {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement difficulty level.
    #[must_use]
    pub const fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Validates the request into a typed partial update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyName`] when a blank name is supplied.
    pub fn into_update(self) -> Result<TaskUpdate, TaskDomainError> {
        Ok(TaskUpdate {
            name: self.name.map(TaskName::new).transpose()?,
            level: self.level,
        })
    }
}

/// Request payload for appending a unit test.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitTestRequest {
    init_code: Option<String>,
    test_code: Option<String>,
    language: Option<String>,
    score_factor: Option<f64>,
}

impl CreateUnitTestRequest {
    /// Creates a request with every unit test field.
    #[must_use]
    pub fn new(
        init_code: impl Into<String>,
        test_code: impl Into<String>,
        language: impl Into<String>,
        score_factor: f64,
    ) -> Self {
        Self {
            init_code: Some(init_code.into()),
            test_code: Some(test_code.into()),
            language: Some(language.into()),
            score_factor: Some(score_factor),
        }
    }

    /// Drops the setup code.
    #[must_use]
    pub fn without_init_code(mut self) -> Self {
        self.init_code = None;
        self
    }

    /// Drops the score factor.
    #[must_use]
    pub const fn without_score_factor(mut self) -> Self {
        self.score_factor = None;
        self
    }

    /// Validates the request into a unit test field set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a field is missing, the language is
    /// blank, or the score factor is not a finite non-negative number.
    pub fn into_new_unit_test(self) -> Result<NewUnitTest, TaskDomainError> {
        let init_code = self
            .init_code
            .ok_or(TaskDomainError::MissingField("initCode"))?;
        let test_code = self
            .test_code
            .ok_or(TaskDomainError::MissingField("testCode"))?;
        let raw_language = self
            .language
            .ok_or(TaskDomainError::MissingField("language"))?;
        let raw_score_factor = self
            .score_factor
            .ok_or(TaskDomainError::MissingField("scoreFactor"))?;
        Ok(NewUnitTest::new(
            init_code,
            test_code,
            Language::new(raw_language)?,
            ScoreFactor::new(raw_score_factor)?,
        ))
    }
}

/// Request payload for a partial unit test update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitTestRequest {
    init_code: Option<String>,
    test_code: Option<String>,
    language: Option<String>,
    score_factor: Option<f64>,
}

impl UpdateUnitTestRequest {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement setup code.
    #[must_use]
    pub fn with_init_code(mut self, init_code: impl Into<String>) -> Self {
        self.init_code = Some(init_code.into());
        self
    }

    /// Sets the replacement assertion code.
    #[must_use]
    pub fn with_test_code(mut self, test_code: impl Into<String>) -> Self {
        self.test_code = Some(test_code.into());
        self
    }

    /// Sets the replacement language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the replacement score factor.
    #[must_use]
    pub const fn with_score_factor(mut self, score_factor: f64) -> Self {
        self.score_factor = Some(score_factor);
        self
    }

    /// Validates the request into a typed partial update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a supplied language is blank or a
    /// supplied score factor is not a finite non-negative number.
    pub fn into_update(self) -> Result<UnitTestUpdate, TaskDomainError> {
        Ok(UnitTestUpdate {
            init_code: self.init_code,
            test_code: self.test_code,
            language: self.language.map(Language::new).transpose()?,
            score_factor: self.score_factor.map(ScoreFactor::new).transpose()?,
        })
    }
}
