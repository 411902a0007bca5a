//! Domain model for coding-challenge tasks.
//!
//! A task owns an ordered sequence of unit tests. Unit tests are addressed by
//! a `(task id, unit test id)` pair and are only ever read or written through
//! their owning task, which keeps ordering and cascade deletion local to the
//! aggregate.

mod error;
mod ids;
mod task;

pub use error::{ParseIdError, TaskDomainError};
pub use ids::{TaskId, UnitTestId};
pub use task::{NewTask, PersistedTaskData, Task, TaskName, TaskUpdate};
pub use unit_test::{Language, NewUnitTest, ScoreFactor, UnitTest, UnitTestUpdate};
