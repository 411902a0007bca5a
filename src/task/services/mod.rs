//! Application services for task and unit test management.

mod error;
mod repository;
mod requests;

pub use error::{TaskServiceError, TaskServiceResult};
pub use repository::TaskRepository;
pub use requests::{
    CreateTaskRequest, CreateUnitTestRequest, UpdateTaskRequest, UpdateUnitTestRequest,
};
pub use unit_tests::UnitTestCollection;
