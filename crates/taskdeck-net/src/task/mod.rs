//! Tasks: the domain model, the backend wire format and the service that
//! moves between them.

mod mapper;
mod model;
mod service;

pub use mapper::BackendTask;
pub use model::{
    Priority, Situation, SituationCounts, SortDirection, Task, TaskPage, TaskQuery,
};
pub use service::TaskService;
