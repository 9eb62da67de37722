//! Tasks Domain
//!
//! Client-side domain layer for managing tasks against a remote HTTP store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Validation, state synchronization
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │    Store    │  ← In-memory mirror + change signal
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, draft, id, priority
//! └─────────────┘
//! ```
//!
//! The repository issues the four CRUD calls against the remote store; the
//! service folds each confirmed response into the in-memory [`TaskStore`],
//! which is the single source of truth for the presentation layer.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{HttpTaskRepository, TaskService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = HttpTaskRepository::default();
//! let mut service = TaskService::new(repository);
//!
//! service.refresh().await?;
//! println!("{} tasks", service.store().len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use http::{HttpTaskRepository, DEFAULT_BASE_URL};
pub use models::{Task, TaskDraft, TaskId, TaskPriority};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use store::TaskStore;
