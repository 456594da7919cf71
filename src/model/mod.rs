//! Widget state: tasks, the user directory, and the product catalog. Each
//! widget owns its records exclusively; nothing is shared between them.

pub mod catalog;
pub mod directory;
pub mod field;
pub mod ids;
pub mod tasks;
