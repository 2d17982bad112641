//! Core library modules for the todolist application.
//!
//! - **config** / **data_storage**: where settings and the database live
//! - **messages**: every user-facing string plus the printing macros
//! - **task**: the typed task record and input validation
//! - **view**: table and JSON rendering of task lists

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;
