//! Внешний API движка эквити (то, чем пользуется фронт / CLI).
//!
//! Здесь описываются:
//! - команды (commands.rs): прогон симуляции, оценка одной руки;
//! - DTO (dto.rs): структуры запросов и ответов для фронта;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
