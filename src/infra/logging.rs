use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Не удалось создать лог-файл: {0}")]
    Io(#[from] std::io::Error),

    #[error("Логгер уже инициализирован: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Логирование в терминал (stderr для warn/error) и, опционально, в файл.
///
/// В файл всегда пишется debug, включая разбор каждой раздачи.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            config,
            File::create(path)?,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
