use std::fs::File;
use std::path::Path;

use log::LevelFilter;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogSetupError {
    #[error("could not create log file {path}: {source}")]
    CreateFile {
        path: String,
        source: std::io::Error,
    },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Send log records to `path` instead of the terminal, which belongs to the UI.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn init_file_logger(path: &Path) -> Result<(), LogSetupError> {
    let file = File::create(path).map_err(|e| LogSetupError::CreateFile {
        path: path.display().to_string(),
        source: e,
    })?;
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
