use pmaze_core::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error; {0}")]
    SettingsParse(#[from] ron::error::SpannedError),
    #[error("Settings write error; {0}")]
    SettingsWrite(#[from] ron::Error),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Cannot find directory for settings")]
    NoConfigDir,
}
