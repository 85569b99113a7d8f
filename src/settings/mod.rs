use ron::{self, extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::pmcore::AppError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ORDER: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Level `steps` more verbose than this one, saturating at trace.
    pub fn raised(self, steps: u8) -> Self {
        let idx = (self as usize + steps as usize).min(Self::ORDER.len() - 1);
        Self::ORDER[idx]
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub show_solution: Option<bool>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

#[allow(dead_code)]
impl Settings {
    pub const DEFAULT_WIDTH: i32 = 15;
    pub const DEFAULT_HEIGHT: i32 = 15;

    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every unset value with its default. `seed` and `output` have no default.
    pub fn populate(mut self) -> Self {
        self.width = Some(self.get_width());
        self.height = Some(self.get_height());
        self.show_solution = Some(self.get_show_solution());
        self.log_level = Some(self.get_log_level());

        self
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(Self::DEFAULT_WIDTH)
    }

    pub fn set_height(mut self, value: i32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(Self::DEFAULT_HEIGHT)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_show_solution(mut self, value: bool) -> Self {
        self.show_solution = Some(value);
        self
    }

    pub fn get_show_solution(&self) -> bool {
        self.show_solution.unwrap_or_default()
    }

    pub fn set_output(mut self, value: PathBuf) -> Self {
        self.output = Some(value);
        self
    }

    pub fn get_output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> Result<PathBuf, AppError> {
        dirs::preference_dir()
            .map(|dir| dir.join("pmaze").join("settings.ron"))
            .ok_or(AppError::NoConfigDir)
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(settings_string: &str) -> Result<Self, AppError> {
        Ok(Self::options().from_str(settings_string)?)
    }

    pub fn to_ron(&self) -> Result<String, AppError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Reads settings from `path`. A missing file is created with the default settings.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Self::parse(&settings_string),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
