use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

mod layout;

pub use layout::CourseLayout;

/// Special-day keyword that earns its own marker on the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredKeyword {
    pub keyword: String,
    pub marker: String,
    pub label: String,
}

impl StarredKeyword {
    pub fn new(keyword: &str, marker: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            marker: marker.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_university")]
    pub university: String,
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    #[serde(default = "default_last_year")]
    pub last_year: i32,
    #[serde(default = "default_starred_keywords")]
    pub starred_keywords: Vec<StarredKeyword>,
    #[serde(default = "default_class_marker")]
    pub class_marker: String,
    #[serde(default = "default_named_day_marker")]
    pub named_day_marker: String,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    #[serde(default)]
    pub course_layout: CourseLayout,
}

fn default_university() -> String {
    "Tech University".to_string()
}
fn default_first_year() -> i32 {
    2023
}
fn default_last_year() -> i32 {
    2030
}
fn default_class_marker() -> String {
    "●".to_string()
}
fn default_named_day_marker() -> String {
    "⭐".to_string()
}
fn default_cache_capacity() -> usize {
    4
}
fn default_starred_keywords() -> Vec<StarredKeyword> {
    vec![
        StarredKeyword::new("workshop", "🔵", "Workshop"),
        StarredKeyword::new("orientation", "🟢", "Orientation"),
        StarredKeyword::new("seminar", "🟣", "Seminar"),
        StarredKeyword::new("hackathon", "🟠", "Hackathon"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            university: default_university(),
            first_year: default_first_year(),
            last_year: default_last_year(),
            starred_keywords: default_starred_keywords(),
            class_marker: default_class_marker(),
            named_day_marker: default_named_day_marker(),
            cache_capacity: default_cache_capacity(),
            course_layout: CourseLayout::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("acadcal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".acadcal")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("acadcal.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`.
    /// An existing file is only replaced when `force` is set.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }

    fn validate(&self) -> AppResult<()> {
        if self.first_year > self.last_year {
            return Err(AppError::Config(format!(
                "first_year ({}) is after last_year ({})",
                self.first_year, self.last_year
            )));
        }
        if self.cache_capacity == 0 {
            return Err(AppError::Config(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.starred_keywords.iter().any(|k| k.keyword.trim().is_empty()) {
            return Err(AppError::Config(
                "starred_keywords entries need a non-empty keyword".to_string(),
            ));
        }
        Ok(())
    }

    /// Check `year` against the selectable range.
    pub fn check_year(&self, year: i32) -> AppResult<i32> {
        if (self.first_year..=self.last_year).contains(&year) {
            Ok(year)
        } else {
            Err(AppError::InvalidYear {
                year,
                first: self.first_year,
                last: self.last_year,
            })
        }
    }
}
