use serde::{Deserialize, Serialize};

use crate::core::error::TimeConvError;

/// 结构化输出使用的渲染时区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputZone {
    Utc,
    Local,
}

impl Default for OutputZone {
    fn default() -> Self {
        Self::Utc
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub current_time: bool,
    pub local_zone: bool,
    pub epoch_output: bool,
    pub add_mode: bool,
    pub diff_mode: bool,
    pub args: Vec<String>,
}

impl Config {
    pub fn zone(&self) -> OutputZone {
        if self.local_zone {
            OutputZone::Local
        } else {
            OutputZone::Utc
        }
    }

    /// 验证标志组合
    pub fn validate(&self) -> Result<(), TimeConvError> {
        if self.add_mode && self.diff_mode {
            return Err(TimeConvError::config_error(
                "-a and -d cannot be combined",
            ));
        }
        Ok(())
    }
}
