use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PMC 文章的分节符
    pub separator: String,
    /// 预处理结果目录名（单文件默认输出目录，以及语料输出目录的后缀）
    pub output_folder: String,
    /// front 部分的元数据结束标记
    pub stopstrings_front: Vec<String>,
    /// body 部分的元数据开始标记
    pub stopstrings_body: Vec<String>,
    /// 同时处理的文件数量
    pub max_concurrent_files: usize,
    /// 运行日志文件
    pub output_log_file: String,
    /// 失败文件清单
    pub failure_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: "====".to_string(),
            output_folder: "preprocessed".to_string(),
            stopstrings_front: vec![
                "cited".to_string(),
                "license".to_string(),
                "credited".to_string(),
                "lawful purpose".to_string(),
            ],
            stopstrings_body: vec![
                "acknowledgements".to_string(),
                "supporting information".to_string(),
            ],
            max_concurrent_files: 1,
            output_log_file: "scrub_log.txt".to_string(),
            failure_log_file: "failed.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let config = Self {
            separator: std::env::var("SCRUB_SEPARATOR").unwrap_or(default.separator),
            output_folder: std::env::var("SCRUB_OUTPUT_FOLDER").unwrap_or(default.output_folder),
            stopstrings_front: std::env::var("SCRUB_STOPSTRINGS_FRONT").ok().map(|v| split_list(&v)).unwrap_or(default.stopstrings_front),
            stopstrings_body: std::env::var("SCRUB_STOPSTRINGS_BODY").ok().map(|v| split_list(&v)).unwrap_or(default.stopstrings_body),
            max_concurrent_files: match std::env::var("MAX_CONCURRENT_FILES") {
                Ok(v) => v.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "MAX_CONCURRENT_FILES".to_string(),
                    value: v.clone(),
                    expected_type: "usize".to_string(),
                })?,
                Err(_) => default.max_concurrent_files,
            },
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            failure_log_file: std::env::var("FAILURE_LOG_FILE").unwrap_or(default.failure_log_file),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AppError::file_read_failed(path, e))?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "separator".to_string(),
                reason: "分节符不能为空".to_string(),
            }
            .into());
        }
        if self.output_folder.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_folder".to_string(),
                reason: "输出目录名不能为空".to_string(),
            }
            .into());
        }
        if self.max_concurrent_files == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_files".to_string(),
                reason: "并发数至少为 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// 逗号分隔的列表，去掉空项
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
