use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 调用约定错误（属于程序缺陷，不应被按文件隔离吞掉）
    #[error("约定错误: {0}")]
    Contract(#[from] ContractError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({}): {source}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取目录失败
    #[error("读取目录失败 ({}): {source}", .path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 源路径没有文件名
    #[error("路径缺少文件名: {}", .path.display())]
    MissingFileName { path: PathBuf },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 语料目录无法确定目录名
    #[error("无法确定语料目录名: {}", .path.display())]
    InvalidCorpusDir { path: PathBuf },
    /// 配置值非法
    #[error("配置项 {field} 非法: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 调用约定错误
#[derive(Debug, Error)]
pub enum ContractError {
    /// 片段模式只能是 front / body
    #[error("未知的片段模式 '{mode}'，只接受 front 或 body")]
    InvalidSegmentMode { mode: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建目录创建错误
    pub fn create_dir_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建目录读取错误
    pub fn read_dir_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadDirFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否为调用约定错误
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, AppError::Contract(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
