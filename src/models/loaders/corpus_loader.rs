use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 语料中的一个子目录及其文章文件
#[derive(Debug, Clone)]
pub struct ArticleFolder {
    pub path: PathBuf,
    pub files: Vec<PathBuf>,
}

/// 列出语料目录下的所有子目录（只看一层），按路径排序
pub async fn list_article_folders(corpus_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut folders = Vec::new();
    let mut entries = fs::read_dir(corpus_dir)
        .await
        .map_err(|e| AppError::read_dir_failed(corpus_dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::read_dir_failed(corpus_dir, e))?
    {
        let path = entry.path();
        if fs::metadata(&path).await.map(|m| m.is_dir()).unwrap_or(false) {
            folders.push(path);
        } else {
            tracing::debug!("跳过非目录项: {}", path.display());
        }
    }

    folders.sort();
    Ok(folders)
}

/// 列出子目录中的所有普通文件，按路径排序
pub async fn list_article_files(folder: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| AppError::read_dir_failed(folder, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::read_dir_failed(folder, e))?
    {
        let path = entry.path();
        if fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// 扫描整个语料：语料目录 → 子目录 → 文章文件
pub async fn load_corpus(corpus_dir: &Path) -> AppResult<Vec<ArticleFolder>> {
    let mut folders = Vec::new();
    for path in list_article_folders(corpus_dir).await? {
        let files = list_article_files(&path).await?;
        tracing::info!(
            "正在加载: {} ({} 个文件)",
            path.file_name().unwrap_or_default().to_string_lossy(),
            files.len()
        );
        folders.push(ArticleFolder { path, files });
    }
    Ok(folders)
}
