//! 本地状态文件
//!
//! 与原扩展的 storage.local 对应：三个互相独立、整读整写的
//! 键（标题缓存、检测语言缓存、API Key），落在一个 TOML 文件
//! 里。缓存键只是提示，页面 DOM 才是事实来源。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{AppResult, StorageError};
use crate::services::language::UNKNOWN_LANGUAGE;

/// 持久化的全部状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredState {
    /// 最近一次看到的 Scribe 标题列表
    #[serde(rename = "scribeTitles")]
    pub scribe_titles: Vec<String>,
    /// 最近一次检测到的页面语言
    #[serde(rename = "detectedLanguage")]
    pub detected_language: String,
    /// 用户保存的 OpenAI API Key
    #[serde(rename = "openaiApiKey")]
    pub openai_api_key: String,
}

impl Default for StoredState {
    fn default() -> Self {
        Self {
            scribe_titles: Vec::new(),
            detected_language: UNKNOWN_LANGUAGE.to_string(),
            openai_api_key: String::new(),
        }
    }
}

/// 本地状态存取
#[derive(Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// 创建指向给定路径的状态存取器
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 读取完整状态；文件不存在时返回默认值
    pub async fn load(&self) -> AppResult<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::read_failed(self.path.display().to_string(), e))?;
        let state = toml::from_str(&content)
            .map_err(|e| StorageError::parse_failed(self.path.display().to_string(), e))?;
        Ok(state)
    }

    /// 整体写回状态
    pub async fn save(&self, state: &StoredState) -> AppResult<()> {
        let content = toml::to_string(state)
            .map_err(|e| StorageError::write_failed(self.path.display().to_string(), e))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::write_failed(self.path.display().to_string(), e))?;
        Ok(())
    }

    /// 读取标题缓存
    pub async fn scribe_titles(&self) -> AppResult<Vec<String>> {
        Ok(self.load().await?.scribe_titles)
    }

    /// 覆盖标题缓存
    pub async fn set_scribe_titles(&self, titles: &[String]) -> AppResult<()> {
        let mut state = self.load().await?;
        state.scribe_titles = titles.to_vec();
        self.save(&state).await
    }

    /// 读取语言缓存
    pub async fn detected_language(&self) -> AppResult<String> {
        Ok(self.load().await?.detected_language)
    }

    /// 覆盖语言缓存
    pub async fn set_detected_language(&self, language: &str) -> AppResult<()> {
        let mut state = self.load().await?;
        state.detected_language = language.to_string();
        self.save(&state).await
    }

    /// 读取保存的 API Key
    pub async fn api_key(&self) -> AppResult<String> {
        Ok(self.load().await?.openai_api_key)
    }

    /// 覆盖保存的 API Key
    pub async fn set_api_key(&self, api_key: &str) -> AppResult<()> {
        let mut state = self.load().await?;
        state.openai_api_key = api_key.trim().to_string();
        self.save(&state).await
    }
}
