//! 应用程序错误类型
//!
//! 所有工作流错误在编排层被捕获并转换为结构化结果，
//! 不允许任何错误以未处理的形式逃逸。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 页面文档错误
    #[error("页面错误: {0}")]
    Page(#[from] PageError),
    /// 翻译接口错误
    #[error("翻译接口错误: {0}")]
    Api(#[from] ApiError),
    /// 本地状态文件错误
    #[error("本地状态错误: {0}")]
    Storage(#[from] StorageError),
    /// 未提供 API Key
    #[error("未提供 OpenAI API Key，请先执行 set-key 保存")]
    MissingCredential,
    /// 跨上下文通知投递失败（仅内部使用，对外吞掉）
    #[error("通知投递失败: {reason}")]
    Delivery { reason: String },
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 没有找到打开的 Scribe 标签页
    #[error("没有找到已打开的 Scribe 标签页 (前缀: {origin})")]
    NoActiveTarget { origin: String },
    /// 页面脚本执行失败
    #[error("页面脚本执行失败: {source}")]
    ScriptFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面脚本返回值解析失败
    #[error("页面脚本返回值解析失败: {source}")]
    ResultParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 页面文档错误
#[derive(Debug, Error)]
pub enum PageError {
    /// 标题未匹配到任何 Scribe，或其容器节点无法定位
    #[error("页面上没有找到 Scribe: {title}")]
    NotFound { title: String },
    /// 原始节点没有可供插入副本的父节点
    #[error("无法在 Scribe 旁插入副本 (缺少插入点): {title}")]
    InsertionFailed { title: String },
}

/// 翻译接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("请求翻译接口失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 接口返回非 2xx 状态码，或响应体无法解析
    #[error("翻译接口返回错误 (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },
    /// 调用成功但没有可用的补全内容
    #[error("翻译接口返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },
}

/// 本地状态文件错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取状态文件失败
    #[error("读取状态文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入状态文件失败
    #[error("写入状态文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 状态文件解析失败
    #[error("状态文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建浏览器连接错误
    pub fn connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// 创建"没有找到目标标签页"错误
    pub fn no_active_target(origin: impl Into<String>) -> Self {
        AppError::Browser(BrowserError::NoActiveTarget {
            origin: origin.into(),
        })
    }

    /// 创建脚本返回值解析错误
    pub fn result_parse_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Browser(BrowserError::ResultParseFailed {
            source: Box::new(source),
        })
    }

    /// 创建"Scribe 未找到"错误
    pub fn not_found(title: impl Into<String>) -> Self {
        AppError::Page(PageError::NotFound {
            title: title.into(),
        })
    }

    /// 创建"副本插入失败"错误
    pub fn insertion_failed(title: impl Into<String>) -> Self {
        AppError::Page(PageError::InsertionFailed {
            title: title.into(),
        })
    }

    /// 创建接口请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建上游接口错误
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        AppError::Api(ApiError::Upstream {
            status,
            body: body.into(),
        })
    }

    /// 创建空响应错误
    pub fn empty_response(model: impl Into<String>) -> Self {
        AppError::Api(ApiError::EmptyResponse {
            model: model.into(),
        })
    }

    /// 创建投递失败错误
    pub fn delivery(reason: impl Into<String>) -> Self {
        AppError::Delivery {
            reason: reason.into(),
        }
    }
}

impl StorageError {
    /// 创建读取失败错误
    pub fn read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建写入失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建解析失败错误
    pub fn parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::ParseFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
