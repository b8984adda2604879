/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// Scribe 站点的 URL 前缀，用于定位目标标签页
    pub target_origin: String,
    /// 本地状态文件路径（标题缓存 / 检测语言缓存 / API Key）
    pub state_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 翻译接口配置 ---
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            target_origin: "https://scribehow.com".to_string(),
            state_file: "translator_state.toml".to_string(),
            verbose_logging: false,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            llm_temperature: 0.2,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            target_origin: std::env::var("SCRIBE_TARGET_ORIGIN").unwrap_or(default.target_origin),
            state_file: std::env::var("STATE_FILE").unwrap_or(default.state_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_temperature),
        }
    }
}
