//! 外部接口客户端

pub mod llm_client;
pub mod prompts;

pub use llm_client::{OpenAiTranslator, TranslationJob, TranslationProvider};
