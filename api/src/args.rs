use clap::{Parser, ValueEnum};
use recipe_master_core::{
    domain::common::{ImageSearchConfig, LLMConfig, LLMProviderKind, RecipeMasterConfig},
    infrastructure::image_search::pexels_client::PEXELS_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-master-api", version, about = "Recipe Master API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub image_search: ImageSearchArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Seed for image picks; random when unset
    #[arg(long, env = "RANDOM_SEED")]
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long,
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProvider {
    Openai,
    Gemini,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "LLM_PROVIDER", value_enum, default_value_t = LlmProvider::Openai)]
    pub llm_provider: LlmProvider,

    /// Defaults to gpt-3.5-turbo for OpenAI and gemini-1.5-flash for Gemini
    #[arg(long, env = "LLM_MODEL")]
    pub llm_model: Option<String>,

    #[arg(long, env = "LLM_BASE_URL")]
    pub llm_base_url: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "LLM_MAX_TOKENS", default_value_t = 1500)]
    pub llm_max_tokens: u32,

    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub llm_temperature: f32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ImageSearchArgs {
    /// Leave unset to always use the built-in stock photos
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub pexels_api_key: Option<String>,

    #[arg(long, env = "PEXELS_BASE_URL", default_value = PEXELS_BASE_URL)]
    pub pexels_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,
}

impl From<Args> for RecipeMasterConfig {
    fn from(args: Args) -> Self {
        let (provider, api_key, default_model) = match args.llm.llm_provider {
            LlmProvider::Openai => (
                LLMProviderKind::OpenAI,
                args.llm.openai_api_key,
                "gpt-3.5-turbo",
            ),
            LlmProvider::Gemini => (
                LLMProviderKind::Gemini,
                args.llm.gemini_api_key,
                "gemini-1.5-flash",
            ),
        };

        RecipeMasterConfig {
            llm: LLMConfig {
                provider,
                api_key,
                model: args
                    .llm
                    .llm_model
                    .unwrap_or_else(|| default_model.to_string()),
                base_url: args.llm.llm_base_url,
                max_tokens: args.llm.llm_max_tokens,
                temperature: args.llm.llm_temperature,
            },
            image_search: ImageSearchConfig {
                pexels_api_key: args.image_search.pexels_api_key,
                base_url: args.image_search.pexels_base_url,
            },
            random_seed: args.random_seed,
        }
    }
}
