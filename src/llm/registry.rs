//! Registry of configured LLM models

use super::{AnthropicService, LlmError, LlmService, LoggingService, OpenAIService};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Configuration for LLM providers
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    /// Base URL for an `OpenAI`-compatible gateway or local server
    pub gateway: Option<String>,
    /// Default model ID
    pub default_model: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            openai_api_key: var("OPENAI_API_KEY"),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            gateway: var("LLM_GATEWAY"),
            default_model: var("DEFAULT_MODEL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Anthropic,
}

/// Model definition
#[derive(Debug, Clone, Copy)]
pub struct ModelDef {
    /// User-facing model ID
    pub id: &'static str,
    pub provider: Provider,
    /// Name sent to the provider
    pub api_name: &'static str,
}

/// Known models, in order of preference for the default
pub const MODELS: &[ModelDef] = &[
    ModelDef {
        id: "gpt-4o-mini",
        provider: Provider::OpenAI,
        api_name: "gpt-4o-mini",
    },
    ModelDef {
        id: "gpt-4o",
        provider: Provider::OpenAI,
        api_name: "gpt-4o",
    },
    ModelDef {
        id: "gpt-4",
        provider: Provider::OpenAI,
        api_name: "gpt-4",
    },
    ModelDef {
        id: "claude-3.5-haiku",
        provider: Provider::Anthropic,
        api_name: "claude-3-5-haiku-latest",
    },
    ModelDef {
        id: "claude-4-sonnet",
        provider: Provider::Anthropic,
        api_name: "claude-sonnet-4-20250514",
    },
];

/// Registry of available LLM models
pub struct ModelRegistry {
    services: BTreeMap<String, Arc<dyn LlmService>>,
    default_model: Option<String>,
}

impl ModelRegistry {
    /// Registry with no models; insight generation falls back to advice
    pub fn empty() -> Self {
        Self {
            services: BTreeMap::new(),
            default_model: None,
        }
    }

    pub fn new(config: &LlmConfig) -> Self {
        let mut services: BTreeMap<String, Arc<dyn LlmService>> = BTreeMap::new();

        for def in MODELS {
            match Self::try_create_model(def, config) {
                Some(Ok(service)) => {
                    services.insert(def.id.to_string(), Arc::new(LoggingService::new(service)));
                }
                Some(Err(e)) => {
                    tracing::warn!(model = def.id, error = %e, "Failed to create LLM service");
                }
                None => {}
            }
        }

        let default_model = config
            .default_model
            .clone()
            .filter(|id| services.contains_key(id))
            .or_else(|| {
                MODELS
                    .iter()
                    .find(|def| services.contains_key(def.id))
                    .map(|def| def.id.to_string())
            });

        if let (Some(requested), None) = (&config.default_model, &default_model) {
            tracing::warn!(model = %requested, "Requested default model is not available");
        }

        Self {
            services,
            default_model,
        }
    }

    /// Build a registry around a single service (tests and embedding)
    pub fn with_service(service: Arc<dyn LlmService>) -> Self {
        let id = service.model_id().to_string();
        let mut services = BTreeMap::new();
        services.insert(id.clone(), service);
        Self {
            services,
            default_model: Some(id),
        }
    }

    /// `None` when the provider has no credentials configured
    fn try_create_model(
        def: &ModelDef,
        config: &LlmConfig,
    ) -> Option<Result<Arc<dyn LlmService>, LlmError>> {
        match def.provider {
            Provider::OpenAI => {
                // A gateway handles authentication itself
                let api_key = match (&config.openai_api_key, &config.gateway) {
                    (Some(key), _) => key.clone(),
                    (None, Some(_)) => "implicit".to_string(),
                    (None, None) => return None,
                };
                Some(
                    OpenAIService::new(api_key, def.api_name, config.gateway.as_deref())
                        .map(|s| Arc::new(s) as Arc<dyn LlmService>),
                )
            }
            Provider::Anthropic => {
                let api_key = config.anthropic_api_key.clone()?;
                Some(
                    AnthropicService::new(api_key, def.api_name, None)
                        .map(|s| Arc::new(s) as Arc<dyn LlmService>),
                )
            }
        }
    }

    pub fn get(&self, model_id: &str) -> Option<Arc<dyn LlmService>> {
        self.services.get(model_id).cloned()
    }

    pub fn default_service(&self) -> Option<Arc<dyn LlmService>> {
        self.default_model.as_deref().and_then(|id| self.get(id))
    }

    pub fn default_model_id(&self) -> Option<&str> {
        self.default_model.as_deref()
    }

    pub fn has_models(&self) -> bool {
        !self.services.is_empty()
    }

    /// All available model IDs, sorted
    pub fn available_models(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }
}
