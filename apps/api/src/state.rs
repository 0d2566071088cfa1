use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::engine::extractor::{KeywordSkillExtractor, LlmSkillExtractor, SkillExtractor};
use crate::engine::roadmap::{LlmRoadmapGenerator, RoadmapGenerator, TemplateRoadmapGenerator};
use crate::engine::scorer::{thread_rng_jitter, HeuristicPathScorer, LlmPathScorer, PathScorer};
use crate::llm_client::LlmClient;
use crate::ratelimit::RateLimiters;

/// Shared application state injected into all route handlers via Axum
/// extractors. The generator backends are chosen once here — handlers never
/// branch on mock vs live.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    pub extractor: Arc<dyn SkillExtractor>,
    pub scorer: Arc<dyn PathScorer>,
    pub roadmaps: Arc<dyn RoadmapGenerator>,
    pub limiters: Arc<RateLimiters>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let (extractor, scorer, roadmaps): (
            Arc<dyn SkillExtractor>,
            Arc<dyn PathScorer>,
            Arc<dyn RoadmapGenerator>,
        ) = if config.mock_mode() {
            info!("Mock mode: using deterministic generators (no OpenAI key)");
            (
                Arc::new(KeywordSkillExtractor),
                Arc::new(HeuristicPathScorer::new(thread_rng_jitter())),
                Arc::new(TemplateRoadmapGenerator),
            )
        } else {
            info!("Live mode: using LLM-backed generators (model: {})", crate::llm_client::MODEL);
            let llm = LlmClient::new(
                config
                    .openai_api_key
                    .clone()
                    .unwrap_or_default(),
            );
            (
                Arc::new(LlmSkillExtractor(llm.clone())),
                Arc::new(LlmPathScorer(llm.clone())),
                Arc::new(LlmRoadmapGenerator(llm)),
            )
        };

        AppState {
            db,
            config,
            extractor,
            scorer,
            roadmaps,
            limiters: Arc::new(RateLimiters::new()),
        }
    }
}
