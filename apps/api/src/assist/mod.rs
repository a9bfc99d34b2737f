// Resume assistance: AI skill/project recommendations with a fixed
// fallback and a process-local cache. All LLM calls go through llm_client.

pub mod cache;
pub mod handlers;
pub mod prompts;
pub mod recommender;
