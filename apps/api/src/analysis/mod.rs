// CV-matching analysis: prompt construction, the model call, and the
// /Analyse handler. All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
