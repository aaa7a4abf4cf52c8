// Experience tailoring: the upload endpoint, the orchestration pipeline and its prompt.
// All completion calls go through llm_client::Rewriter; no direct HTTP calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
