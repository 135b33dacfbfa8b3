//! Generation pipeline: validate inputs, build the prompt, call the model,
//! detect provider-side failures, and parse the reply.
//!
//! The model call is the only blocking step, so [`spawn_generation`] runs
//! the whole pipeline on a worker task and hands the immutable outcome back
//! through a one-shot channel. Exactly one request is in flight per
//! trigger; there is no cancellation and no pipeline-level retry. A failed
//! attempt is terminal and the caller may trigger a fresh one.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::parser::parse_response;
use crate::generation::prompt::build_prompt;
use crate::llm_client::ChatCompleter;
use crate::models::GeneratedContent;
use crate::sections::SectionRegistry;

/// Prefix marking a provider-side failure embedded in an otherwise
/// successful reply body. Surfaced verbatim, never parsed as content.
const ERROR_SENTINEL: &str = "Error";

/// Everything one generation attempt needs, captured by value so the
/// worker task owns its inputs.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub job_description: String,
    pub excluded_terms: Vec<String>,
    pub sections: SectionRegistry,
}

/// Checks the fields that must be present before any network call is made.
/// Reported immediately; no attempt is started when any is missing.
pub fn validate_request(
    user_name: &str,
    job_description: &str,
    api_key: &str,
    model: &str,
) -> Result<(), AppError> {
    let mut missing: Vec<&str> = Vec::new();
    if user_name.trim().is_empty() {
        missing.push("name");
    }
    if job_description.trim().is_empty() {
        missing.push("job description");
    }
    if api_key.trim().is_empty() {
        missing.push("API key");
    }
    if model.trim().is_empty() {
        missing.push("model");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Required fields missing: {}",
            missing.join(", ")
        )))
    }
}

/// Runs one generation attempt: prompt, model call, sentinel check, parse.
///
/// Malformed model output never fails here; it degrades to empty sections.
/// Transport, API, and provider-sentinel failures surface as
/// [`AppError::Llm`].
pub async fn generate_content(
    llm: &dyn ChatCompleter,
    request: &GenerationRequest,
) -> Result<GeneratedContent, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description must not be empty".to_string(),
        ));
    }

    let prompt = build_prompt(
        &request.job_description,
        &request.excluded_terms,
        &request.sections,
    );
    info!(
        "Requesting CV content for {} configured sections",
        request.sections.len()
    );

    let reply = llm.complete(&prompt).await?;

    if reply.trim_start().starts_with(ERROR_SENTINEL) {
        return Err(AppError::Llm(reply));
    }

    let content = parse_response(&reply, &request.sections);
    if content.is_empty() {
        warn!("Model reply contained no recognizable sections; all slots empty");
    }
    Ok(content)
}

/// Runs the pipeline on a worker task and returns the receiving half of a
/// one-shot handoff. The caller polls or awaits the receiver from its own
/// (typically interactive) thread; the worker owns its inputs and produces
/// exactly one immutable result.
pub fn spawn_generation(
    llm: Arc<dyn ChatCompleter>,
    request: GenerationRequest,
) -> oneshot::Receiver<Result<GeneratedContent, AppError>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = generate_content(llm.as_ref(), &request).await;
        // A dropped receiver means the caller went away; nothing to do.
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::llm_client::LlmError;
    use crate::sections::SectionRegistry;

    /// Canned-reply stand-in for the chat client.
    struct FixedReply(String);

    #[async_trait]
    impl ChatCompleter for FixedReply {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl ChatCompleter for FailingClient {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::RateLimited { retries: 3 })
        }
    }

    fn request() -> GenerationRequest {
        let mut sections = SectionRegistry::with_profile_name("Profile Summary");
        sections.insert("Key Skills").unwrap();
        GenerationRequest {
            job_description: "Rust engineer wanted.".to_string(),
            excluded_terms: vec![],
            sections,
        }
    }

    #[test]
    fn test_validate_request_accepts_complete_input() {
        assert!(validate_request("Dana", "JD text", "sk-123", "gpt-4o").is_ok());
    }

    #[test]
    fn test_validate_request_names_every_missing_field() {
        let err = validate_request("", "jd", "", "gpt-4o").unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("API key"));
                assert!(!msg.contains("model"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_content_round_trips_well_formed_reply() {
        let reply = "### Profile Summary\nBuilds reliable systems.\n\n### Key Skills\n- Rust\n- Tokio\n";
        let client = FixedReply(reply.to_string());
        let content = generate_content(&client, &request()).await.unwrap();
        assert_eq!(content.profile, "Builds reliable systems.");
        assert_eq!(content.items("key_skills"), ["Rust", "Tokio"]);
    }

    #[tokio::test]
    async fn test_generate_content_surfaces_sentinel_reply_verbatim() {
        let client = FixedReply("Error: model overloaded, try again later".to_string());
        let err = generate_content(&client, &request()).await.unwrap_err();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("model overloaded")),
            other => panic!("expected LLM error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_content_maps_transport_failure() {
        let err = generate_content(&FailingClient, &request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_generate_content_rejects_empty_job_description() {
        let mut req = request();
        req.job_description = "  ".to_string();
        let err = generate_content(&FixedReply(String::new()), &req)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_generate_content_absorbs_malformed_reply() {
        let client = FixedReply("no headings here at all".to_string());
        let content = generate_content(&client, &request()).await.unwrap();
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_generation_hands_result_through_oneshot() {
        let reply = "### Profile Summary\nDelivered through the channel.\n";
        let client: Arc<dyn ChatCompleter> = Arc::new(FixedReply(reply.to_string()));
        let rx = spawn_generation(client, request());
        let content = rx.await.expect("worker dropped without sending").unwrap();
        assert_eq!(content.profile, "Delivered through the channel.");
    }
}
