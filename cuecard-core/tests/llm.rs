use cuecard_core::{ChatLlm, CuecardError, LlmRequest, Message, NoopLlm, Role};

#[tokio::test]
async fn noop_llm_reports_provider_error() {
    let request = LlmRequest {
        model: "gpt-4o".to_string(),
        messages: vec![Message {
            role: Role::User,
            content: "hello".to_string(),
        }],
    };

    let err = NoopLlm.complete(request).await.unwrap_err();

    assert!(matches!(err, CuecardError::LlmProvider(_)));
    assert!(err.to_string().contains("gpt-4o"));
}

#[test]
fn errors_render_readable_messages() {
    let err = CuecardError::InvalidFixture {
        index: 3,
        reason: "observation 'read' does not answer action 'run'".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "fixture step 3 is inconsistent: observation 'read' does not answer action 'run'"
    );

    let err = CuecardError::AgentNotRegistered("GhostAgent".to_string());
    assert_eq!(err.to_string(), "agent 'GhostAgent' is not registered");
}
