use super::*;
use futures::stream;
use futures::StreamExt;

struct EchoAdapter;

#[async_trait::async_trait]
impl ModelAdapter for EchoAdapter {
    type ProviderInput = String;
    type ProviderChunk = String;
    type ProviderOutput = String;

    fn name(&self) -> &str {
        "echo"
    }

    fn prepare_input(&self, input: ModelInput) -> crate::error::Result<Self::ProviderInput> {
        Ok(input.messages.into_iter().map(|m| m.content).collect::<Vec<_>>().join("\n"))
    }

    async fn execute_stream(
        &self,
        input: Self::ProviderInput,
    ) -> crate::error::Result<BoxStream<'static, Self::ProviderChunk>> {
        Ok(stream::iter(vec![input]).boxed())
    }

    async fn execute(&self, input: Self::ProviderInput) -> crate::error::Result<Self::ProviderOutput> {
        Ok(input)
    }

    fn map_chunk(&self, chunk: Self::ProviderChunk) -> Option<AdapterDelta> {
        if chunk.is_empty() {
            None
        } else {
            Some(AdapterDelta::Text { delta: chunk, metadata: None })
        }
    }
}

#[tokio::test]
async fn prepare_input_projects_messages_into_the_provider_shape() {
    let adapter = EchoAdapter;
    let input = ModelInput {
        messages: vec![InputMessage { role: Role::User, content: "hi".into() }],
        ..Default::default()
    };
    let prepared = adapter.prepare_input(input).unwrap();
    assert_eq!(prepared, "hi");
}

#[tokio::test]
async fn execute_stream_yields_mapped_deltas() {
    let adapter = EchoAdapter;
    let mut stream = adapter.execute_stream("hello".to_string()).await.unwrap();
    let chunk = stream.next().await.unwrap();
    match adapter.map_chunk(chunk) {
        Some(AdapterDelta::Text { delta, .. }) => assert_eq!(delta, "hello"),
        other => panic!("expected a text delta, got {other:?}"),
    }
}

#[test]
fn map_chunk_drops_empty_chunks() {
    let adapter = EchoAdapter;
    assert!(adapter.map_chunk(String::new()).is_none());
}

#[test]
fn default_engine_state_projections_are_identity() {
    let adapter = EchoAdapter;
    let input = ModelInput {
        messages: vec![InputMessage { role: Role::System, content: "ctx".into() }],
        ..Default::default()
    };
    let projected = adapter.from_engine_state(input.clone());
    assert_eq!(projected.messages, input.messages);

    let output = ModelOutput { text: Some("done".into()), metadata: Default::default() };
    let response = adapter.to_engine_state(output);
    assert_eq!(response.text, Some("done".into()));
}
