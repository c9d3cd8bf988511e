use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use sentiment_lambda::api::handler;
use sentiment_lambda::classifier::ComprehendClassifier;
use sentiment_lambda::core::config::AppConfig;
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sentiment_lambda::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once per container and shared by every invocation
    let classifier = ComprehendClassifier::from_config(&config).await;
    let classifier = &classifier;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(classifier, event).await
    }))
    .await
}
