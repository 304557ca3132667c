use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};
use tracing::level_filters::{LevelFilter, ParseLevelFilterError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

use crate::config::GlobalConfig;

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// This function should be implemented to return any state that we want to persist between lambda executions.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// This function should be implemented with the actual business logic of the lambda.
    async fn run(
        payload: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// A pre-configured main function that will bootstrap an instance of this lambda and start execution. Call this from the top-level main function for a given lambda.
    async fn main() -> Result<(), Error> {
        LogTracer::init()?;
        let config = ConfigLoader::load_default::<GlobalConfig>()?;
        let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());

        let level = config.level_filter();
        lambda_subscriber(level.as_ref().map_or(LevelFilter::INFO, |l| *l), non_blocking_writer)
            .init();
        if let Err(e) = level {
            report_invalid_log_level(&config, &e);
        }

        // Get a reference to avoid moving the persisted state into the below closure.
        let persisted = &Self::bootstrap().await?;

        let service =
            move |event: LambdaEvent<Self::InputBody>| async move { Self::service(event, persisted).await };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Service function that is called everytime the lambda executes. The payload is handed to
    /// `run` untouched; the invocation context only goes to the debug log.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::debug!(request_id = %context.request_id, "Execution started");

        Self::run(payload, state).await
    }
}

/// Subscriber writing Bunyan JSON records to `make_writer`, filtered at `level`.
pub fn lambda_subscriber<W>(level: LevelFilter, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    tracing_subscriber::registry()
        .with(level)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(app_name, make_writer))
}

// Must run after the subscriber is installed, otherwise the record is lost.
fn report_invalid_log_level(config: &GlobalConfig, error: &ParseLevelFilterError) {
    tracing::warn!(error = ?error, log_level = %config.log_level, "Invalid log level, using info");
}

#[macro_export]
macro_rules! lambda_main {
    ($lambda: ty) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use $crate::lambda_structure::lambda_trait::Lambda;
            <$lambda>::main().await
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lambda_structure::captured_logs::CapturedLogs;

    #[test]
    fn invalid_log_level_is_reported_through_installed_subscriber() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let config = GlobalConfig {
            log_level: "loud".to_owned(),
        };

        let level = config.level_filter();
        let subscriber = lambda_subscriber(
            level.as_ref().map_or(LevelFilter::INFO, |l| *l),
            move || writer.clone(),
        );
        tracing::subscriber::with_default(subscriber, || {
            if let Err(e) = level {
                report_invalid_log_level(&config, &e);
            }
        });

        let contents = logs.contents();
        assert!(
            contents.contains("Invalid log level, using info"),
            "Actual logs were: {contents}"
        );
        assert!(contents.contains("loud"));
    }

    #[test]
    fn records_below_level_are_filtered() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();

        tracing::subscriber::with_default(
            lambda_subscriber(LevelFilter::WARN, move || writer.clone()),
            || {
                tracing::info!("hidden record");
                tracing::warn!("visible record");
            },
        );

        let contents = logs.contents();
        assert!(!contents.contains("hidden record"));
        assert!(contents.contains("visible record"));
    }
}
