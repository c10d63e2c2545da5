use aws_lambda_events::event::sns::SnsEvent;
use aws_sdk_cloudwatchlogs::Client as CwClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sns_cloudwatch_forwarder::{handle_notification, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let forwarder_config = Config::from_env()?;

    // Get AWS Configuration
    let config = aws_config::load_from_env().await;
    let client = CwClient::new(&config);

    run(service_fn(|event: LambdaEvent<SnsEvent>| {
        handle_notification(&client, &forwarder_config, event)
    }))
    .await
}
