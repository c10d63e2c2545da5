use aws_sdk_cloudwatchlogs::Credentials;
use aws_types::{region::Region, SdkConfig};

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the CloudWatch Logs API calls
pub fn logs_request(target: &str, body: &str) -> http::Request<aws_smithy_http::body::SdkBody> {
    http::Request::builder()
        .uri("https://logs.us-west-1.amazonaws.com/")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("Logs_20140328.{target}"))
        .body(aws_smithy_http::body::SdkBody::from(body.to_string()))
        .unwrap()
}

/// Successful JSON response with the given body
pub fn ok_response(body: &str) -> http::Response<aws_smithy_http::body::SdkBody> {
    http::Response::builder()
        .status(200)
        .body(aws_smithy_http::body::SdkBody::from(body.to_string()))
        .unwrap()
}

/// SNS notification event with one record per message body
pub fn sns_event(messages: &[&str]) -> aws_lambda_events::event::sns::SnsEvent {
    let records: Vec<serde_json::Value> = messages
        .iter()
        .map(|message| {
            serde_json::json!({
                "EventSource": "aws:sns",
                "EventVersion": "1.0",
                "EventSubscriptionArn": "arn:aws:sns:us-west-1:123456789012:events:c9135db0-26c4-47ec-8998-413945fb5a96",
                "Sns": {
                    "Type": "Notification",
                    "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                    "TopicArn": "arn:aws:sns:us-west-1:123456789012:events",
                    "Subject": null,
                    "Message": message,
                    "Timestamp": "2019-01-02T12:45:07.000Z",
                    "SignatureVersion": "1",
                    "Signature": "EXAMPLE",
                    "SigningCertUrl": "https://sns.us-west-1.amazonaws.com/SimpleNotificationService.pem",
                    "UnsubscribeUrl": "https://sns.us-west-1.amazonaws.com/?Action=Unsubscribe",
                    "MessageAttributes": {}
                }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}
