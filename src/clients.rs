use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::SdkConfig;
use aws_sdk_timestreamwrite::Client as TimestreamWriteClient;
use lambda_runtime::Error;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;

/// A type used to hold the AWS clients required to interact with AWS services
/// used by the lambda function.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub timestream: TimestreamWriteClient,
}

impl AwsClients {
    /// Builds the Timestream write client and enables endpoint discovery.
    ///
    /// Timestream only accepts writes on the cell endpoint returned by
    /// `DescribeEndpoints`; the reload task keeps that endpoint fresh for the
    /// lifetime of the container and must run on the Lambda runtime.
    pub async fn new(sdk_config: &SdkConfig, config: &Config) -> Result<Self, Error> {
        let conf = timestream_config(sdk_config, config);
        let (timestream, reload) = TimestreamWriteClient::from_conf(conf)
            .with_endpoint_discovery_enabled()
            .await?;
        tokio::spawn(reload.reload_task());
        debug!("timestream endpoint discovery enabled");

        Ok(AwsClients { timestream })
    }

    pub fn from_client(timestream: TimestreamWriteClient) -> Self {
        AwsClients { timestream }
    }
}

fn timestream_config(sdk_config: &SdkConfig, config: &Config) -> aws_sdk_timestreamwrite::Config {
    aws_sdk_timestreamwrite::config::Builder::from(sdk_config)
        .timeout_config(
            TimeoutConfig::builder()
                .read_timeout(Duration::from_secs(config.read_timeout_secs))
                .build(),
        )
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
        .build()
}
