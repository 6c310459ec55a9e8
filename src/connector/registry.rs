//! Static connector registry — provider name → constructor.

use crate::client::StratusClient;
use crate::connector::sim::SimConnector;
use crate::connector::Connector;
use crate::error::SdkError;

/// Construct the connector registered under `name`.
pub fn connector(name: &str, client: StratusClient) -> Result<Box<dyn Connector>, SdkError> {
    match name {
        SimConnector::NAME => Ok(Box::new(SimConnector::new(client))),
        _ => Err(SdkError::UnknownConnector(name.to_string())),
    }
}
