use crate::core::client::{ApiResponse, ClientConfiguration, SbiClient};
use crate::models::broadcast::{CipherRequestData, CipherResponseData};
use crate::models::location::{CancelLocData, InputData, LocContextData, LocationData};
use crate::services::nlmf::{broadcast, location};
use crate::utils::error::Result;

/// Client of the Nlmf_Broadcast service.
#[derive(Debug, Clone)]
pub struct BroadcastClient {
    client: SbiClient,
}

impl BroadcastClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            client: SbiClient::new(broadcast::SERVICE_NAME, config)?,
        })
    }

    pub async fn ciphering_key_data(
        &self,
        request: &CipherRequestData,
    ) -> Result<ApiResponse<CipherResponseData>> {
        self.client
            .call(&broadcast::CIPHERING_KEY_DATA, &[], request)
            .await
    }
}

/// Client of the Nlmf_Location service.
#[derive(Debug, Clone)]
pub struct LocationClient {
    client: SbiClient,
}

impl LocationClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            client: SbiClient::new(location::SERVICE_NAME, config)?,
        })
    }

    pub async fn cancel_location(&self, request: &CancelLocData) -> Result<ApiResponse<()>> {
        self.client
            .call(&location::CANCEL_LOCATION, &[], request)
            .await
    }

    pub async fn determine_location(
        &self,
        request: &InputData,
    ) -> Result<ApiResponse<LocationData>> {
        self.client
            .call(&location::DETERMINE_LOCATION, &[], request)
            .await
    }

    pub async fn location_context_transfer(
        &self,
        request: &LocContextData,
    ) -> Result<ApiResponse<()>> {
        self.client
            .call(&location::LOCATION_CONTEXT_TRANSFER, &[], request)
            .await
    }
}

/// Clients of every NLMF service sharing one configuration.
#[derive(Debug, Clone)]
pub struct NlmfClient {
    pub broadcast: BroadcastClient,
    pub location: LocationClient,
}

impl NlmfClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            broadcast: BroadcastClient::new(config.clone())?,
            location: LocationClient::new(config)?,
        })
    }
}
