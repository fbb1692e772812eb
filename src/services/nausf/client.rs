use crate::core::client::{ApiResponse, ClientConfiguration, SbiClient};
use crate::models::auth::{
    AuthenticationInfo, ConfirmationData, ConfirmationDataResponse, EapSession, SorInfo,
    SorSecurityInfo, UeAuthenticationCtx, UpuInfo, UpuSecurityInfo,
};
use crate::services::nausf::{auth, sor, upu};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct UeAuthenticationClient {
    client: SbiClient,
}

impl UeAuthenticationClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            client: SbiClient::new(auth::SERVICE_NAME, config)?,
        })
    }

    pub async fn authenticate(
        &self,
        request: &AuthenticationInfo,
    ) -> Result<ApiResponse<UeAuthenticationCtx>> {
        self.client.call(&auth::AUTHENTICATE, &[], request).await
    }

    pub async fn confirm_5g_aka(
        &self,
        auth_ctx_id: &str,
        request: &ConfirmationData,
    ) -> Result<ApiResponse<ConfirmationDataResponse>> {
        self.client
            .call(&auth::CONFIRM_5G_AKA, &[("authCtxId", auth_ctx_id)], request)
            .await
    }

    pub async fn eap_session(
        &self,
        auth_ctx_id: &str,
        request: &EapSession,
    ) -> Result<ApiResponse<EapSession>> {
        self.client
            .call(&auth::EAP_SESSION, &[("authCtxId", auth_ctx_id)], request)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct SorProtectionClient {
    client: SbiClient,
}

impl SorProtectionClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            client: SbiClient::new(sor::SERVICE_NAME, config)?,
        })
    }

    pub async fn ue_sor(
        &self,
        supi_or_suci: &str,
        request: &SorInfo,
    ) -> Result<ApiResponse<SorSecurityInfo>> {
        self.client
            .call(&sor::UE_SOR, &[("supiOrSuci", supi_or_suci)], request)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct UpuProtectionClient {
    client: SbiClient,
}

impl UpuProtectionClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            client: SbiClient::new(upu::SERVICE_NAME, config)?,
        })
    }

    pub async fn ue_upu(
        &self,
        supi_or_suci: &str,
        request: &UpuInfo,
    ) -> Result<ApiResponse<UpuSecurityInfo>> {
        self.client
            .call(&upu::UE_UPU, &[("supiOrSuci", supi_or_suci)], request)
            .await
    }
}

/// Clients of every NAUSF service sharing one configuration.
#[derive(Debug, Clone)]
pub struct NausfClient {
    pub ue_authentication: UeAuthenticationClient,
    pub sor_protection: SorProtectionClient,
    pub upu_protection: UpuProtectionClient,
}

impl NausfClient {
    pub fn new(config: ClientConfiguration) -> Result<Self> {
        Ok(Self {
            ue_authentication: UeAuthenticationClient::new(config.clone())?,
            sor_protection: SorProtectionClient::new(config.clone())?,
            upu_protection: UpuProtectionClient::new(config)?,
        })
    }
}
