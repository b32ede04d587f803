use reqwest::Method;
use shared_types::{
    AppError, Identity, Officer, OfficerCreated, OfficerForm, OfficerList, Role,
    ValidateRequest,
};

use crate::client::PortalClient;
use crate::confirm::Confirmed;

pub const OFFICERS_PATH: &str = "/admin/officers";

/// Officer management for the signed-in company.
///
/// Company scope comes from the session cookie; the company id held here is
/// only used to fill in locally built records.
#[derive(Debug, Clone)]
pub struct OfficerDirectory {
    client: PortalClient,
    scope: Identity,
}

impl OfficerDirectory {
    pub fn new(client: PortalClient, scope: Identity) -> Self {
        Self { client, scope }
    }

    #[tracing::instrument(skip(self), fields(company_id = %self.scope.company_id))]
    pub async fn list(&self) -> Result<Vec<Officer>, AppError> {
        let list: OfficerList = self
            .client
            .execute_json(
                self.client.request(Method::GET, OFFICERS_PATH),
                "Failed to load officers",
            )
            .await?;
        tracing::debug!(count = list.items.len(), "Officers loaded");
        Ok(list.items)
    }

    /// Create an officer. Both fields are trimmed; a blank one fails
    /// validation and nothing is sent.
    #[tracing::instrument(skip(self, form), fields(company_id = %self.scope.company_id))]
    pub async fn create(&self, form: &OfficerForm) -> Result<Officer, AppError> {
        let request = form.to_request();
        request.validate_request()?;

        let created: OfficerCreated = self
            .client
            .execute_json(
                self.client
                    .request(Method::POST, OFFICERS_PATH)
                    .json(&request),
                "Failed to create officer",
            )
            .await?;
        if created.id.is_empty() {
            return Err(AppError::malformed_response());
        }
        tracing::info!(officer_id = %created.id, username = %request.username, "Officer created");
        Ok(Officer {
            id: created.id,
            username: request.username,
            role: Role::Officer,
            company_id: self.scope.company_id.clone(),
        })
    }

    /// Delete a confirmed officer. Any 2xx counts as success, whatever its
    /// body.
    #[tracing::instrument(skip(self, officer), fields(officer_id = %officer.key()))]
    pub async fn delete(&self, officer: Confirmed<Officer>) -> Result<(), AppError> {
        if officer.key().is_empty() {
            return Err(AppError::validation("Officer id is required", Default::default()));
        }
        let path = format!("{}/{}", OFFICERS_PATH, urlencoding::encode(officer.key()));
        self.client
            .execute(
                self.client.request(Method::DELETE, &path),
                "Failed to delete officer",
            )
            .await?;
        tracing::info!("Officer deleted");
        Ok(())
    }
}
