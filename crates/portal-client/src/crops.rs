use reqwest::Method;
use shared_types::{AppError, Crop, CropForm, CropList, CropMutation, Identity, ValidateRequest};

use crate::client::PortalClient;
use crate::confirm::Confirmed;

pub const CROPS_PATH: &str = "/admin/crops";

/// Crop price list for the signed-in company.
///
/// Crops are addressed by name. Update and delete use the name the crop had
/// when the list was loaded; a rename is a single `PUT` to that old name
/// with the new name in the body.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    client: PortalClient,
    scope: Identity,
}

fn crop_path(name: &str) -> String {
    format!("{}/{}", CROPS_PATH, urlencoding::encode(name))
}

impl CropCatalog {
    pub fn new(client: PortalClient, scope: Identity) -> Self {
        Self { client, scope }
    }

    #[tracing::instrument(skip(self), fields(company_id = %self.scope.company_id))]
    pub async fn list(&self) -> Result<Vec<Crop>, AppError> {
        let list: CropList = self
            .client
            .execute_json(
                self.client.request(Method::GET, CROPS_PATH),
                "Failed to load crops",
            )
            .await?;
        tracing::debug!(count = list.crop_details.len(), "Crops loaded");
        Ok(list.crop_details)
    }

    #[tracing::instrument(skip(self, form), fields(company_id = %self.scope.company_id))]
    pub async fn create(&self, form: &CropForm) -> Result<Crop, AppError> {
        let request = form.to_request()?;
        request.validate_request()?;

        let created: CropMutation = self
            .client
            .execute_json(
                self.client.request(Method::POST, CROPS_PATH).json(&request),
                "Failed to add crop",
            )
            .await?;
        tracing::info!(crop = %created.crop.crop_name, "Crop added");
        Ok(created.crop)
    }

    /// Update the crop currently named `original_name`, possibly renaming it.
    #[tracing::instrument(skip(self, form), fields(company_id = %self.scope.company_id))]
    pub async fn update(&self, original_name: &str, form: &CropForm) -> Result<Crop, AppError> {
        let request = form.to_request()?;
        request.validate_request()?;

        let updated: CropMutation = self
            .client
            .execute_json(
                self.client
                    .request(Method::PUT, &crop_path(original_name))
                    .json(&request),
                "Failed to update crop",
            )
            .await?;
        tracing::info!(crop = %updated.crop.crop_name, "Crop updated");
        Ok(updated.crop)
    }

    /// Delete a confirmed crop. Any 2xx counts as success, whatever its body.
    #[tracing::instrument(skip(self, crop), fields(crop = %crop.key()))]
    pub async fn delete(&self, crop: Confirmed<Crop>) -> Result<(), AppError> {
        self.client
            .execute(
                self.client.request(Method::DELETE, &crop_path(crop.key())),
                "Failed to delete crop",
            )
            .await?;
        tracing::info!("Crop deleted");
        Ok(())
    }
}
