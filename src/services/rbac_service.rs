// Microservicio RBAC (REST, URL base propia)

use crate::error::ApiError;
use crate::models::{AssignRoleRequest, RoleDefinition};
use crate::services::ApiClient;

impl ApiClient {
    pub async fn get_roles(&self) -> Result<Vec<RoleDefinition>, ApiError> {
        self.get_json(&self.rbac_url("/roles")).await
    }

    pub async fn assign_role(&self, request: &AssignRoleRequest) -> Result<(), ApiError> {
        log::info!("🔐 Asignando rol {} a {}", request.role, request.user_id);
        self.post_unit(&self.rbac_url("/assign-role"), request).await?;
        Ok(())
    }
}
