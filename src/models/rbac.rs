use serde::{Deserialize, Serialize};

/// Rol definido en el microservicio RBAC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl RoleDefinition {
    pub fn permissions_label(&self) -> String {
        self.permissions.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    pub user_id: String,
    pub role: String,
}
