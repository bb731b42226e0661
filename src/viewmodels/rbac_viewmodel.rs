// Panel RBAC: roles disponibles + asignación de rol a un usuario

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{AssignRoleRequest, RoleDefinition};
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::require;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignRoleForm {
    pub user_id: String,
    pub role: String,
}

impl AssignRoleForm {
    pub fn validate(&self) -> Result<AssignRoleRequest, ApiError> {
        const MSG: &str = "Debes indicar el usuario y el rol.";
        Ok(AssignRoleRequest {
            user_id: require(&self.user_id, MSG)?,
            role: require(&self.role, MSG)?,
        })
    }
}

#[derive(Clone)]
pub struct RbacViewModel {
    api_client: ApiClient,
    pub roles: Rc<RefCell<ListState<RoleDefinition>>>,
    pub form: Rc<RefCell<AssignRoleForm>>,
}

impl RbacViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            roles: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(AssignRoleForm::default())),
        }
    }

    pub async fn load(&self) {
        self.roles.borrow_mut().start_loading();
        let result = self.api_client.get_roles().await;
        self.roles.borrow_mut().apply_fetch(result);
    }

    pub async fn assign(&self) {
        let result = self.try_assign().await;
        let mut roles = self.roles.borrow_mut();
        match result {
            Ok(request) => {
                *self.form.borrow_mut() = AssignRoleForm::default();
                roles.succeed(format!("Rol {} asignado a {}.", request.role, request.user_id));
            }
            Err(e) => roles.fail(&e),
        }
    }

    async fn try_assign(&self) -> Result<AssignRoleRequest, ApiError> {
        let request = self.form.borrow().validate()?;
        self.api_client.assign_role(&request).await?;
        Ok(request)
    }
}

impl Default for RbacViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let form = AssignRoleForm {
            user_id: "42".into(),
            role: " ".into(),
        };
        assert!(form.validate().is_err());
        let form = AssignRoleForm { role: "admin".into(), ..form };
        assert_eq!(
            form.validate(),
            Ok(AssignRoleRequest { user_id: "42".into(), role: "admin".into() })
        );
    }
}
