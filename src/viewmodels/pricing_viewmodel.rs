// ============================================================================
// PRICING VIEWMODEL - Reglas de precios
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::pricing::NewPricingRule;
use crate::models::PricingRule;
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::{parse_number, require};

/// Formulario de alta (valores crudos de los inputs)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingForm {
    pub rule_name: String,
    pub base_price: String,
    pub multiplier: String,
}

impl PricingForm {
    pub fn validate(&self) -> Result<NewPricingRule, ApiError> {
        Ok(NewPricingRule {
            rule_name: require(&self.rule_name, "El nombre de la regla es obligatorio.")?,
            base_price: parse_number(&self.base_price, "El precio base debe ser un número.")?,
            multiplier: parse_number(&self.multiplier, "El multiplicador debe ser un número.")?,
        })
    }
}

#[derive(Clone)]
pub struct PricingViewModel {
    api_client: ApiClient,
    pub list: Rc<RefCell<ListState<PricingRule>>>,
    pub form: Rc<RefCell<PricingForm>>,
}

impl PricingViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            list: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(PricingForm::default())),
        }
    }

    pub async fn load(&self) {
        self.list.borrow_mut().start_loading();
        let result = self.api_client.get_pricing_rules().await;
        self.list.borrow_mut().apply_fetch(result);
    }

    /// Alta: valida, crea, limpia el formulario y recarga
    pub async fn create(&self) {
        let rule = match self.form.borrow().validate() {
            Ok(rule) => rule,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.create_pricing_rule(&rule).await {
            Ok(created) => {
                *self.form.borrow_mut() = PricingForm::default();
                self.list
                    .borrow_mut()
                    .succeed(format!("Regla \"{}\" creada.", created.rule_name));
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }
}

impl Default for PricingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, base: &str, mult: &str) -> PricingForm {
        PricingForm {
            rule_name: name.into(),
            base_price: base.into(),
            multiplier: mult.into(),
        }
    }

    #[test]
    fn rejects_empty_or_non_numeric_fields() {
        assert!(form("", "100", "1.2").validate().is_err());
        assert!(form("Alta", "cien", "1.2").validate().is_err());
        assert!(form("Alta", "100", "").validate().is_err());
        assert!(form("Alta", "NaN", "1").validate().is_err());
    }

    #[test]
    fn parses_numbers() {
        let rule = form(" Alta ", "100.5", "1.2").validate().unwrap();
        assert_eq!(rule.rule_name, "Alta");
        assert_eq!(rule.base_price, 100.5);
        assert_eq!(rule.multiplier, 1.2);
    }
}
