use serde::{Deserialize, Serialize};

/// Subscription plan of the signed-in business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Standard,
    Pro,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Standard, Plan::Pro];

    /// Badge label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Free => "Trial Gratuito",
            Plan::Standard => "Plano Padrão",
            Plan::Pro => "Plano Pro",
        }
    }
}

/// The signed-in user, as persisted in the browser session entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub business_name: String,
    pub plan: Plan,
}

/// Authentication state of the app.
///
/// `Pending` covers the window between mount and the storage lookup /
/// provider round-trip resolving, so guards can show a spinner instead of
/// bouncing to the login screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStatus {
    #[default]
    Pending,
    Anonymous,
    Authenticated(AuthUser),
}

impl AuthStatus {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }
}

/// Registration form payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub business_name: String,
    pub plan: Plan,
}

impl RegisterForm {
    /// Field-level validation: all fields filled and passwords matching.
    /// Returns the first violation as a user-facing message (pt-BR).
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
            || self.business_name.trim().is_empty()
        {
            return Err("Por favor, preencha todos os campos.".into());
        }
        if self.password != self.confirm_password {
            return Err("As senhas não coincidem.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegisterForm {
        RegisterForm {
            name: "Demo".into(),
            email: "demo@email.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            business_name: "Demo Business".into(),
            plan: Plan::Free,
        }
    }

    #[test]
    fn validate_accepts_filled_form() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let mut form = filled_form();
        form.business_name = "  ".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn validate_rejects_password_mismatch() {
        let mut form = filled_form();
        form.confirm_password = "other".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "As senhas não coincidem.".to_string()
        );
    }
}
