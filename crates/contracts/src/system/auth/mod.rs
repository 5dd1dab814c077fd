use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

/// `POST /api/auth/local`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// `POST /api/auth/local/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `PUT /api/users/{id}` после регистрации
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// Ответ login/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Имя и фамилия, если заданы; иначе username или email
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            full
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }
}

const EMAIL_RULES: ValidationRules = ValidationRules::required("Email is required");
const PASSWORD_RULES: ValidationRules = ValidationRules::required("Password is required");
const FIRST_NAME_RULES: ValidationRules = ValidationRules::required("First name is required");
const LAST_NAME_RULES: ValidationRules = ValidationRules::required("Last name is required");

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", EMAIL_RULES.validate_string(&self.email));
        errors.check("password", PASSWORD_RULES.validate_string(&self.password));
        errors.into_result(LoginRequest {
            identifier: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Регистрация (username = email) и последующее обновление профиля
    pub fn validate(&self) -> Result<(RegisterRequest, ProfileUpdate), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("first_name", FIRST_NAME_RULES.validate_string(&self.first_name));
        errors.check("last_name", LAST_NAME_RULES.validate_string(&self.last_name));
        errors.check("email", EMAIL_RULES.validate_string(&self.email));
        errors.check("password", PASSWORD_RULES.validate_string(&self.password));

        let email = self.email.trim().to_string();
        errors.into_result((
            RegisterRequest {
                username: email.clone(),
                email,
                password: self.password.clone(),
            },
            ProfileUpdate {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_uses_email_as_identifier() {
        let form = LoginForm {
            email: " ana@example.com ".into(),
            password: "secret".into(),
        };
        let req = form.validate().unwrap();
        assert_eq!(req.identifier, "ana@example.com");
        assert!(LoginForm::default().validate().is_err());
    }

    #[test]
    fn test_register_uses_email_as_username() {
        let form = RegisterForm {
            first_name: "Ana".into(),
            last_name: "Pérez".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
        };
        let (register, profile) = form.validate().unwrap();
        assert_eq!(register.username, "ana@example.com");
        assert_eq!(register.email, "ana@example.com");
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            serde_json::json!({"firstName": "Ana", "lastName": "Pérez"})
        );
    }

    #[test]
    fn test_display_name() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id": 1, "username": "ana@example.com", "email": "ana@example.com", "firstName": "Ana", "lastName": null}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ana");

        let bare: UserInfo = serde_json::from_str(r#"{"id": 2, "email": "b@example.com"}"#).unwrap();
        assert_eq!(bare.display_name(), "b@example.com");
    }
}
