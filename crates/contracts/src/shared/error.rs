use thiserror::Error;

/// Сообщение, которое показывается, если сервер не прислал своего
pub const DEFAULT_ERROR_MESSAGE: &str = "Ha ocurrido un error!";

/// Ошибка обращения к REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("browser API error: {0}")]
    Browser(String),

    /// Запись без `documentId`: адресовать изменение или удаление нечем
    #[error("record in /api/{collection} has no documentId")]
    MissingDocumentId { collection: String },
}

impl ApiError {
    /// Построить ошибку по неуспешному HTTP-ответу
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// Сообщение сервера, если оно есть; иначе `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if message != DEFAULT_ERROR_MESSAGE => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Текст для уведомления пользователю
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Сообщение об ошибке из тела ответа Strapi.
///
/// Порядок поиска: `error.message`, затем `message` верхнего уровня.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["/error/message", "/message"]
        .iter()
        .filter_map(|ptr| value.pointer(ptr))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_strapi_error_message() {
        let body = r#"{"data":null,"error":{"status":400,"name":"ValidationError","message":"name must be unique"}}"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "name must be unique".to_string()
            }
        );
        assert_eq!(err.user_message(), "name must be unique");
    }

    #[test]
    fn test_top_level_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Forbidden"}"#),
            Some("Forbidden".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_default_message() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(err.user_message(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(ApiError::Decode("x".into()).user_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_message_or_prefers_server_text() {
        let err = ApiError::from_response(400, r#"{"error":{"message":"barcode must be unique"}}"#);
        assert_eq!(err.message_or("Error al guardar"), "barcode must be unique");
        let err = ApiError::from_response(500, "");
        assert_eq!(err.message_or("Error al guardar"), "Error al guardar");
        assert_eq!(
            ApiError::Network("offline".into()).message_or("Error al guardar"),
            "Error al guardar"
        );
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
