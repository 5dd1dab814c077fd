//! Планирование изменяющих запросов: создание, изменение, удаление.

use crate::shared::error::ApiError;
use crate::shared::resource::EntityRef;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Режим редактора выводится из наличия идентичности у исходной записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

impl EditorMode {
    pub fn from_seed(seed: Option<&EntityRef>) -> Self {
        match seed {
            Some(_) => EditorMode::Edit,
            None => EditorMode::Create,
        }
    }

    pub fn is_edit(self) -> bool {
        self == EditorMode::Edit
    }
}

/// Готовый к отправке запрос
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct DataEnvelope<'a, T: Serialize> {
    data: &'a T,
}

fn entity_path(collection: &str, entity: &EntityRef) -> Result<String, ApiError> {
    if !entity.is_addressable() {
        return Err(ApiError::MissingDocumentId {
            collection: collection.to_string(),
        });
    }
    Ok(format!("/api/{}/{}", collection, entity.document_id))
}

/// `PUT /api/{collection}/{documentId}` при наличии записи, иначе `POST /api/{collection}`.
/// Тело всегда `{ "data": payload }`. Запись без `documentId` даёт ошибку,
/// а не запрос на адрес коллекции.
pub fn save_request<T: Serialize>(
    collection: &str,
    seed: Option<&EntityRef>,
    payload: &T,
) -> Result<MutationRequest, ApiError> {
    let (method, path) = match seed {
        Some(entity) => (Method::Put, entity_path(collection, entity)?),
        None => (Method::Post, format!("/api/{}", collection)),
    };
    let body = serde_json::to_value(DataEnvelope { data: payload })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(MutationRequest {
        method,
        path,
        body: Some(body),
    })
}

/// `DELETE /api/{collection}/{documentId}`
pub fn delete_request(collection: &str, entity: &EntityRef) -> Result<MutationRequest, ApiError> {
    Ok(MutationRequest {
        method: Method::Delete,
        path: entity_path(collection, entity)?,
        body: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_edit_addresses_document_id() {
        let seed = EntityRef::new(7, "doc-7");
        let req = save_request("categories", Some(&seed), &Payload { name: "A".into() }).unwrap();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "/api/categories/doc-7");
        assert_eq!(req.body, Some(json!({"data": {"name": "A"}})));
    }

    #[test]
    fn test_create_has_no_address() {
        let req = save_request("categories", None, &Payload { name: "A".into() }).unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/api/categories");
    }

    #[test]
    fn test_delete_request() {
        let req = delete_request("products", &EntityRef::new(1, "abc123")).unwrap();
        assert_eq!(req.method.as_str(), "DELETE");
        assert_eq!(req.path, "/api/products/abc123");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_update_without_document_id_is_refused() {
        let seed = EntityRef::new(7, "");
        let err = save_request("products", Some(&seed), &Payload { name: "X".into() }).unwrap_err();
        assert_eq!(
            err,
            ApiError::MissingDocumentId {
                collection: "products".into()
            }
        );
    }

    #[test]
    fn test_delete_without_document_id_is_refused() {
        assert!(delete_request("products", &EntityRef::new(7, "  ")).is_err());
    }

    #[test]
    fn test_mode_from_seed() {
        assert_eq!(EditorMode::from_seed(None), EditorMode::Create);
        assert!(EditorMode::from_seed(Some(&EntityRef::new(1, "x"))).is_edit());
    }
}
