//! Общие контракты ресурсов, которые показываются в списке с пагинацией
//! и редактируются в боковой панели.

use crate::shared::query::FilterField;
use crate::shared::validation::FieldErrors;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Идентичность записи: числовой `id` и стабильный `documentId`.
///
/// Изменение и удаление адресуются по `documentId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub id: i64,
    pub document_id: String,
}

impl EntityRef {
    pub fn new(id: i64, document_id: impl Into<String>) -> Self {
        Self {
            id,
            document_id: document_id.into(),
        }
    }

    /// Есть ли `documentId`, по которому можно адресовать запрос
    pub fn is_addressable(&self) -> bool {
        !self.document_id.trim().is_empty()
    }
}

/// Тексты уведомлений ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    /// Вопрос перед удалением, `{}` заменяется именем записи
    pub delete_confirm: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub save_failed: &'static str,
}

impl ResourceMessages {
    pub fn delete_prompt(&self, name: &str) -> String {
        self.delete_confirm.replacen("{}", name, 1)
    }
}

/// Строка списка ресурса
pub trait ResourceRow: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Имя коллекции в пути API: `/api/{COLLECTION}`
    const COLLECTION: &'static str;
    /// Связи, которые нужно подгрузить (`populate[i]`)
    const POPULATE: &'static [&'static str] = &[];
    /// Фильтруемые колонки
    const FILTERS: &'static [FilterField] = &[];
    const MESSAGES: ResourceMessages;

    fn entity_ref(&self) -> EntityRef;

    /// Имя записи для подтверждения удаления
    fn display_name(&self) -> String;

    fn delete_prompt(&self) -> String {
        Self::MESSAGES.delete_prompt(&self.display_name())
    }
}

/// Значения формы создания/редактирования
pub trait EditorForm: Clone + PartialEq + Default + Send + Sync + 'static {
    type Row: ResourceRow;
    /// Тело `data` запроса на сохранение
    type Payload: Serialize;

    /// Значения формы из выбранной строки
    fn from_row(row: &Self::Row) -> Self;

    /// Проверка формы; при успехе возвращает тело запроса
    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_substitutes_name() {
        let messages = ResourceMessages {
            delete_confirm: "Estás seguro de borrar la categoría \"{}\"?",
            deleted: "",
            delete_failed: "",
            created: "",
            updated: "",
            save_failed: "",
        };
        assert_eq!(
            messages.delete_prompt("Bebidas"),
            "Estás seguro de borrar la categoría \"Bebidas\"?"
        );
    }

    #[test]
    fn test_entity_ref_wire_names() {
        let r: EntityRef = serde_json::from_str(r#"{"id": 3, "documentId": "abc123"}"#).unwrap();
        assert_eq!(r, EntityRef::new(3, "abc123"));
    }
}
