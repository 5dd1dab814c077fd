use crate::shared::pagination::null_as_default;
use crate::shared::query::{FilterField, FilterKind};
use crate::shared::resource::{EditorForm, EntityRef, ResourceMessages, ResourceRow};
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// Row
// ============================================================================

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResourceRow for Category {
    const COLLECTION: &'static str = "categories";
    const FILTERS: &'static [FilterField] =
        &[FilterField::new("name", "Nombre", FilterKind::Contains)];
    const MESSAGES: ResourceMessages = ResourceMessages {
        delete_confirm: "Estás seguro de borrar la categoría \"{}\"?",
        deleted: "Categoría borrada correctamente",
        delete_failed: "Error al borrar la categoría",
        created: "Categoría creada con éxito",
        updated: "Categoría editada con éxito",
        save_failed: "Error al guardar la categoría",
    };

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.id, self.document_id.clone())
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Form
// ============================================================================

const NAME_RULES: ValidationRules = ValidationRules::required("Name is required");

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

impl EditorForm for CategoryForm {
    type Row = Category;
    type Payload = CategoryPayload;

    fn from_row(row: &Category) -> Self {
        Self {
            name: row.name.clone(),
            description: row.description.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<CategoryPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name));

        let description = self.description.trim();
        errors.into_result(CategoryPayload {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_row_with_missing_fields() {
        let row: Category =
            serde_json::from_str(r#"{"id": 4, "documentId": "c4", "name": null}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.description, None);
        assert_eq!(row.entity_ref(), EntityRef::new(4, "c4"));
    }

    #[test]
    fn test_name_is_required() {
        let form = CategoryForm {
            name: "  ".into(),
            description: "x".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_blank_description_is_omitted() {
        let form = CategoryForm {
            name: "Bebidas".into(),
            description: "   ".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.description, None);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "Bebidas", "description": null})
        );
    }

    #[test]
    fn test_form_from_row() {
        let row = Category {
            id: 1,
            document_id: "d1".into(),
            name: "Snacks".into(),
            description: Some("Salados".into()),
        };
        let form = CategoryForm::from_row(&row);
        assert_eq!(form.name, "Snacks");
        assert_eq!(form.description, "Salados");
        assert_eq!(
            row.delete_prompt(),
            "Estás seguro de borrar la categoría \"Snacks\"?"
        );
    }
}
