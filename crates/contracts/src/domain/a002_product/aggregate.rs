use crate::shared::media::MediaRef;
use crate::shared::pagination::null_as_default;
use crate::shared::query::{FilterField, FilterKind};
use crate::shared::resource::{EditorForm, EntityRef, ResourceMessages, ResourceRow};
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// Relations
// ============================================================================

/// Ссылка товара на категорию (подгружается через populate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Вариант выбора категории в форме товара
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub document_id: String,
    pub label: String,
}

// ============================================================================
// Row
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub barcode: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub image: Option<MediaRef>,
}

impl Product {
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("-")
    }
}

impl ResourceRow for Product {
    const COLLECTION: &'static str = "products";
    const POPULATE: &'static [&'static str] = &["category", "image"];
    const FILTERS: &'static [FilterField] = &[
        FilterField::new("barcode", "Codigo", FilterKind::Contains),
        FilterField::new("name", "Nombre", FilterKind::Contains),
    ];
    const MESSAGES: ResourceMessages = ResourceMessages {
        delete_confirm: "Estás seguro de borrar el producto \"{}\"?",
        deleted: "Producto eliminado correctamente",
        delete_failed: "Error al borrar el producto",
        created: "Producto creado con éxito",
        updated: "Producto editado con éxito",
        save_failed: "Error al guardar el producto",
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
const PRICE_RULES: ValidationRules = ValidationRules::positive("Price is required");
const STOCK_RULES: ValidationRules = ValidationRules::positive("Stock is required");
const BARCODE_RULES: ValidationRules = ValidationRules::required("Barcode is required");
const CATEGORY_RULES: ValidationRules = ValidationRules::required("Category is required");

/// Значения формы товара. Числа хранятся как введённый текст.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub barcode: String,
    /// `documentId` выбранной категории
    pub category: String,
    /// Прикреплённое изображение; сохраняется только вместе с формой
    pub image: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: f64,
    pub barcode: String,
    pub category: String,
    pub image: Option<i64>,
}

fn number_input(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

impl EditorForm for ProductForm {
    type Row = Product;
    type Payload = ProductPayload;

    fn from_row(row: &Product) -> Self {
        Self {
            name: row.name.clone(),
            description: row.description.clone().unwrap_or_default(),
            price: number_input(row.price),
            stock: number_input(row.stock),
            barcode: row.barcode.clone(),
            category: row
                .category
                .as_ref()
                .map(|c| c.document_id.clone())
                .unwrap_or_default(),
            image: row.image.clone(),
        }
    }

    fn validate(&self) -> Result<ProductPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name));

        let price = PRICE_RULES.parse_number(&self.price);
        let stock = STOCK_RULES.parse_number(&self.stock);
        errors.check("price", price.as_ref().map(|_| ()).map_err(Clone::clone));
        errors.check("stock", stock.as_ref().map(|_| ()).map_err(Clone::clone));

        errors.check("barcode", BARCODE_RULES.validate_string(&self.barcode));
        errors.check("category", CATEGORY_RULES.validate_string(&self.category));

        let description = self.description.trim();
        errors.into_result(ProductPayload {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price: price.ok().flatten().unwrap_or_default(),
            stock: stock.ok().flatten().unwrap_or_default(),
            barcode: self.barcode.trim().to_string(),
            category: self.category.clone(),
            image: self.image.as_ref().map(|m| m.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::{delete_request, save_request};
    use serde_json::json;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Coca-Cola 1.5L".into(),
            description: String::new(),
            price: "1990".into(),
            stock: "24".into(),
            barcode: "780123".into(),
            category: "cat-1".into(),
            image: None,
        }
    }

    #[test]
    fn test_decode_populated_row() {
        let json = r#"{
            "id": 9, "documentId": "abc123", "name": "Coca-Cola", "price": 1990, "stock": 24,
            "barcode": "780123",
            "category": {"id": 2, "documentId": "cat-2", "name": "Bebidas"},
            "image": {"id": 5, "url": "/uploads/coca.png", "formats": {"thumbnail": {"url": "/uploads/thumbnail_coca.png"}}}
        }"#;
        let row: Product = serde_json::from_str(json).unwrap();
        assert_eq!(row.category_label(), "Bebidas");
        assert_eq!(row.entity_ref().document_id, "abc123");

        let form = ProductForm::from_row(&row);
        assert_eq!(form.category, "cat-2");
        assert_eq!(form.price, "1990");
        assert_eq!(form.image.as_ref().map(|m| m.id), Some(5));
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let form = ProductForm {
            price: "0".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_fractional_stock_is_accepted() {
        let form = ProductForm {
            stock: "2.5".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().map(|p| p.stock), Ok(2.5));
    }

    #[test]
    fn test_large_stock_is_sent_unchanged() {
        let form = ProductForm {
            stock: "1e20".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().map(|p| p.stock), Ok(1e20));
    }

    #[test]
    fn test_non_positive_stock_is_rejected() {
        for raw in ["0", "-3", "muchos"] {
            let form = ProductForm {
                stock: raw.into(),
                ..valid_form()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get("stock"), Some("Stock is required"), "stock = {raw}");
        }
    }

    #[test]
    fn test_all_required_fields() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert_eq!(errors.get("stock"), Some("Stock is required"));
        assert_eq!(errors.get("barcode"), Some("Barcode is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn test_payload_carries_relation_and_media() {
        let form = ProductForm {
            image: Some(MediaRef {
                id: 31,
                url: "/uploads/x.png".into(),
                formats: None,
            }),
            ..valid_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Coca-Cola 1.5L",
                "description": null,
                "price": 1990.0,
                "stock": 24.0,
                "barcode": "780123",
                "category": "cat-1",
                "image": 31
            })
        );
    }

    #[test]
    fn test_cleared_image_is_sent_as_null() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_row_without_document_id_is_not_addressable() {
        let row: Product = serde_json::from_str(r#"{"id": 7, "name": "X"}"#).unwrap();
        assert!(!row.entity_ref().is_addressable());
        assert!(delete_request(Product::COLLECTION, &row.entity_ref()).is_err());

        let payload = valid_form().validate().unwrap();
        assert!(save_request(Product::COLLECTION, Some(&row.entity_ref()), &payload).is_err());
    }

    #[test]
    fn test_missing_category_label() {
        let row: Product = serde_json::from_str(r#"{"id": 1, "documentId": "p"}"#).unwrap();
        assert_eq!(row.category_label(), "-");
        assert!(row.image.is_none());
    }
}
