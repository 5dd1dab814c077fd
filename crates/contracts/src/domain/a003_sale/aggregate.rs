use crate::shared::lenient::text_or_number;
use crate::shared::pagination::null_as_default;
use crate::shared::query::{FilterField, FilterKind};
use crate::shared::resource::{EntityRef, ResourceMessages, ResourceRow};
use serde::{Deserialize, Serialize};

/// Фактура продажи (только просмотр и удаление)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(rename = "invoice_number", default, deserialize_with = "text_or_number")]
    pub invoice_number: String,
    #[serde(rename = "customer_name", default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(rename = "customer_phone", default, deserialize_with = "text_or_number")]
    pub customer_phone: String,
    #[serde(rename = "customer_email", default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    /// ISO-8601 дата и время продажи
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

pub const SALE_FILTERS: &[FilterField] = &[
    FilterField::new("invoice_number", "Folio", FilterKind::Equals),
    FilterField::new("customer_name", "Cliente", FilterKind::Contains),
    FilterField::new("customer_phone", "Telefono", FilterKind::Equals),
    FilterField::new("customer_email", "Correo Electronico", FilterKind::Contains),
    FilterField::new("date", "Fecha", FilterKind::Day),
];

impl ResourceRow for Sale {
    const COLLECTION: &'static str = "sales";
    const FILTERS: &'static [FilterField] = SALE_FILTERS;
    const MESSAGES: ResourceMessages = ResourceMessages {
        delete_confirm: "Estás seguro de borrar la FV \"{}\"?",
        deleted: "FV borrada correctamente",
        delete_failed: "Error al borrar la FV",
        created: "",
        updated: "",
        save_failed: "",
    };

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.id, self.document_id.clone())
    }

    fn display_name(&self) -> String {
        self.invoice_number.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sale() {
        let json = r#"{
            "id": 3, "documentId": "s3", "invoice_number": 1042,
            "customer_name": "Ana Pérez", "customer_phone": "+56911112222",
            "customer_email": null, "date": "2024-05-14T15:30:00.000Z", "total": 15990
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.invoice_number, "1042");
        assert_eq!(sale.customer_email, "");
        assert_eq!(sale.total, Some(15990.0));
        assert_eq!(sale.delete_prompt(), "Estás seguro de borrar la FV \"1042\"?");
    }
}
