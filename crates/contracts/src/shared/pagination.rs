//! Списочные ответы API и серверные метаданные пагинации
//!
//! Формат ответа коллекции:
//! `{ "data": [...], "meta": { "pagination": { "page", "pageSize", "pageCount", "total" } } }`

use serde::{Deserialize, Deserializer, Serialize};

/// Десериализует `null` как значение по умолчанию.
///
/// Используется вместе с `#[serde(default)]`, чтобы отсутствующее поле
/// и явный `null` давали одинаковый результат.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Пагинация, которую сообщает сервер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

impl PaginationMeta {
    /// Номера первой и последней записи на текущей странице (1-based).
    /// `None`, если строк нет.
    pub fn visible_range(&self, row_count: usize) -> Option<(u64, u64)> {
        if row_count == 0 {
            return None;
        }
        let first = u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size) + 1;
        let last = first + row_count as u64 - 1;
        Some((first, last))
    }

    /// Подпись под таблицей: "Mostrando 11 a 20 de 25 registros"
    pub fn range_label(&self, row_count: usize) -> String {
        match self.visible_range(row_count) {
            Some((first, last)) => format!(
                "Mostrando {} a {} de {} registros",
                first, last, self.total
            ),
            None => "No rows".to_string(),
        }
    }

    /// Последняя доступная страница (не меньше 1)
    pub fn last_page(&self) -> u32 {
        self.page_count.max(1)
    }

    /// Ограничить номер страницы диапазоном `1..=last_page`
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    pub fn has_previous(&self, page: u32) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: u32) -> bool {
        page < self.last_page()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: PaginationMeta,
}

/// Ответ списочного эндпоинта `GET /api/{resource}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: ListMeta,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, page_size: u32, page_count: u32, total: u32) -> PaginationMeta {
        PaginationMeta {
            page,
            page_size,
            page_count,
            total,
        }
    }

    #[test]
    fn test_range_label_second_page() {
        let m = meta(2, 10, 3, 25);
        assert_eq!(m.range_label(10), "Mostrando 11 a 20 de 25 registros");
    }

    #[test]
    fn test_range_label_partial_last_page() {
        let m = meta(3, 10, 3, 25);
        assert_eq!(m.range_label(5), "Mostrando 21 a 25 de 25 registros");
    }

    #[test]
    fn test_range_label_empty() {
        assert_eq!(meta(1, 10, 0, 0).range_label(0), "No rows");
        assert_eq!(meta(0, 0, 0, 0).range_label(0), "No rows");
    }

    #[test]
    fn test_clamp_page() {
        let m = meta(1, 10, 3, 25);
        assert_eq!(m.clamp_page(0), 1);
        assert_eq!(m.clamp_page(2), 2);
        assert_eq!(m.clamp_page(9), 3);
        assert!(!m.has_previous(1));
        assert!(m.has_next(2));
        assert!(!m.has_next(3));

        let empty = meta(1, 10, 0, 0);
        assert_eq!(empty.last_page(), 1);
        assert_eq!(empty.clamp_page(5), 1);
    }

    #[test]
    fn test_list_response_decodes_strapi_shape() {
        let json = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"pagination": {"page": 1, "pageSize": 10, "pageCount": 1, "total": 2}}
        }"#;
        let parsed: ListResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.meta.pagination, meta(1, 10, 1, 2));
    }

    #[test]
    fn test_list_response_missing_fields_default() {
        let parsed: ListResponse<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.meta.pagination, PaginationMeta::default());

        let parsed: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": null, "meta": {"pagination": {"page": null}}}"#)
                .unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.meta.pagination.page, 0);
    }
}
