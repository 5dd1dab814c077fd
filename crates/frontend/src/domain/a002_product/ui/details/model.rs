use crate::shared::api;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::CategoryOption;
use contracts::shared::error::ApiError;
use contracts::shared::pagination::ListResponse;
use contracts::shared::resource::ResourceRow;

/// Категорий немного, список выбора грузится одной страницей
const CATEGORY_OPTIONS_PAGE_SIZE: u32 = 100;

pub fn category_options(categories: Vec<Category>) -> Vec<CategoryOption> {
    categories
        .into_iter()
        .map(|c| CategoryOption {
            document_id: c.document_id,
            label: c.name,
        })
        .collect()
}

pub async fn fetch_category_options() -> Result<Vec<CategoryOption>, ApiError> {
    let path = format!(
        "/api/{}?pagination[page]=1&pagination[pageSize]={}",
        Category::COLLECTION,
        CATEGORY_OPTIONS_PAGE_SIZE
    );
    let response: ListResponse<Category> = api::get_json(&path).await?;
    Ok(category_options(response.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_document_id() {
        let categories: Vec<Category> = serde_json::from_str(
            r#"[{"id": 1, "documentId": "c1", "name": "Bebidas"},
                {"id": 2, "documentId": "c2", "name": "Snacks"}]"#,
        )
        .unwrap();
        let options = category_options(categories);
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].document_id, "c2");
        assert_eq!(options[1].label, "Snacks");
    }
}
