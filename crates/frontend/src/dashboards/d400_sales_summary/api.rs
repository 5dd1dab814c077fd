use crate::shared::api;
use contracts::dashboards::d400_sales_summary::dto::{SalesSummary, SalesSummaryResponse};
use contracts::shared::error::ApiError;

pub async fn get_sales_summary() -> Result<SalesSummary, ApiError> {
    let response: SalesSummaryResponse = api::get_json("/api/sales/summary/").await?;
    Ok(response.data)
}
