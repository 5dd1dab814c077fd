use crate::shared::lenient::number_or_string;
use crate::shared::pagination::null_as_default;
use serde::{Deserialize, Serialize};

/// Итоги продаж за период
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummaryBucket {
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_discount: f64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub count: f64,
}

/// Ответ `GET /api/sales/summary/` (поле `data`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub week: SalesSummaryBucket,
    #[serde(rename = "two-weeks", default, deserialize_with = "null_as_default")]
    pub two_weeks: SalesSummaryBucket,
    #[serde(default, deserialize_with = "null_as_default")]
    pub month: SalesSummaryBucket,
    #[serde(rename = "last-month", default, deserialize_with = "null_as_default")]
    pub last_month: SalesSummaryBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesSummaryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: SalesSummary,
}

/// Карточки дашборда в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    Week,
    TwoWeeks,
    Month,
    LastMonth,
}

impl SummaryPeriod {
    pub const ALL: [SummaryPeriod; 4] = [
        SummaryPeriod::Week,
        SummaryPeriod::TwoWeeks,
        SummaryPeriod::Month,
        SummaryPeriod::LastMonth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SummaryPeriod::Week => "Ventas de esta semana",
            SummaryPeriod::TwoWeeks => "Ventas Ultimos 15 días",
            SummaryPeriod::Month => "Ventas Mes Actual",
            SummaryPeriod::LastMonth => "Ventas Mes Anterior",
        }
    }

    pub fn bucket(self, summary: &SalesSummary) -> SalesSummaryBucket {
        match self {
            SummaryPeriod::Week => summary.week,
            SummaryPeriod::TwoWeeks => summary.two_weeks,
            SummaryPeriod::Month => summary.month,
            SummaryPeriod::LastMonth => summary.last_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summary_with_dashed_keys() {
        let json = r#"{"data": {
            "week": {"totalRevenue": "150000", "totalSales": 160000, "totalDiscount": "10000", "count": 12},
            "two-weeks": {"totalRevenue": 300000, "count": 20},
            "month": null
        }}"#;
        let resp: SalesSummaryResponse = serde_json::from_str(json).unwrap();
        let s = resp.data;
        assert_eq!(s.week.total_revenue, 150000.0);
        assert_eq!(s.week.total_discount, 10000.0);
        assert_eq!(s.week.count, 12.0);
        assert_eq!(SummaryPeriod::TwoWeeks.bucket(&s).total_revenue, 300000.0);
        assert_eq!(s.two_weeks.total_sales, 0.0);
        assert_eq!(s.month, SalesSummaryBucket::default());
        assert_eq!(s.last_month, SalesSummaryBucket::default());
    }
}
