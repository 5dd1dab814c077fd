//! Отчёт о продажах за текущий месяц: список продаж с фиксированным
//! ограничением по дате.

use crate::shared::query::{month_bounds, month_constraints, Constraint};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySalesPeriod {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl MonthlySalesPeriod {
    pub fn containing(today: NaiveDate) -> Self {
        let (first, last) = month_bounds(today);
        Self { first, last }
    }

    /// "01-05-2024 - 31-05-2024"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.first.format("%d-%m-%Y"),
            self.last.format("%d-%m-%Y")
        )
    }

    /// `filters[date][$gte]` / `filters[date][$lte]`
    pub fn constraints(&self) -> Vec<Constraint> {
        month_constraints("date", self.first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{ListQuery, QueryState};

    #[test]
    fn test_period_label() {
        let p = MonthlySalesPeriod::containing(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap());
        assert_eq!(p.label(), "01-05-2024 - 31-05-2024");
    }

    #[test]
    fn test_fixed_constraints_survive_paging() {
        let p = MonthlySalesPeriod::containing(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap());
        let fixed = p.constraints();
        let mut state = QueryState::default();
        state.set_page(3);
        let s = ListQuery::new(&state).fixed(&fixed).to_query_string();
        assert!(s.contains("pagination[page]=3"));
        assert!(s.contains("filters[date][$gte]=2024-05-01T00%3A00%3A00.000Z"));
        assert!(s.contains("filters[date][$lte]=2024-05-31T23%3A59%3A59.999Z"));
    }
}
