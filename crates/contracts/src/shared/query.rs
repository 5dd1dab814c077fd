//! Состояние запроса списка (страница, размер страницы, фильтры колонок)
//! и его сериализация в query string API.
//!
//! Ключи пишутся как есть (`pagination[page]`, `filters[name][$containsi]`),
//! значения кодируются через `urlencoding`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::collections::BTreeMap;

// ============================================================================
// Page size
// ============================================================================

/// Допустимые размеры страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty];

    pub const fn value(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Значение фильтра колонки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Date(NaiveDate),
}

impl FilterValue {
    /// Пустые значения в запрос не попадают
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.trim().is_empty(),
            FilterValue::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            FilterValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FilterValue::Date(d) => Some(*d),
            FilterValue::Text(_) => None,
        }
    }
}

/// Как фильтр колонки превращается в операторы API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Подстрока без учёта регистра (`$containsi`)
    Contains,
    /// Точное совпадение без учёта регистра (`$eqi`), для телефонов и номеров
    Equals,
    /// Календарный день: `$gte` начало дня и `$lt` 23:59:59.999 (UTC)
    Day,
}

/// Описание фильтруемой колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn new(key: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self { key, label, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    ContainsI,
    EqI,
    Gte,
    Lte,
    Lt,
}

impl FilterOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterOp::ContainsI => "$containsi",
            FilterOp::EqI => "$eqi",
            FilterOp::Gte => "$gte",
            FilterOp::Lte => "$lte",
            FilterOp::Lt => "$lt",
        }
    }
}

/// Одно условие `filters[field][$op]=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl Constraint {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    fn key(&self) -> String {
        format!("filters[{}][{}]", self.field, self.op.as_str())
    }
}

// ============================================================================
// Query state
// ============================================================================

/// Состояние запроса списка.
///
/// Любое изменение фильтра или размера страницы возвращает на первую страницу.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: u32,
    page_size: PageSize,
    filters: BTreeMap<String, FilterValue>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            filters: BTreeMap::new(),
        }
    }
}

impl QueryState {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    /// `None` или пустое значение удаляет фильтр
    pub fn set_filter(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
        let key = key.into();
        match value.filter(|v| !v.is_empty()) {
            Some(v) => {
                self.filters.insert(key, v);
            }
            None => {
                self.filters.remove(&key);
            }
        }
        self.page = 1;
    }

    /// Условия по объявленным колонкам, в порядке объявления
    pub fn constraints(&self, fields: &[FilterField]) -> Vec<Constraint> {
        let mut out = Vec::new();
        for field in fields {
            let Some(value) = self.filters.get(field.key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match (field.kind, value) {
                (FilterKind::Contains, FilterValue::Text(s)) => {
                    out.push(Constraint::new(field.key, FilterOp::ContainsI, s.as_str()));
                }
                (FilterKind::Equals, FilterValue::Text(s)) => {
                    out.push(Constraint::new(field.key, FilterOp::EqI, s.as_str()));
                }
                (FilterKind::Day, FilterValue::Date(d)) => {
                    let (start, end) = day_bounds(*d);
                    out.push(Constraint::new(field.key, FilterOp::Gte, iso_millis(start)));
                    out.push(Constraint::new(field.key, FilterOp::Lt, iso_millis(end)));
                }
                (FilterKind::Day, FilterValue::Text(s)) => {
                    if let Ok(d) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                        let (start, end) = day_bounds(d);
                        out.push(Constraint::new(field.key, FilterOp::Gte, iso_millis(start)));
                        out.push(Constraint::new(field.key, FilterOp::Lt, iso_millis(end)));
                    }
                }
                (FilterKind::Contains | FilterKind::Equals, FilterValue::Date(d)) => {
                    let op = if field.kind == FilterKind::Contains {
                        FilterOp::ContainsI
                    } else {
                        FilterOp::EqI
                    };
                    out.push(Constraint::new(field.key, op, d.format("%Y-%m-%d").to_string()));
                }
            }
        }
        out
    }
}

// ============================================================================
// Wire encoding
// ============================================================================

/// Параметры списочного запроса конкретного ресурса
#[derive(Debug, Clone, Copy)]
pub struct ListQuery<'a> {
    pub state: &'a QueryState,
    pub fields: &'a [FilterField],
    pub populate: &'a [&'a str],
    /// Условия, которые не зависят от пользовательских фильтров
    pub fixed: &'a [Constraint],
}

impl<'a> ListQuery<'a> {
    pub fn new(state: &'a QueryState) -> Self {
        Self {
            state,
            fields: &[],
            populate: &[],
            fixed: &[],
        }
    }

    pub fn fields(mut self, fields: &'a [FilterField]) -> Self {
        self.fields = fields;
        self
    }

    pub fn populate(mut self, populate: &'a [&'a str]) -> Self {
        self.populate = populate;
        self
    }

    pub fn fixed(mut self, fixed: &'a [Constraint]) -> Self {
        self.fixed = fixed;
        self
    }

    /// Пары ключ/значение в порядке: пагинация, фильтры, populate
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pagination[page]".to_string(), self.state.page().to_string()),
            (
                "pagination[pageSize]".to_string(),
                self.state.page_size().value().to_string(),
            ),
        ];
        for c in self
            .state
            .constraints(self.fields)
            .iter()
            .chain(self.fixed.iter())
        {
            pairs.push((c.key(), c.value.clone()));
        }
        for (i, rel) in self.populate.iter().enumerate() {
            pairs.push((format!("populate[{}]", i), rel.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ============================================================================
// Date ranges (UTC)
// ============================================================================

/// Начало дня и 23:59:59.999 того же дня
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}

/// Первый и последний день месяца, которому принадлежит `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// `filters[field][$gte]` начало месяца, `filters[field][$lte]` конец последнего дня
pub fn month_constraints(field: &str, today: NaiveDate) -> Vec<Constraint> {
    let (first, last) = month_bounds(today);
    let (start, _) = day_bounds(first);
    let (_, end) = day_bounds(last);
    vec![
        Constraint::new(field, FilterOp::Gte, iso_millis(start)),
        Constraint::new(field, FilterOp::Lte, iso_millis(end)),
    ]
}

/// ISO-8601 с миллисекундами и суффиксом `Z`
pub fn iso_millis(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY_FILTERS: &[FilterField] = &[FilterField::new("name", "Nombre", FilterKind::Contains)];

    const SALE_FILTERS: &[FilterField] = &[
        FilterField::new("invoice_number", "Folio", FilterKind::Equals),
        FilterField::new("customer_name", "Cliente", FilterKind::Contains),
        FilterField::new("date", "Fecha", FilterKind::Day),
    ];

    fn text(s: &str) -> Option<FilterValue> {
        Some(FilterValue::Text(s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let q = QueryState::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), PageSize::Ten);
        assert!(q.filters().is_empty());
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut q = QueryState::default();
        q.set_page(4);
        q.set_filter("name", text("bev"));
        assert_eq!(q.page(), 1);

        q.set_page(3);
        q.set_filter("name", None);
        assert_eq!(q.page(), 1);
        assert!(q.filter("name").is_none());
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut q = QueryState::default();
        q.set_page(5);
        q.set_page_size(PageSize::Fifty);
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size().value(), 50);
    }

    #[test]
    fn test_set_page_never_below_one() {
        let mut q = QueryState::default();
        q.set_page(0);
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_page_size_from_value() {
        assert_eq!(PageSize::from_value(25), Some(PageSize::TwentyFive));
        assert_eq!(PageSize::from_value(100), None);
    }

    #[test]
    fn test_contains_filter_encoding() {
        let mut q = QueryState::default();
        q.set_filter("name", text("abc"));
        let s = ListQuery::new(&q).fields(CATEGORY_FILTERS).to_query_string();
        assert!(s.contains("filters[name][$containsi]=abc"));
    }

    #[test]
    fn test_empty_filters_emit_nothing() {
        let mut q = QueryState::default();
        q.set_filter("name", text("   "));
        let s = ListQuery::new(&q).fields(CATEGORY_FILTERS).to_query_string();
        assert_eq!(s, "pagination[page]=1&pagination[pageSize]=10");
    }

    #[test]
    fn test_category_scenario_query() {
        let mut q = QueryState::default();
        q.set_filter("name", text("bev"));
        let s = ListQuery::new(&q).fields(CATEGORY_FILTERS).to_query_string();
        assert!(s.contains(
            "pagination[page]=1&pagination[pageSize]=10&filters[name][$containsi]=bev"
        ));
    }

    #[test]
    fn test_values_are_url_encoded() {
        let mut q = QueryState::default();
        q.set_filter("name", text("a&b c"));
        let s = ListQuery::new(&q).fields(CATEGORY_FILTERS).to_query_string();
        assert!(s.ends_with("filters[name][$containsi]=a%26b%20c"));
    }

    #[test]
    fn test_undeclared_filters_are_ignored() {
        let mut q = QueryState::default();
        q.set_filter("other", text("x"));
        assert!(q.constraints(CATEGORY_FILTERS).is_empty());
    }

    #[test]
    fn test_equals_and_day_filters() {
        let mut q = QueryState::default();
        q.set_filter("invoice_number", text("F-100"));
        q.set_filter(
            "date",
            Some(FilterValue::Date(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap())),
        );
        let c = q.constraints(SALE_FILTERS);
        assert_eq!(
            c,
            vec![
                Constraint::new("invoice_number", FilterOp::EqI, "F-100"),
                Constraint::new("date", FilterOp::Gte, "2024-05-14T00:00:00.000Z"),
                Constraint::new("date", FilterOp::Lt, "2024-05-14T23:59:59.999Z"),
            ]
        );
    }

    #[test]
    fn test_populate_and_fixed_order() {
        let q = QueryState::default();
        let fixed = vec![Constraint::new("date", FilterOp::Gte, "2024-05-01T00:00:00.000Z")];
        let s = ListQuery::new(&q)
            .populate(&["category", "image"])
            .fixed(&fixed)
            .to_query_string();
        assert_eq!(
            s,
            "pagination[page]=1&pagination[pageSize]=10\
             &filters[date][$gte]=2024-05-01T00%3A00%3A00.000Z\
             &populate[0]=category&populate[1]=image"
        );
    }

    #[test]
    fn test_month_bounds() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            month_bounds(d),
            (
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
            )
        );
        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(month_bounds(d).1, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_month_constraints() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();
        let c = month_constraints("date", d);
        assert_eq!(c[0], Constraint::new("date", FilterOp::Gte, "2024-04-01T00:00:00.000Z"));
        assert_eq!(c[1], Constraint::new("date", FilterOp::Lte, "2024-04-30T23:59:59.999Z"));
    }
}
