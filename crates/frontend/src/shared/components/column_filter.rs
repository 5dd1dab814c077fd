//! Заголовок колонки с полем фильтра.
//!
//! Текстовый ввод применяется после паузы в наборе, дата сразу.

use chrono::NaiveDate;
use contracts::shared::query::{FilterKind, FilterValue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Значение фильтра из текста поля ввода
pub fn parse_filter_input(kind: FilterKind, raw: &str) -> Option<FilterValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match kind {
        FilterKind::Day => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .map(FilterValue::Date),
        FilterKind::Contains | FilterKind::Equals => Some(FilterValue::Text(raw.to_string())),
    }
}

/// Текст для поля ввода
pub fn filter_input_text(value: Option<&FilterValue>) -> String {
    match value {
        Some(FilterValue::Text(s)) => s.clone(),
        Some(FilterValue::Date(d)) => d.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

#[component]
pub fn ColumnFilter(
    label: &'static str,
    kind: FilterKind,
    #[prop(into)]
    value: Signal<Option<FilterValue>>,
    on_change: Callback<Option<FilterValue>>,
) -> impl IntoView {
    let text = RwSignal::new(filter_input_text(value.get_untracked().as_ref()));
    let generation = StoredValue::new(0u64);

    let on_text_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        text.set(raw.clone());
        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(issued) {
                on_change.run(parse_filter_input(kind, &raw));
            }
        });
    };

    let on_date_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        text.set(raw.clone());
        on_change.run(parse_filter_input(kind, &raw));
    };

    let placeholder = format!("Filtrar {}...", label.to_lowercase());

    view! {
        <div class="column-filter">
            <span class="column-filter__label">{label}</span>
            {match kind {
                FilterKind::Day => view! {
                    <input
                        type="date"
                        class="column-filter__input"
                        prop:value=move || text.get()
                        on:change=on_date_change
                    />
                }.into_any(),
                FilterKind::Contains | FilterKind::Equals => view! {
                    <input
                        type="text"
                        class="column-filter__input"
                        placeholder=placeholder
                        prop:value=move || text.get()
                        on:input=on_text_input
                    />
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_filter() {
        assert_eq!(
            parse_filter_input(FilterKind::Contains, "bev"),
            Some(FilterValue::Text("bev".into()))
        );
        assert_eq!(parse_filter_input(FilterKind::Equals, "   "), None);
    }

    #[test]
    fn test_parse_date_filter() {
        assert_eq!(
            parse_filter_input(FilterKind::Day, "2024-05-14"),
            Some(FilterValue::Date(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()))
        );
        assert_eq!(parse_filter_input(FilterKind::Day, "14/05/2024"), None);
    }

    #[test]
    fn test_input_text_roundtrips_date() {
        let value = FilterValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(filter_input_text(Some(&value)), "2024-01-02");
        assert_eq!(filter_input_text(None), "");
    }
}
