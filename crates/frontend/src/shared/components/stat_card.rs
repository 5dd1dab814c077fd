use crate::shared::icons::icon;
use leptos::prelude::*;

/// Скелет карточки на время загрузки
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card stat-card--loading">
            <div class="skeleton skeleton--block"></div>
            <div class="skeleton skeleton--line"></div>
            <div class="skeleton skeleton--line"></div>
        </div>
    }
}

/// Карточка показателя на главной странице
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Formatted primary value
    value: String,
    /// Small counter next to the value, with the trending-up icon
    #[prop(optional)]
    badge: Option<String>,
    /// Footer lines below the value
    #[prop(optional)]
    footer: Vec<String>,
) -> impl IntoView {
    let badge_view = badge.map(|b| {
        view! {
            <span class="stat-card__badge">
                {icon("trending-up")}
                {b}
            </span>
        }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {badge_view}
                </div>
                {footer
                    .into_iter()
                    .map(|line| view! { <div class="stat-card__subtitle">{line}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}
