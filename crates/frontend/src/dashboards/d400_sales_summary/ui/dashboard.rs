use crate::dashboards::d400_sales_summary::api;
use crate::shared::components::stat_card::{StatCard, StatCardSkeleton};
use crate::shared::format::{format_clp, format_int};
use crate::shared::notifications::use_notifications;
use contracts::dashboards::d400_sales_summary::dto::{SalesSummary, SummaryPeriod};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Итоги продаж по четырём периодам
#[component]
pub fn SalesSummaryDashboard() -> impl IntoView {
    let notifier = use_notifications();
    let (data, set_data) = signal(None::<SalesSummary>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_sales_summary().await {
                Ok(summary) => {
                    set_data.try_set(Some(summary));
                }
                Err(e) => {
                    log::error!("Failed to load sales summary: {}", e);
                    notifier.error("Error al cargar el resumen de ventas");
                }
            }
            set_loading.try_set(false);
        });
    });

    let cards = move || {
        if loading.get() {
            return SummaryPeriod::ALL
                .iter()
                .map(|_| view! { <StatCardSkeleton /> })
                .collect_view()
                .into_any();
        }
        let summary = data.get().unwrap_or_default();
        SummaryPeriod::ALL
            .iter()
            .map(|period| {
                let bucket = period.bucket(&summary);
                view! {
                    <StatCard
                        label=period.label()
                        value=format_clp(bucket.total_revenue)
                        badge=format_int(bucket.count)
                        footer=vec![
                            format!("Ventas Totales {}", format_int(bucket.total_sales)),
                            format!("Descuento Total {}", format_clp(bucket.total_discount)),
                        ]
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Dashboard"}</h1>
                </div>
            </div>
            <div class="stat-grid">{cards}</div>
        </div>
    }
}
