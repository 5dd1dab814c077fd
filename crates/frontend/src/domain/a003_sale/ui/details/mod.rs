use crate::shared::components::side_sheet::SideSheet;
use crate::shared::format::{format_sale_date, format_total};
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Просмотр фактуры (без редактирования)
#[component]
pub fn SaleDetails(sale: RwSignal<Option<Sale>>) -> impl IntoView {
    let open = Signal::derive(move || sale.with(|s| s.is_some()));
    let title = Signal::derive(move || {
        sale.with(|s| {
            s.as_ref()
                .map(|s| format!("Factura {}", s.invoice_number))
                .unwrap_or_default()
        })
    });

    let rows = move || {
        sale.get().map(|s| {
            let fields = [
                ("Folio", or_dash(&s.invoice_number)),
                ("Cliente", or_dash(&s.customer_name)),
                ("Telefono", or_dash(&s.customer_phone)),
                ("Correo Electronico", or_dash(&s.customer_email)),
                ("Fecha", format_sale_date(s.date.as_deref())),
                ("Total", format_total(s.total)),
            ];
            fields
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="details-row">
                            <span class="details-row__label">{label}</span>
                            <span class="details-row__value">{value}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <SideSheet open=open title=title on_close=Callback::new(move |_| sale.set(None))>
            <div class="details-list">{rows}</div>
        </SideSheet>
    }
}
