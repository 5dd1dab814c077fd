use crate::domain::a003_sale::ui::list::SalesTable;
use crate::shared::resource_list::ResourceListController;
use chrono::Utc;
use contracts::domain::a003_sale::aggregate::Sale;
use contracts::projections::p900_monthly_sales::MonthlySalesPeriod;
use leptos::prelude::*;

/// Продажи текущего месяца (UTC)
#[component]
#[allow(non_snake_case)]
pub fn MonthlySalesReport() -> impl IntoView {
    let period = MonthlySalesPeriod::containing(Utc::now().date_naive());
    let list = ResourceListController::<Sale>::with_fixed(period.constraints());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Ventas Mensuales"}</h1>
                    <div class="header__subtitle">
                        {"Lista de Ventas del Mes "}
                        <span class="header__period">{period.label()}</span>
                    </div>
                </div>
            </div>
            <SalesTable list=list fixed_date=true />
        </div>
    }
}
