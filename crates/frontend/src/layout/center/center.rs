use crate::dashboards::SalesSummaryDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_sale::ui::list::SaleList;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::projections::MonthlySalesReport;
use leptos::prelude::*;

/// Активная страница. При переключении прежняя страница со своим состоянием
/// списка уничтожается.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                PageKey::Dashboard => view! { <SalesSummaryDashboard /> }.into_any(),
                PageKey::Categories => view! { <CategoryList /> }.into_any(),
                PageKey::Products => view! { <ProductList /> }.into_any(),
                PageKey::Sales => view! { <SaleList /> }.into_any(),
                PageKey::MonthlySales => view! { <MonthlySalesReport /> }.into_any(),
            }}
        </div>
    }
}
