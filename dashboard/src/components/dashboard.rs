//! Dashboard landing view: overview cards plus quick links that open other
//! views as tabs through the injected navigation capabilities.

use leptos::prelude::*;

use super::tab_manager::TabsContext;

#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = expect_context::<TabsContext>();

    view! {
        <div class="dashboard-container">
            <h1 class="dashboard-title">"Dashboard"</h1>
            <div class="dashboard-grid">
                <div class="row">
                    <div class="card card-1">
                        <h3>"Overview"</h3>
                        <div class="overview-grid">
                            <div>
                                <div class="overview-number">"980"</div>
                                <div>"Users"</div>
                                <button
                                    class="quick-link"
                                    on:click=move |_| {
                                        ctx.add_tab("users", "User Management", "/users")
                                    }
                                >
                                    "Manage"
                                </button>
                            </div>
                            <div>
                                <div class="overview-number">"876"</div>
                                <div>"Products"</div>
                                <button
                                    class="quick-link"
                                    on:click=move |_| {
                                        ctx.add_tab("products", "Product Management", "/products")
                                    }
                                >
                                    "Manage"
                                </button>
                            </div>
                            <div>
                                <div class="overview-number">"7865"</div>
                                <div>"Orders"</div>
                            </div>
                        </div>
                    </div>
                    <div class="card card-2">
                        <h3>"Activities"</h3>
                        <div class="activity-list">
                            <div class="activity-item">
                                <span>"Order no: 234"</span>
                            </div>
                            <div class="activity-item">
                                <span>"User name: Winnie Jomo"</span>
                            </div>
                            <div class="activity-item">
                                <span>"Product: Handbag"</span>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="row">
                    <div class="card card-3">
                        <h3>"Statistics"</h3>
                        <div class="stats-list">
                            <div>
                                <span>"Revenue this month:"</span>
                                <strong>"234,890 ksh"</strong>
                            </div>
                            <div>
                                <span>"New Customers:"</span>
                                <strong>"49"</strong>
                            </div>
                            <div>
                                <span>"Pending Orders"</span>
                                <strong>"9"</strong>
                            </div>
                        </div>
                    </div>
                    <div class="card card-4">
                        <h3>"Performance Metrics"</h3>
                        <div class="metric">
                            <div class="metric-label">
                                <span>"Sales Target"</span>
                                <span>"75%"</span>
                            </div>
                            <div class="progress-bar bg-blue" style="width: 75%"></div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">
                                <span>"Customer Satisfaction"</span>
                                <span>"92%"</span>
                            </div>
                            <div class="progress-bar bg-green" style="width: 92%"></div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">
                                <span>"Order Fulfillment"</span>
                                <span>"88%"</span>
                            </div>
                            <div class="progress-bar bg-yellow" style="width: 88%"></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
