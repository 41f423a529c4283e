//! Product catalog view: listing, a small create form, and removal.

use leptos::prelude::*;
use shared::Product;

use crate::api;
use crate::format;

#[component]
pub fn ProductsView() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (stock, set_stock) = signal(String::new());
    let (saving, set_saving) = signal(false);

    leptos::task::spawn_local(async move {
        match api::fetch_products().await {
            Ok(data) => set_products.set(data),
            Err(e) => {
                leptos::logging::error!("failed to fetch products: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() {
            return;
        }
        let product = Product {
            id: (js_sys::Date::now() as u64).to_string(),
            name: name.get().trim().to_string(),
            category: category.get().trim().to_string(),
            price: price.get().parse().unwrap_or(0.0),
            stock: stock.get().parse().unwrap_or(0),
            status: "in-stock".to_string(),
        };
        set_saving.set(true);
        leptos::task::spawn_local(async move {
            match api::create_product(&product).await {
                Ok(created) => {
                    set_products.update(|products| products.push(created));
                    set_name.set(String::new());
                    set_category.set(String::new());
                    set_price.set(String::new());
                    set_stock.set(String::new());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => set_products.update(|products| products.retain(|p| p.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="products-container">
            <h1>"Product Management"</h1>

            <div class="card">
                <h3>"Add Product"</h3>
                <form class="product-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Price (KES)"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Stock"
                        prop:value=move || stock.get()
                        on:input=move |ev| set_stock.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Add" }}
                    </button>
                </form>
            </div>

            <Show when=move || loading.get()>
                <div class="spinner-row">
                    <span class="spinner"></span>
                    " Loading products..."
                </div>
            </Show>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="result error">
                                <div class="result-label">"Error"</div>
                                <div class="result-value">{e}</div>
                            </div>
                        }
                    })
            }}

            <Show when=move || !loading.get()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Stock"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let delete_id = product.id.clone();
                                    view! {
                                        <tr>
                                            <td>{product.name.clone()}</td>
                                            <td>{product.category.clone()}</td>
                                            <td>{format::kes(product.price)}</td>
                                            <td>{product.stock}</td>
                                            <td>{product.status.clone()}</td>
                                            <td>
                                                <button
                                                    class="action-btn danger"
                                                    on:click=move |_| delete(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
