//! Tab strip above the content area.

use leptos::prelude::*;

use super::tab_manager::TabsContext;
use crate::tabs::HOME_TAB_ID;

#[component]
pub fn TabNav() -> impl IntoView {
    let ctx = expect_context::<TabsContext>();

    view! {
        <div class="tabbed-interface">
            <div class="tab-container">
                {move || {
                    ctx.tabs()
                        .into_iter()
                        .map(|tab| {
                            let switch_id = tab.id.clone();
                            let close_id = tab.id.clone();
                            let closable = tab.id != HOME_TAB_ID;
                            view! {
                                <div
                                    class=if tab.active { "tab active" } else { "tab" }
                                    on:click=move |_| ctx.switch_tab(&switch_id)
                                >
                                    <span class="tab-title">{tab.title.clone()}</span>
                                    {closable
                                        .then(move || {
                                            view! {
                                                <span
                                                    class="tab-close"
                                                    // a close click must not double as a switch
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        ctx.close_tab(&close_id);
                                                    }
                                                >
                                                    "×"
                                                </span>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
