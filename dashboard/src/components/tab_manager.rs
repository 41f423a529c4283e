//! Tab controller: owns the tab collection, keeps it in step with the url,
//! and hands the navigation capabilities to everything rendered beneath it.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::side_bar::SideBar;
use super::tab_nav::TabNav;
use crate::tabs::{Tab, TabStore};

/// the capability interface views and the sidebar consume.
///
/// the [`TabStore`] behind it is written only here; consumers get the three
/// mutation requests plus a read-only snapshot, never the collection itself.
#[derive(Clone, Copy)]
pub struct TabsContext {
    store: RwSignal<TabStore>,
    navigate: Callback<String>,
}

impl TabsContext {
    /// reactive snapshot of the open tabs, in display order
    pub fn tabs(&self) -> Vec<Tab> {
        self.store.with(|store| store.tabs().to_vec())
    }

    /// open a tab, or re-activate it if already open, then navigate
    pub fn add_tab(&self, id: &str, title: &str, path: &str) {
        if let Some(target) = self
            .store
            .try_update(|store| store.add_tab(id, title, path))
        {
            self.navigate.run(target);
        }
    }

    /// activate an open tab and navigate to its stored path
    pub fn switch_tab(&self, id: &str) {
        if let Some(Some(target)) = self.store.try_update(|store| store.switch_tab(id)) {
            self.navigate.run(target);
        }
    }

    /// close a tab; closing the active one falls back to the dashboard
    pub fn close_tab(&self, id: &str) {
        if let Some(Some(target)) = self.store.try_update(|store| store.close_tab(id)) {
            self.navigate.run(target);
        }
    }
}

/// shell around every routed view: sidebar, tab strip, content area.
///
/// sits outside the router's `Routes` so the tab collection survives route
/// transitions; `children` is the routed outlet.
#[component]
pub fn TabManager(children: Children) -> impl IntoView {
    let store = RwSignal::new(TabStore::default());

    let navigate = use_navigate();
    let navigate = Callback::new(move |to: String| navigate(&to, NavigateOptions::default()));

    let ctx = TabsContext { store, navigate };
    provide_context(ctx);

    // align the active tab with the url on back/forward or direct navigation.
    // tracks only the pathname, and skips the write when no open tab matches
    // or the matching tab is already active.
    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        if store.with_untracked(|store| store.needs_activation(&path)) {
            store.update(|store| store.activate_path(&path));
        }
    });

    view! {
        <div class="admin-container">
            <SideBar />
            <div class="main-content">
                <TabNav />
                <div class="content-container">{children()}</div>
            </div>
        </div>
    }
}
