use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::layout::{DashboardLayout, SidebarState};

#[derive(Deserialize, Default)]
pub struct DashboardQuery {
    pub sidebar: Option<String>,
}

/// GET /dashboard — dashboard shell with a collapsible sidebar.
pub async fn dashboard(Query(query): Query<DashboardQuery>) -> Html<String> {
    let layout = DashboardLayout::new(SidebarState::from_param(query.sidebar.as_deref()));
    Html(layout.render(
        "<h1>Dashboard</h1>\n<p>Pick a section from the sidebar.</p>",
    ))
}
