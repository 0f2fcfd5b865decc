use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{error::INTERNAL_ERROR_MESSAGE, routes::AppState, site::SiteContent};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: Arc<SiteContent>,
}

/// GET / - landing page
pub async fn page(State(app_state): State<AppState>) -> Response {
    let template = IndexTemplate {
        site: app_state.site,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render landing page: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
        }
    }
}
