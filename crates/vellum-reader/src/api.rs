//! HTTP surface for the reader node.
//!
//! Server-rendered pages under `/` and `/wiki`, JSON under `/api/v1`.
//! The navigable location is the topic path: searches redirect to
//! `/wiki/<slug>` and wikilinks inside rendered bodies point there too.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;
use vellum_markup::topic_slug;

use crate::article::RenderedArticle;
use crate::node::ReaderState;
use crate::page;
use crate::select::TopicView;
use crate::view::ViewState;

type AppState = Arc<ReaderState>;

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    // CORS layer for browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Browser surface
        .route("/", get(home))
        .route("/search", get(search))
        .route("/wiki/:topic", get(show_topic))
        .route("/wiki/:topic/compare/:id", get(compare_topic))
        // JSON API
        .route("/api/v1/wiki/:topic", get(topic_json))
        .route("/api/v1/state", get(view_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// --- Health endpoints ---

async fn health() -> &'static str {
    "OK"
}

async fn ready() -> &'static str {
    "OK"
}

// --- Browser surface ---

async fn home() -> Html<String> {
    Html(page::home_page())
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: String,
}

/// The search surface: normalize the raw input and move the navigable
/// location to the topic's canonical path.
async fn search(Query(query): Query<SearchQuery>) -> Redirect {
    Redirect::to(&format!("/wiki/{}", topic_slug(&query.q)))
}

async fn show_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Html<String> {
    let token = state.view.write().await.begin_load();

    match state.selector.load_topic(&topic).await {
        TopicView::NotFound { slug } => {
            state.view.write().await.commit_not_found(token, &slug);
            Html(page::not_found_page(&slug))
        }
        TopicView::Found(ranked) => {
            let primary = RenderedArticle::from_candidate(ranked.primary(), &state.converter);
            let committed = state
                .view
                .write()
                .await
                .commit_load(token, &ranked.slug, &primary.id);
            if !committed {
                debug!(slug = %ranked.slug, "load superseded; view state unchanged");
            }
            Html(page::article_page(&ranked, &primary))
        }
    }
}

async fn compare_topic(
    State(state): State<AppState>,
    Path((topic, id)): Path<(String, String)>,
) -> Html<String> {
    let token = state.view.write().await.begin_load();

    match state.selector.load_topic(&topic).await {
        TopicView::NotFound { slug } => {
            state.view.write().await.commit_not_found(token, &slug);
            Html(page::not_found_page(&slug))
        }
        TopicView::Found(ranked) => {
            let Some(alternate) = ranked.candidate(&id) else {
                return Html(page::not_found_page(&ranked.slug));
            };
            let primary = RenderedArticle::from_candidate(ranked.primary(), &state.converter);
            let secondary = RenderedArticle::from_candidate(alternate, &state.converter);

            {
                let mut view = state.view.write().await;
                if view.commit_load(token, &ranked.slug, &primary.id) {
                    view.select_comparison(&secondary.id);
                }
            }

            Html(page::compare_page(&ranked, &primary, &secondary))
        }
    }
}

// --- JSON API ---

/// Summary of a non-primary candidate, for the comparison list.
#[derive(Debug, Serialize)]
struct AlternateSummary {
    id: String,
    title: String,
    author: String,
    approvals: usize,
}

#[derive(Debug, Serialize)]
struct TopicResponse {
    slug: String,
    primary: RenderedArticle,
    alternates: Vec<AlternateSummary>,
}

async fn topic_json(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<TopicResponse>, StatusCode> {
    match state.selector.load_topic(&topic).await {
        TopicView::NotFound { .. } => Err(StatusCode::NOT_FOUND),
        TopicView::Found(ranked) => {
            let primary = RenderedArticle::from_candidate(ranked.primary(), &state.converter);
            let alternates = ranked
                .alternates()
                .iter()
                .map(|c| AlternateSummary {
                    id: c.id().to_string(),
                    title: c.title().to_string(),
                    author: c.author_short().to_string(),
                    approvals: c.approvals,
                })
                .collect();

            Ok(Json(TopicResponse {
                slug: ranked.slug.clone(),
                primary,
                alternates,
            }))
        }
    }
}

async fn view_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.view.read().await.clone())
}
