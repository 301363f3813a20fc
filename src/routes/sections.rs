// src/routes/sections.rs

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Serialize;

use crate::models::View;
use crate::sections::{self, SectionKind, SectionParams, SectionRequest};
use crate::AppState;
use super::{bad_request, internal_error, not_found};

#[derive(Serialize)]
pub struct NavItem {
    pub slug: SectionKind,
    pub title: &'static str,
}

// GET /api/v1/sections
pub async fn list_sections() -> Json<Vec<NavItem>> {
    Json(
        SectionKind::all()
            .into_iter()
            .map(|k| NavItem { slug: k, title: k.title() })
            .collect(),
    )
}

// GET /api/v1/sections/:slug
pub async fn get_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<SectionParams>,
) -> Result<Json<View>, (StatusCode, String)> {
    let kind: SectionKind = slug.parse().map_err(not_found)?;
    let request = SectionRequest::from_params(kind, params).map_err(bad_request)?;

    tracing::debug!(section = %kind, ?request, "rendering section");
    let view = sections::render(&state.pool, request).await.map_err(internal_error)?;
    Ok(Json(view))
}
