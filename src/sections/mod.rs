// src/sections/mod.rs
//
// One module per navigation section. Each section reads its own typed filter
// out of `SectionRequest`, runs its queries and returns a `View`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;

use crate::models::{ReportError, View};

mod category;
mod competition_type;
mod competitor_details;
mod country_filter;
mod home;
mod leaderboard;
mod rank_range;
mod venues;

pub use competition_type::CompetitionType;
pub use country_filter::{NO_COMPETITORS, NO_DATA};
pub use rank_range::RankRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Home,
    CompetitorDetails,
    RankRange,
    CountryFilter,
    CompetitionType,
    Category,
    VenuesByCountry,
    Leaderboard,
}

impl SectionKind {
    /// Sidebar order.
    pub const fn all() -> [SectionKind; 8] {
        [
            SectionKind::Home,
            SectionKind::CompetitorDetails,
            SectionKind::RankRange,
            SectionKind::CountryFilter,
            SectionKind::CompetitionType,
            SectionKind::Category,
            SectionKind::VenuesByCountry,
            SectionKind::Leaderboard,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::CompetitorDetails => "competitor-details",
            SectionKind::RankRange => "rank-range",
            SectionKind::CountryFilter => "country-filter",
            SectionKind::CompetitionType => "competition-type",
            SectionKind::Category => "category",
            SectionKind::VenuesByCountry => "venues-by-country",
            SectionKind::Leaderboard => "leaderboard",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SectionKind::Home => "Tennis Rankings",
            SectionKind::CompetitorDetails => "Competitor Details",
            SectionKind::RankRange => "Competitor Rank Range",
            SectionKind::CountryFilter => "Country Filter",
            SectionKind::CompetitionType => "Competition Type",
            SectionKind::Category => "Category",
            SectionKind::VenuesByCountry => "Venues by Country",
            SectionKind::Leaderboard => "Leaderboard",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::all()
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidFilter {
    #[error("rank bounds {min}..={max} fall outside 1..=500")]
    RankOutOfBounds { min: i32, max: i32 },
    #[error("min_rank ({min}) is greater than max_rank ({max})")]
    InvertedRange { min: i32, max: i32 },
    #[error("unknown competition type '{0}' (expected singles, doubles or mixed)")]
    UnknownCompetitionType(String),
}

/// Raw filter values as they arrive on the query string. Which ones matter
/// depends on the section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SectionParams {
    pub name: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub min_rank: Option<i32>,
    pub max_rank: Option<i32>,
    #[serde(rename = "type")]
    pub competition_type: Option<String>,
}

/// A section together with its typed filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRequest {
    Home,
    CompetitorDetails { name: Option<String> },
    RankRange(RankRange),
    CountryFilter { country: Option<String> },
    CompetitionType(CompetitionType),
    Category { category: Option<String> },
    VenuesByCountry { country: Option<String> },
    Leaderboard,
}

impl SectionRequest {
    pub fn from_params(kind: SectionKind, params: SectionParams) -> Result<Self, InvalidFilter> {
        Ok(match kind {
            SectionKind::Home => SectionRequest::Home,
            SectionKind::CompetitorDetails => SectionRequest::CompetitorDetails { name: non_blank(params.name) },
            SectionKind::RankRange => SectionRequest::RankRange(RankRange::new(
                params.min_rank.unwrap_or(RankRange::MIN),
                params.max_rank.unwrap_or(RankRange::MAX),
            )?),
            SectionKind::CountryFilter => SectionRequest::CountryFilter { country: non_blank(params.country) },
            SectionKind::CompetitionType => SectionRequest::CompetitionType(
                match non_blank(params.competition_type) {
                    Some(raw) => raw.parse()?,
                    None => CompetitionType::default(),
                },
            ),
            SectionKind::Category => SectionRequest::Category { category: non_blank(params.category) },
            SectionKind::VenuesByCountry => SectionRequest::VenuesByCountry { country: non_blank(params.country) },
            SectionKind::Leaderboard => SectionRequest::Leaderboard,
        })
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            SectionRequest::Home => SectionKind::Home,
            SectionRequest::CompetitorDetails { .. } => SectionKind::CompetitorDetails,
            SectionRequest::RankRange(_) => SectionKind::RankRange,
            SectionRequest::CountryFilter { .. } => SectionKind::CountryFilter,
            SectionRequest::CompetitionType(_) => SectionKind::CompetitionType,
            SectionRequest::Category { .. } => SectionKind::Category,
            SectionRequest::VenuesByCountry { .. } => SectionKind::VenuesByCountry,
            SectionRequest::Leaderboard => SectionKind::Leaderboard,
        }
    }
}

pub async fn render(pool: &PgPool, request: SectionRequest) -> Result<View, ReportError> {
    match request {
        SectionRequest::Home => Ok(home::render()),
        SectionRequest::CompetitorDetails { name } => competitor_details::render(pool, name).await,
        SectionRequest::RankRange(range) => rank_range::render(pool, range).await,
        SectionRequest::CountryFilter { country } => country_filter::render(pool, country).await,
        SectionRequest::CompetitionType(ty) => competition_type::render(pool, ty).await,
        SectionRequest::Category { category } => category::render(pool, category).await,
        SectionRequest::VenuesByCountry { country } => venues::render(pool, country).await,
        SectionRequest::Leaderboard => leaderboard::render(pool).await,
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Explicit request value wins; otherwise the first option, like a select box
/// with nothing chosen yet.
fn resolve_selection(options: &[String], requested: Option<String>) -> Option<String> {
    requested.or_else(|| options.first().cloned())
}
