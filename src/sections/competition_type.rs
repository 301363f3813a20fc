// src/sections/competition_type.rs

use std::str::FromStr;

use sqlx::PgPool;

use super::InvalidFilter;
use crate::db::Param;
use crate::models::{table_from_query, Block, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

// Stored casing of `type` is not consistent across feeds, so match on LOWER().
const COMPETITIONS_OF_TYPE: &str = r#"
    SELECT competition_id, competition_name, type
    FROM competitions
    WHERE LOWER(type) = $1
    LIMIT 200
"#;

const COLUMNS: [&str; 3] = ["competition_id", "competition_name", "type"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompetitionType {
    #[default]
    Singles,
    Doubles,
    Mixed,
}

impl CompetitionType {
    pub const ALL: [CompetitionType; 3] = [CompetitionType::Singles, CompetitionType::Doubles, CompetitionType::Mixed];

    pub fn label(self) -> &'static str {
        match self {
            CompetitionType::Singles => "Singles",
            CompetitionType::Doubles => "Doubles",
            CompetitionType::Mixed => "Mixed",
        }
    }

    /// Lower-cased value compared against `competitions.type`.
    pub fn db_value(self) -> &'static str {
        match self {
            CompetitionType::Singles => "singles",
            CompetitionType::Doubles => "doubles",
            CompetitionType::Mixed => "mixed",
        }
    }
}

impl FromStr for CompetitionType {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CompetitionType::ALL
            .into_iter()
            .find(|t| t.db_value() == needle)
            .ok_or_else(|| InvalidFilter::UnknownCompetitionType(s.to_owned()))
    }
}

pub(super) async fn render(pool: &PgPool, ty: CompetitionType) -> Result<View, ReportError> {
    let mut view = View::new(SectionKind::CompetitionType).with_filter(FilterWidget::Radio {
        param: "type",
        label: "Competition Type",
        options: CompetitionType::ALL.iter().map(|t| t.label().to_owned()).collect(),
        selected: ty.label().to_owned(),
    });

    view.push(Block::text(format!("Competition Type: {}", ty.label())));
    let table = table_from_query(pool, COMPETITIONS_OF_TYPE, &COLUMNS, &[Param::from(ty.db_value())]).await?;
    view.push(Block::table(table));
    Ok(view)
}
