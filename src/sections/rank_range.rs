// src/sections/rank_range.rs

use sqlx::PgPool;

use super::InvalidFilter;
use crate::db::Param;
use crate::models::{table_from_query, Block, Chart, ChartKind, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

const RANKS_BETWEEN: &str = r#"
    SELECT cr.rank, co.name, cr.movement, cr.points, cr.competitions_played, co.country
    FROM competitor_rankings cr
    JOIN competitors co ON cr.competitor_id = co.competitor_id
    WHERE cr.rank BETWEEN $1 AND $2
    ORDER BY cr.rank
"#;

const COLUMNS: [&str; 6] = ["rank", "name", "movement", "points", "competitions_played", "country"];

/// Closed rank interval picked on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRange {
    min: i32,
    max: i32,
}

impl RankRange {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 500;

    pub fn new(min: i32, max: i32) -> Result<Self, InvalidFilter> {
        if min < Self::MIN || max > Self::MAX {
            return Err(InvalidFilter::RankOutOfBounds { min, max });
        }
        if min > max {
            return Err(InvalidFilter::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, rank: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&rank)
    }
}

impl Default for RankRange {
    fn default() -> Self {
        Self { min: Self::MIN, max: Self::MAX }
    }
}

pub(super) async fn render(pool: &PgPool, range: RankRange) -> Result<View, ReportError> {
    let mut view = View::new(SectionKind::RankRange).with_filter(FilterWidget::Range {
        label: "Rank Range",
        min: RankRange::MIN,
        max: RankRange::MAX,
        step: 1,
        selected: (range.min, range.max),
    });

    view.push(Block::text(format!("Details of rank range: ({}, {})", range.min, range.max)));

    let table = table_from_query(pool, RANKS_BETWEEN, &COLUMNS, &[Param::from(range.min), Param::from(range.max)]).await?;
    let chart = Chart::from_table(ChartKind::Scatter, &table, "rank", "competitions_played")?;

    view.push(Block::table(table));
    view.push(Block::Chart(chart));
    Ok(view)
}
