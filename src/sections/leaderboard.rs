// src/sections/leaderboard.rs

use sqlx::PgPool;

use crate::models::{table_from_query, Block, Chart, ChartKind, ReportError, View};
use crate::sections::SectionKind;

// Ties on rank can push more than five rows under `rank <= 5`; LIMIT keeps it a top five.
const TOP_FIVE: &str = r#"
    SELECT cr.rank, c.name, cr.points
    FROM competitor_rankings cr
    JOIN competitors c ON cr.competitor_id = c.competitor_id
    WHERE cr.rank <= 5
    ORDER BY cr.rank ASC, cr.points DESC
    LIMIT 5
"#;

const COLUMNS: [&str; 3] = ["Rank", "Name", "Points"];

pub(super) async fn render(pool: &PgPool) -> Result<View, ReportError> {
    let mut view = View::new(SectionKind::Leaderboard);

    let table = table_from_query(pool, TOP_FIVE, &COLUMNS, &[]).await?;
    let chart = Chart::from_table(ChartKind::Area, &table, "Rank", "Points")?;

    view.push(Block::subheading("Top 5 Rank:"));
    view.push(Block::table(table));
    view.push(Block::Chart(chart));
    Ok(view)
}
