// src/sections/competitor_details.rs

use sqlx::PgPool;

use super::resolve_selection;
use crate::db::{self, Param};
use crate::models::{table_from_query, Block, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

const COMPETITOR_NAMES: &str = "SELECT name FROM competitors ORDER BY name ASC";

const COMPETITOR_BY_NAME: &str = r#"
    SELECT co.name, cr.rank, cr.movement, cr.points, cr.competitions_played, co.country
    FROM competitors co
    JOIN competitor_rankings cr ON cr.competitor_id = co.competitor_id
    WHERE co.name = $1
"#;

const COLUMNS: [&str; 6] = ["name", "rank", "movement", "points", "competitions_played", "country"];

pub(super) async fn render(pool: &PgPool, requested: Option<String>) -> Result<View, ReportError> {
    let options = db::fetch_column(pool, COMPETITOR_NAMES, &[]).await?;
    let selected = resolve_selection(&options, requested);

    let mut view = View::new(SectionKind::CompetitorDetails).with_filter(FilterWidget::Select {
        param: "name",
        label: "Select Competitor Name",
        options,
        selected: selected.clone(),
    });
    view.push(Block::text("Select a competitor from the sidebar to view their details."));

    let Some(name) = selected else {
        return Ok(view);
    };

    view.push(Block::text(format!("Details of competitor: {name}")));
    let table = table_from_query(pool, COMPETITOR_BY_NAME, &COLUMNS, &[Param::from(name)]).await?;
    view.push(Block::table(table));
    Ok(view)
}
