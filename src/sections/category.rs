// src/sections/category.rs

use sqlx::PgPool;

use super::resolve_selection;
use crate::db::{self, Param};
use crate::models::{table_from_query, Block, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

const CATEGORY_NAMES: &str = "SELECT category_name FROM categories ORDER BY category_name";

const COMPETITIONS_IN_CATEGORY: &str = r#"
    SELECT co.competition_name AS competition
    FROM competitions co
    JOIN categories ca ON co.category_id = ca.category_id
    WHERE ca.category_name = $1
"#;

pub(super) async fn render(pool: &PgPool, requested: Option<String>) -> Result<View, ReportError> {
    let options = db::fetch_column(pool, CATEGORY_NAMES, &[]).await?;
    let selected = resolve_selection(&options, requested);

    let mut view = View::new(SectionKind::Category).with_filter(FilterWidget::Select {
        param: "category",
        label: "Select Category",
        options,
        selected: selected.clone(),
    });

    if let Some(category) = selected {
        view.push(Block::text(format!("Details of category: {category}")));
        let table = table_from_query(pool, COMPETITIONS_IN_CATEGORY, &["competition"], &[Param::from(category)]).await?;
        view.push(Block::table(table));
    }
    Ok(view)
}
