// src/sections/venues.rs

use sqlx::PgPool;

use super::resolve_selection;
use crate::db::{self, Param};
use crate::models::{table_from_query, Block, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

const VENUE_COUNTRIES: &str = "SELECT DISTINCT country_name FROM venues ORDER BY country_name";

const VENUES_IN_COUNTRY: &str = r#"
    SELECT v.venue_id, v.venue_name, c.complex_name, v.city_name
    FROM venues v
    JOIN complexes c ON v.complex_id = c.complex_id
    WHERE v.country_name = $1
    LIMIT 500
"#;

const COLUMNS: [&str; 4] = ["venue_id", "venue_name", "complex", "city"];

pub(super) async fn render(pool: &PgPool, requested: Option<String>) -> Result<View, ReportError> {
    let options = db::fetch_column(pool, VENUE_COUNTRIES, &[]).await?;
    let selected = resolve_selection(&options, requested);

    let mut view = View::new(SectionKind::VenuesByCountry).with_filter(FilterWidget::Select {
        param: "country",
        label: "Venues by country",
        options,
        selected: selected.clone(),
    });

    if let Some(country) = selected {
        view.push(Block::text(format!("Details of venues: {country}")));
        let table = table_from_query(pool, VENUES_IN_COUNTRY, &COLUMNS, &[Param::from(country)]).await?;
        view.push(Block::table(table));
    }
    Ok(view)
}
