// src/sections/country_filter.rs

use sqlx::PgPool;

use super::resolve_selection;
use crate::db::{self, Param};
use crate::models::{table_from_query, Block, FilterWidget, ReportError, View};
use crate::sections::SectionKind;

const COUNTRIES: &str = "SELECT DISTINCT country FROM competitors ORDER BY country ASC";

const COUNTRY_SUMMARY: &str = r#"
    SELECT COUNT(co.competitor_id) AS total_competitors,
           AVG(cr.points)::float8 AS average_points,
           co.country
    FROM competitor_rankings cr
    JOIN competitors co ON cr.competitor_id = co.competitor_id
    WHERE co.country = $1
    GROUP BY co.country
"#;

const COUNTRY_COMPETITORS: &str = r#"
    SELECT co.name, cr.points, co.country
    FROM competitor_rankings cr
    JOIN competitors co ON cr.competitor_id = co.competitor_id
    WHERE co.country = $1
"#;

const SUMMARY_COLUMNS: [&str; 3] = ["Total Competitors", "Average Points", "Country"];
const DETAIL_COLUMNS: [&str; 3] = ["Name", "Points", "Country"];

pub const NO_DATA: &str = "No data available for the selected country.";
pub const NO_COMPETITORS: &str = "No competitors found for the selected country.";

pub(super) async fn render(pool: &PgPool, requested: Option<String>) -> Result<View, ReportError> {
    let options = db::fetch_column(pool, COUNTRIES, &[]).await?;
    let selected = resolve_selection(&options, requested);

    let mut view = View::new(SectionKind::CountryFilter).with_filter(FilterWidget::Select {
        param: "country",
        label: "Select Country",
        options,
        selected: selected.clone(),
    });

    let Some(country) = selected else {
        return Ok(view);
    };
    view.push(Block::text(format!("Details for Country: {country}")));

    let params = [Param::from(country)];
    let summary = table_from_query(pool, COUNTRY_SUMMARY, &SUMMARY_COLUMNS, &params).await?;
    if summary.is_empty() {
        view.push(Block::warning(NO_DATA));
        return Ok(view);
    }
    view.push(Block::table(summary));

    let details = table_from_query(pool, COUNTRY_COMPETITORS, &DETAIL_COLUMNS, &params).await?;
    if details.is_empty() {
        view.push(Block::warning(NO_COMPETITORS));
    } else {
        view.push(Block::subheading("Competitor Details"));
        view.push(Block::table(details));
    }
    Ok(view)
}
