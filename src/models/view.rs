// src/models/view.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::table::{Table, TableError};
use crate::sections::SectionKind;

/// Everything a client needs to draw one section.
#[derive(Debug, Serialize)]
pub struct View {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub section: SectionKind,
    pub title: &'static str,
    pub filter: Option<FilterWidget>,
    pub blocks: Vec<Block>,
}

impl View {
    pub fn new(section: SectionKind) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            section,
            title: section.title(),
            filter: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: FilterWidget) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table { table, .. } => Some(table),
            _ => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Notice { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FilterWidget {
    Select {
        param: &'static str,
        label: &'static str,
        options: Vec<String>,
        selected: Option<String>,
    },
    Range {
        label: &'static str,
        min: i32,
        max: i32,
        step: i32,
        selected: (i32, i32),
    },
    Radio {
        param: &'static str,
        label: &'static str,
        options: Vec<String>,
        selected: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text { body: String },
    Subheading { body: String },
    Table { table: Table },
    Chart(Chart),
    Notice { level: NoticeLevel, message: String },
}

impl Block {
    pub fn text(body: impl Into<String>) -> Self {
        Block::Text { body: body.into() }
    }

    pub fn subheading(body: impl Into<String>) -> Self {
        Block::Subheading { body: body.into() }
    }

    pub fn table(table: Table) -> Self {
        Block::Table { table }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Block::Notice { level: NoticeLevel::Warning, message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Scatter,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub chart: ChartKind,
    pub x: String,
    pub y: String,
    pub points: Vec<(Value, Value)>,
}

impl Chart {
    /// Pairs the `x` and `y` columns of `table` row by row.
    pub fn from_table(chart: ChartKind, table: &Table, x: &str, y: &str) -> Result<Self, TableError> {
        let xs = table.column(x)?;
        let ys = table.column(y)?;
        let points = xs.into_iter().zip(ys).map(|(a, b)| (a.clone(), b.clone())).collect();
        Ok(Self { chart, x: x.to_owned(), y: y.to_owned(), points })
    }
}
