// src/models/mod.rs

pub mod table;
pub mod view;

pub use table::{table_from_query, ReportError, Table, TableError};
pub use view::{Block, Chart, ChartKind, FilterWidget, NoticeLevel, View};
