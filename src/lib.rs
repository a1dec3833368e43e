// Базовые модули
pub mod consts;
pub mod error;
pub mod span;
pub mod config;
pub mod util;   // src/util/mod.rs

// Реестр no-split спанов (папка с mod.rs)
pub mod registry; // src/registry/{mod,table,query}.rs

// Источник истины для таблиц + регенерация
pub mod schema;

// Отчёты для CLI/отладочных инструментов (serde)
pub mod report;

// Разбор аргументов и коды выхода `keyspan` (библиотечная часть CLI)
pub mod cli;

// Удобные реэкспорты
pub use config::{RegistryBuilder, RegistryConfig};
pub use error::{KeySpanError, Result};
pub use registry::{
    contains, find_containing, is_protected_split_key, local_max, meta2_key_max,
    spans_overlapping, Registry, SpanSet,
};
pub use span::{prefix_end, OwnedSpan, Span};
