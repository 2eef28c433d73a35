/// Data layer: parsing, loading, caching, filtering and aggregation.
///
/// Architecture:
/// ```text
///   bakerysales.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  rename columns, parse prices/dates, drop zero sales
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  load once, share Arc<SalesTable>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep selected products
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  metrics + sales by product
///   └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parse;
