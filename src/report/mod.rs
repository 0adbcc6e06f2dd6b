mod aggregator;
mod renderer;

pub use aggregator::{aggregate, monthly_breakdown, Aggregate, Filter};
pub use renderer::{bar, bar_units, render_month_graph, render_summary, render_table, render_year_graph};
