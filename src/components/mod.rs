//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod filter_bar;
pub mod bar_chart;
pub mod pie_chart;
pub mod scatter_plot;
pub mod heatmap;

pub use nav::Nav;
pub use filter_bar::FilterBar;
pub use bar_chart::BarChart;
pub use pie_chart::PieChart;
pub use scatter_plot::ScatterPlot;
pub use heatmap::Heatmap;
