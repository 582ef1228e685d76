pub mod chart_renderer;
pub mod forms;
pub mod header;
pub mod theme;
pub mod transaction_table;

pub use chart_renderer::*;
pub use forms::*;
pub use header::*;
pub use theme::*;
pub use transaction_table::*;
