pub mod balance_table;
pub mod prettyprint;
pub mod table;

pub use balance_table::{balance_table, format_btc, render_balances, total_btc};
pub use prettyprint::PrettyFormatter;
pub use table::Table;
