pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, is_quiet, success};
pub use table::{actors_table, stats_table};
pub use theme::{theme, Theme};
