pub mod expansion;
pub mod grid;
pub mod grouping;
pub mod loader;
pub mod logic;
pub mod totals;
pub mod viewport;
