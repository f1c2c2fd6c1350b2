// Page view-models served to the front end. Builders are pure; handlers fetch
// content and hand it to them.

pub mod featured;
pub mod grid;
pub mod handlers;
pub mod hero;
