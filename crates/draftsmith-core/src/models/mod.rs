pub mod brief;
pub mod output;
pub mod snippet;
