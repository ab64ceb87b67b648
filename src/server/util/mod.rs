pub mod parse;
pub mod shuffle;
