pub mod arg_parser;
pub mod display;
pub mod pattern_parser;
pub mod utils;
