pub mod wordcard;

pub use wordcard::{hashtags, parse_file, parse_str, ParsedCard};
