pub mod dictionary;
pub mod error;
pub mod menu;
pub mod source;
pub mod util;
