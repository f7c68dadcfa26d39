//! Parser for ERV, a small indentation sensitive language describing
//! marketing email campaigns.

#[macro_use]
pub mod regex;

pub mod language;
pub mod parsing;
