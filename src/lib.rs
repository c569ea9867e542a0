pub mod composing;
pub mod external;
pub mod formatting;
pub mod language;
pub mod parsing;
mod regex;
pub mod rendering;
pub mod settings;
pub mod workspace;
