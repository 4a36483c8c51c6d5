pub mod anchor;
pub mod code_block;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod project_card;
pub mod reveal;
pub mod stats;
