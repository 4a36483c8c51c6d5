pub mod clipboard;
pub mod contact;
pub mod contact_link;
pub mod counter;
pub mod hover;
pub mod keyboard;
pub mod nav;
pub mod reveal;
pub mod scroll;
