pub mod bilingual_toggle;
pub mod filters_sidebar;
pub mod header;
pub mod language_selector;
pub mod letter_grid;
pub mod letter_modal;
pub mod toast;
