pub mod info_panel;
pub mod page_meta;
pub mod policy_section;
pub mod preference_row;
