pub mod section_heading;
pub mod stat_card;
pub mod toast;
