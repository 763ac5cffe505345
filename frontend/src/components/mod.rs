pub mod preview_page;
pub mod wizard;
