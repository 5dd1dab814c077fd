pub mod column_filter;
pub mod pagination_controls;
pub mod side_sheet;
pub mod stat_card;
