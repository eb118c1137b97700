pub mod kpi_card;
pub mod quantity_table;
pub mod toast;
