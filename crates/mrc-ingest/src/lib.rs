//! Record ingestion: CSV loading into the table model.

mod csv_table;

pub use csv_table::read_csv_table;
