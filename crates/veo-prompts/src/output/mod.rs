//! Result writers: plain-text report and CSV export
//!
//! Both iterate paragraph numbers in ascending order and overwrite the
//! target file.

mod csv_export;
mod report;

pub use csv_export::{write_csv, write_csv_to, CSV_HEADER};
pub use report::{render_txt_report, write_txt_report};
