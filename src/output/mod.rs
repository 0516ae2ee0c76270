//! Output formatting module.
//!
//! All console presentation lives here; the pipeline only decides what to
//! say.

mod plain;

pub use plain::{
    format_entry, outcome_style, print_banner, print_error, print_info, print_report,
    print_warning,
};
