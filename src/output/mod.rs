//! Terminal output formatting
//!
//! Plain-text report rendering and colored terminal display.

pub mod display;
pub mod formatters;

pub use display::{
    print_experiment_results, print_report, print_session_banner, print_simulation_report,
    progress_bar,
};
pub use formatters::{render_machine, render_text};
