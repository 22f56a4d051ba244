use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use error_stack::Report;

use application::transfer::RentalInstrumentDto;
use kernel::KernelError;

pub(crate) fn print_instruments(instruments: &[RentalInstrumentDto]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID",
        "Instrument",
        "Category",
        "Model",
        "Monthly price",
        "Months",
        "Price",
    ]);
    for instrument in instruments {
        table.add_row(vec![
            Cell::new(instrument.id),
            Cell::new(&instrument.name),
            Cell::new(&instrument.category),
            Cell::new(&instrument.model),
            Cell::new(instrument.monthly_price),
            Cell::new(instrument.months),
            Cell::new(instrument.total_price),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_help() {
    println!("LIST:      lists instruments free for a period, optionally one type");
    println!("  list 2022-01-16 2022-05-16 guitar");
    println!("RENT:      books an instrument for a student");
    println!("  rent 18 16 2022-01-16 2022-05-16 [delivery] [notes...]");
    println!("TERMINATE: ends a specific rental");
    println!("  terminate 18 16 2022-01-16");
    println!("QUIT:      leaves the desk");
}

/// Phrases the failure for the desk operator; the full report goes to the log.
pub(crate) fn print_failure(report: &Report<KernelError>) {
    let message = match report.current_context() {
        KernelError::Validation => "The request is invalid",
        KernelError::Lookup => "No such student",
        KernelError::InstrumentUnavailable => {
            "That instrument is not available for the requested period"
        }
        KernelError::RentalLimitExceeded => "The student is already at the rental limit",
        KernelError::NotFound => "No matching rental to terminate",
        KernelError::Timeout => "The database timed out",
        KernelError::Storage => "The database reported an error",
        KernelError::Internal => "Internal error",
    };
    println!("{}", message.red());
    tracing::error!("operation failed: {report:?}");
}
