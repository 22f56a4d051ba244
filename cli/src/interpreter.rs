use colored::Colorize;
use error_stack::ResultExt;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use application::service::{BookingService, InstrumentListService, TerminationService};
use application::transfer::{CreateRentalDto, ListAvailableDto, TerminateRentalDto};
use kernel::KernelError;

use crate::command::Command;
use crate::display;
use crate::module::AppModule;

/// Blocking read-eval loop: every failed operation is reported and the loop
/// keeps going.
pub struct Interpreter {
    module: AppModule,
}

impl Interpreter {
    pub fn new(module: AppModule) -> Self {
        Self { module }
    }

    pub async fn run(self) -> error_stack::Result<(), KernelError> {
        let mut editor = DefaultEditor::new().change_context(KernelError::Internal)?;
        println!("Instrument rental desk. Type 'help' for commands.");

        loop {
            let line = match editor.readline("> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    return Err(error).change_context(KernelError::Internal);
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let _ = editor.add_history_entry(line);

            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => display::print_help(),
                Ok(command) => self.dispatch(command).await,
                Err(message) => println!("{}", message.yellow()),
            }
        }
        Ok(())
    }

    async fn dispatch(&self, command: Command) {
        let outcome = match command {
            Command::List { start, end, kind } => self
                .module
                .list_available(ListAvailableDto { start, end, kind })
                .await
                .map(|instruments| display::print_instruments(&instruments)),
            Command::Rent {
                student_id,
                instrument_id,
                start,
                end,
                delivery,
                notes,
            } => self
                .module
                .book_rental(CreateRentalDto {
                    student_id,
                    instrument_id,
                    start,
                    end,
                    delivery,
                    notes,
                })
                .await
                .map(|rental| {
                    println!(
                        "{}",
                        format!(
                            "Rental made: instrument {} for student {} at {}",
                            rental.instrument_id, rental.student_id, rental.price
                        )
                        .green()
                    )
                }),
            Command::Terminate {
                student_id,
                instrument_id,
                start,
            } => self
                .module
                .terminate_rental(TerminateRentalDto {
                    student_id,
                    instrument_id,
                    start,
                })
                .await
                .map(|()| println!("{}", "The rental was terminated".green())),
            Command::Help | Command::Quit => unreachable!("handled by the loop"),
        };

        if let Err(report) = outcome {
            display::print_failure(&report);
        }
    }
}
