//! Charge CLI commands
//!
//! Implements the add/edit/delete/list/show commands. Charges are addressed
//! by the 1-based row number printed by `list`.

use clap::{Args, Subcommand};

use crate::display::{format_charge_details, format_charge_list};
use crate::error::{PricingError, PricingResult};
use crate::ledger::Ledger;
use crate::models::ChargeInput;
use crate::storage::KeyValueStore;

/// Form fields for a charge. Omitted fields keep their previous value on
/// edit and are blank on add.
#[derive(Args, Debug, Clone, Default)]
pub struct ChargeArgs {
    /// Charge date (YYYY-MM-DD); today if left blank
    #[arg(short, long)]
    pub date: Option<String>,

    /// Providing unit
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Service name
    #[arg(short, long)]
    pub service: Option<String>,

    /// Unit price; blank or unparsable means 0
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Receiving unit
    #[arg(short, long)]
    pub receiver: Option<String>,

    /// Quantity
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
}

impl ChargeArgs {
    /// Overlay the given fields onto `base`
    pub fn apply_to(self, base: ChargeInput) -> ChargeInput {
        ChargeInput {
            date: self.date.unwrap_or(base.date),
            providing_unit: self.provider.unwrap_or(base.providing_unit),
            service_name: self.service.unwrap_or(base.service_name),
            unit_price: self.price.unwrap_or(base.unit_price),
            receiving_unit: self.receiver.unwrap_or(base.receiving_unit),
            quantity: self.quantity.unwrap_or(base.quantity),
        }
    }
}

/// Charge subcommands
#[derive(Subcommand, Debug)]
pub enum ChargeCommands {
    /// Record a new charge
    Add(ChargeArgs),

    /// Change fields of an existing charge
    Edit {
        /// Row number as shown by `list`
        number: usize,
        #[command(flatten)]
        fields: ChargeArgs,
    },

    /// Delete a charge
    #[command(alias = "rm")]
    Delete {
        /// Row number as shown by `list`
        number: usize,
    },

    /// List all charges in entry order
    #[command(alias = "ls")]
    List,

    /// Show one charge in detail
    Show {
        /// Row number as shown by `list`
        number: usize,
    },
}

/// Handle charge commands
pub fn handle_charge_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: ChargeCommands,
) -> PricingResult<()> {
    match cmd {
        ChargeCommands::Add(fields) => {
            let record = ledger.submit(&fields.apply_to(ChargeInput::default()))?;
            println!("Added charge #{}: {}", ledger.records().len(), record);
        }

        ChargeCommands::Edit { number, fields } => {
            let index = position(number, ledger.records().len())?;
            let current = ChargeInput::from_record(&ledger.records()[index]);

            let record = ledger.edit(index, &fields.apply_to(current))?;
            println!("Updated charge #{}: {}", number, record);
        }

        ChargeCommands::Delete { number } => {
            let index = position(number, ledger.records().len())?;
            let removed = ledger.delete(index)?;
            println!("Deleted charge #{}: {}", number, removed);
        }

        ChargeCommands::List => {
            println!("{}", format_charge_list(ledger.records()));
        }

        ChargeCommands::Show { number } => {
            let index = position(number, ledger.records().len())?;
            print!("{}", format_charge_details(number, &ledger.records()[index]));
        }
    }

    Ok(())
}

/// Convert a 1-based row number into a store index
fn position(number: usize, len: usize) -> PricingResult<usize> {
    if number == 0 || number > len {
        return Err(PricingError::IndexOutOfRange { index: number, len });
    }
    Ok(number - 1)
}
