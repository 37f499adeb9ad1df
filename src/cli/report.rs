//! Report CLI commands

use crate::display::format_crosstab;
use crate::error::PricingResult;
use crate::ledger::Ledger;
use crate::storage::KeyValueStore;

/// Print the service/provider/price by receiving unit summary
pub fn handle_crosstab_command<S: KeyValueStore>(ledger: &Ledger<S>) -> PricingResult<()> {
    println!("{}", format_crosstab(&ledger.crosstab()));
    Ok(())
}
