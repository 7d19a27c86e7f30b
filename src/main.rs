use fairsplit::cli::{arg_parser, display};
use fairsplit::core::settlement;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (session, total_override) = arg_parser::parse_args()?;
    let receipt_total = total_override.unwrap_or(session.receipt.total);

    let expenses = settlement::settle(
        &session.receipt.items,
        &session.people,
        &session.allocations,
        Some(receipt_total),
    );

    display::display_settlement(
        &session.receipt.items,
        &expenses,
        Some(receipt_total),
        session.receipt.currency.as_deref(),
    );
    Ok(())
}
