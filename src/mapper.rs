//! Map N26 transactions to their YNAB counterpart.

use crate::{ConvertError, DestinationTransaction, MapError, SourceTransaction, DATE_FORMAT};

/// Build the YNAB memo for a transaction: its type, followed by the foreign-currency leg for FX
/// transactions, e.g: `Transfer | FX: 100.5USD @ 1.08`.
pub fn ynab_memo(tx: &SourceTransaction) -> Result<String, MapError> {
    if !tx.is_foreign_currency_transaction() {
        return Ok(tx.transaction_type.clone());
    }

    let missing = |missing: &'static str| MapError::IncompleteForeignLeg {
        currency: tx.foreign_currency.clone(),
        missing,
    };
    let amount = tx
        .amount_foreign_currency
        .ok_or_else(|| missing("foreign amount"))?;
    let rate = tx.exchange_rate.ok_or_else(|| missing("exchange rate"))?;

    Ok(format!(
        "{} | FX: {}{} @ {}",
        tx.transaction_type, amount, tx.foreign_currency, rate
    ))
}

/// Convert a single transaction.
pub fn convert_transaction(tx: SourceTransaction) -> Result<DestinationTransaction, MapError> {
    let memo = ynab_memo(&tx)?;
    Ok(DestinationTransaction {
        date: tx.date.format(DATE_FORMAT).to_string(),
        payee: tx.recipient,
        memo,
        amount: tx.amount.to_string(),
    })
}

/// Convert all transactions, preserving their order. Rows are numbered from 1 in errors.
pub fn convert_transactions(
    transactions: Vec<SourceTransaction>,
) -> Result<Vec<DestinationTransaction>, ConvertError> {
    tracing::info!("Converting to YNAB transactions");
    transactions
        .into_iter()
        .zip(1..)
        .map(|(tx, row)| {
            convert_transaction(tx).map_err(|source| ConvertError::InvalidRecordState { row, source })
        })
        .collect()
}
