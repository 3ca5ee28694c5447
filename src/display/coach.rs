//! Plain-text digest of a snapshot for the AI coach prompt
//!
//! The coach chat embeds this digest as context ahead of the user's message.
//! Only the text is produced here; sending it anywhere is the caller's job.

use std::fmt::Write;

use super::currency::CurrencyFormat;
use crate::models::FinancialSnapshot;

/// Render the French digest of balances, goals and transactions
pub fn format_coach_context(snapshot: &FinancialSnapshot, fmt: &CurrencyFormat) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Voici vos informations financières actuelles :");
    let _ = writeln!(out);
    let _ = writeln!(out, "1. Situation globale :");
    let _ = writeln!(out, "   - Solde total : {}", fmt.format(snapshot.total_balance));
    let _ = writeln!(
        out,
        "   - Dépenses mensuelles : {}",
        fmt.format(snapshot.monthly_expenses)
    );
    let _ = writeln!(out, "   - Épargne : {}", fmt.format(snapshot.savings));
    let _ = writeln!(out, "   - Investissements : {}", fmt.format(snapshot.investments));
    let _ = writeln!(out);

    let _ = writeln!(out, "2. Objectifs financiers :");
    if snapshot.goals.is_empty() {
        let _ = writeln!(out, "   (aucun objectif)");
    }
    for goal in &snapshot.goals {
        let _ = writeln!(
            out,
            "   - {} : {}% ({} sur {}, reste {})",
            goal.name,
            goal.rounded_progress(),
            fmt.format(goal.current),
            fmt.format(goal.target),
            fmt.format(goal.remaining())
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "3. Transactions récentes :");
    if snapshot.transactions.is_empty() {
        let _ = writeln!(out, "   (aucune transaction)");
    }
    for txn in &snapshot.transactions {
        let _ = writeln!(
            out,
            "   - {} : {} ({}) - {}",
            txn.date,
            txn.description,
            fmt.format(txn.amount),
            txn.category
        );
    }

    out
}
