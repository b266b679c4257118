use api::RecentTransaction;

/// `{type} — {name}` for each transaction, in the order given.
pub fn activity_lines(transactions: &[RecentTransaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| format!("{} — {}", t.object.r#type, t.object.name))
        .collect()
}
