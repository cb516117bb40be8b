use crate::core::domain::{AggregateRow, LaunchRecord};

/// Count successful launches per site.
///
/// Keeps only records with a successful outcome, then folds them into one
/// count per distinct site, emitted in first-seen site order. Sites with zero
/// successes are omitted entirely.
pub fn success_count_by_site(records: &[LaunchRecord]) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    for record in records.iter().filter(|r| r.is_success()) {
        match rows.iter_mut().find(|row| row.group_key == record.launch_site) {
            Some(row) => row.count += 1,
            None => rows.push(AggregateRow {
                group_key: record.launch_site.clone(),
                count: 1,
            }),
        }
    }
    rows
}

/// Count records per outcome class over an already-filtered record set.
///
/// Group keys are the class digits (`"1"` for success, `"0"` for failure),
/// emitted in first-seen order; a class absent from the input is omitted.
pub fn outcome_breakdown(records: &[LaunchRecord]) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    for record in records {
        let key = record.outcome_class.to_string();
        match rows.iter_mut().find(|row| row.group_key == key) {
            Some(row) => row.count += 1,
            None => rows.push(AggregateRow { group_key: key, count: 1 }),
        }
    }
    rows
}
