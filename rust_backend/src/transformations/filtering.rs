use crate::core::domain::{LaunchRecord, PayloadRange, SiteSelection};

/// Filter records by launch-site selection.
///
/// `SiteSelection::All` is the identity: every record survives. A site not
/// present in the data yields an empty result, not an error.
pub fn filter_by_site(records: &[LaunchRecord], selection: &SiteSelection) -> Vec<LaunchRecord> {
    match selection {
        SiteSelection::All => records.to_vec(),
        SiteSelection::Site(_) => records
            .iter()
            .filter(|record| selection.matches(record))
            .cloned()
            .collect(),
    }
}

/// Filter records by payload-mass range, inclusive on both ends.
///
/// A degenerate range (`low > high`) matches nothing.
pub fn filter_by_payload_range(records: &[LaunchRecord], range: &PayloadRange) -> Vec<LaunchRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .cloned()
        .collect()
}

/// Combined filter used by the scatter view: payload range first, then site.
pub fn filter_records(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Vec<LaunchRecord> {
    let in_range = filter_by_payload_range(records, range);
    filter_by_site(&in_range, selection)
}
