use crate::api::types::{
    ChartData, ChartDescriptor, ChartEncoding, ChartKind, COUNT_FIELD, LAUNCH_SITE_FIELD,
    OUTCOME_CLASS_FIELD,
};
use crate::core::domain::{LaunchRecord, SiteSelection};
use crate::transformations::{aggregation, filtering};

/// Title of the all-sites success pie. Exact string contract.
pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches By Site";

/// Build the success pie descriptor for the given site selection.
///
/// With [`SiteSelection::All`] the pie shows one slice per site, sized by
/// that site's successful launch count. With a specific site it shows the
/// success/failure breakdown of that site's launches. The pie reads only the
/// site input; the payload range never affects it.
pub fn success_pie(records: &[LaunchRecord], selection: &SiteSelection) -> ChartDescriptor {
    match selection {
        SiteSelection::All => ChartDescriptor {
            kind: ChartKind::Pie,
            title: ALL_SITES_PIE_TITLE.to_string(),
            data: ChartData::Pie(aggregation::success_count_by_site(records)),
            encoding: ChartEncoding::pie(LAUNCH_SITE_FIELD, COUNT_FIELD),
        },
        SiteSelection::Site(site) => {
            let site_records = filtering::filter_by_site(records, selection);
            ChartDescriptor {
                kind: ChartKind::Pie,
                title: format!("Total Launches for site {} (1=Success, 0=Failure)", site),
                data: ChartData::Pie(aggregation::outcome_breakdown(&site_records)),
                encoding: ChartEncoding::pie(OUTCOME_CLASS_FIELD, COUNT_FIELD),
            }
        }
    }
}
