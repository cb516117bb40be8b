use crate::api::types::{
    ChartData, ChartDescriptor, ChartEncoding, ChartKind, ScatterPoint, BOOSTER_CATEGORY_FIELD,
    OUTCOME_CLASS_FIELD, PAYLOAD_MASS_FIELD,
};
use crate::core::domain::{LaunchRecord, PayloadRange, SiteSelection};
use crate::transformations::filtering;

/// Title of the all-sites payload scatter. Exact string contract.
pub const ALL_SITES_SCATTER_TITLE: &str =
    "Correlation Between Payload and Success for All Sites";

/// Build the payload/outcome scatter descriptor.
///
/// No aggregation: every record surviving the payload-range filter (and the
/// site filter, for a specific site) contributes one point. Payload mass on
/// x, outcome class on y, booster version category as the point color.
pub fn payload_scatter(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ChartDescriptor {
    let filtered = filtering::filter_records(records, selection, range);
    let points = filtered
        .into_iter()
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome_class,
            booster_version_category: record.booster_version_category,
        })
        .collect();

    let title = match selection {
        SiteSelection::All => ALL_SITES_SCATTER_TITLE.to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation Between Payload and Success for {}", site)
        }
    };

    ChartDescriptor {
        kind: ChartKind::Scatter,
        title,
        data: ChartData::Scatter(points),
        encoding: ChartEncoding::scatter(
            PAYLOAD_MASS_FIELD,
            OUTCOME_CLASS_FIELD,
            BOOSTER_CATEGORY_FIELD,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, category: &str, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: category.to_string(),
            outcome_class: class,
        }
    }

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            record("KSC LC-39A", 5000.0, "v1.0", 1),
            record("KSC LC-39A", 3000.0, "v1.0", 0),
            record("CCAFS", 2000.0, "v1.1", 1),
        ]
    }

    #[test]
    fn test_all_sites_scatter() {
        let descriptor = payload_scatter(
            &sample_records(),
            &SiteSelection::All,
            &PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(descriptor.kind, ChartKind::Scatter);
        assert_eq!(
            descriptor.title,
            "Correlation Between Payload and Success for All Sites"
        );
        assert_eq!(descriptor.encoding.x_field.as_deref(), Some("payloadMassKg"));
        assert_eq!(descriptor.encoding.y_field.as_deref(), Some("outcomeClass"));
        assert_eq!(
            descriptor.encoding.color_field.as_deref(),
            Some("boosterVersionCategory")
        );
        assert_eq!(descriptor.data.len(), 3);
    }

    #[test]
    fn test_single_site_scatter() {
        let descriptor = payload_scatter(
            &sample_records(),
            &SiteSelection::from_value("KSC LC-39A"),
            &PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(
            descriptor.title,
            "Correlation Between Payload and Success for KSC LC-39A"
        );
        match &descriptor.data {
            ChartData::Scatter(points) => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].payload_mass_kg, 5000.0);
                assert_eq!(points[1].payload_mass_kg, 3000.0);
            }
            other => panic!("expected scatter data, got {:?}", other),
        }
    }

    #[test]
    fn test_range_narrows_points() {
        let descriptor = payload_scatter(
            &sample_records(),
            &SiteSelection::All,
            &PayloadRange::new(4000.0, 6000.0),
        );
        match &descriptor.data {
            ChartData::Scatter(points) => {
                assert_eq!(points.len(), 1);
                assert_eq!(points[0].payload_mass_kg, 5000.0);
            }
            other => panic!("expected scatter data, got {:?}", other),
        }
    }

    #[test]
    fn test_boundary_payload_is_included() {
        let descriptor = payload_scatter(
            &sample_records(),
            &SiteSelection::All,
            &PayloadRange::new(2000.0, 3000.0),
        );
        match &descriptor.data {
            ChartData::Scatter(points) => {
                let payloads: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
                assert_eq!(payloads, vec![3000.0, 2000.0]);
            }
            other => panic!("expected scatter data, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_result_is_a_valid_chart() {
        let descriptor = payload_scatter(
            &sample_records(),
            &SiteSelection::from_value("Boca Chica"),
            &PayloadRange::new(0.0, 10000.0),
        );
        assert!(descriptor.data.is_empty());
        assert_eq!(descriptor.kind, ChartKind::Scatter);
    }
}
