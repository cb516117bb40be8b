use crate::api::types::{DashboardControls, PayloadSliderConfig, SiteOption};
use crate::core::domain::ALL_SITES;
use crate::store::RecordStore;

/// Label shown for the all-sites selector entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Payload slider domain: fixed 0-10000 kg in 1000 kg steps, with tick marks
/// every 2500 kg. The domain is part of the dashboard layout contract and is
/// independent of the data; only the default value is data-derived.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
pub const PAYLOAD_SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10_000.0];

/// Build the control surface for the rendering collaborator: the site
/// selector options (`ALL` first, then every distinct site in first-seen
/// order) and the payload slider defaulted to the observed payload bounds.
pub fn dashboard_controls(store: &RecordStore) -> DashboardControls {
    let mut site_options = vec![SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    }];
    site_options.extend(store.launch_sites().into_iter().map(|site| SiteOption {
        label: site.clone(),
        value: site,
    }));

    DashboardControls {
        site_options,
        payload_slider: PayloadSliderConfig {
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            marks: PAYLOAD_SLIDER_MARKS.to_vec(),
            value: store.payload_bounds(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::LaunchRecord;

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: "v1.0".to_string(),
            outcome_class: 1,
        }
    }

    #[test]
    fn test_selector_options_start_with_all() {
        let store = RecordStore::new(vec![
            record("CCAFS LC-40", 2500.0),
            record("KSC LC-39A", 5300.0),
            record("CCAFS LC-40", 600.0),
        ])
        .unwrap();
        let controls = dashboard_controls(&store);

        let values: Vec<&str> = controls
            .site_options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(controls.site_options[0].label, "All Sites");
    }

    #[test]
    fn test_slider_defaults_to_data_bounds() {
        let store = RecordStore::new(vec![
            record("CCAFS LC-40", 2500.0),
            record("KSC LC-39A", 5300.0),
        ])
        .unwrap();
        let controls = dashboard_controls(&store);

        let slider = &controls.payload_slider;
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10_000.0);
        assert_eq!(slider.step, 1_000.0);
        assert_eq!(slider.marks, vec![0.0, 2500.0, 5000.0, 7500.0, 10_000.0]);
        assert_eq!(slider.value, (2500.0, 5300.0));
    }
}
