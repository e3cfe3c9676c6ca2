//! Distance-based ordering and filtering of listings

use crate::TravelQuoteError;
use crate::config::DisplayConfig;
use crate::geo::distance::haversine_distance_km;
use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// A listing to be placed relative to a reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceCandidate {
    pub id: String,
    /// `None` when the listing has no coordinates on record
    pub point: Option<GeoPoint>,
}

impl DistanceCandidate {
    pub fn new<S: Into<String>>(id: S, point: Option<GeoPoint>) -> Self {
        Self {
            id: id.into(),
            point,
        }
    }
}

/// Distance of one listing from the reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub entity_id: String,
    /// `None` when the listing's location is missing or invalid
    pub distance_km: Option<f64>,
}

impl DistanceResult {
    /// Distance badge such as `850 m` or `12.3 km`; `None` when unknown.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.label_with_scale(1)
    }

    /// Label using the configured kilometer precision
    #[must_use]
    pub fn display_label(&self, display: &DisplayConfig) -> Option<String> {
        self.label_with_scale(usize::try_from(display.distance_scale).unwrap_or(1))
    }

    /// Like [`DistanceResult::label`] with `scale` decimals on kilometers
    #[must_use]
    pub fn label_with_scale(&self, scale: usize) -> Option<String> {
        self.distance_km.map(|km| {
            let meters = (km * 1000.0).round();
            if meters < 1000.0 {
                format!("{meters:.0} m")
            } else {
                format!("{km:.scale$} km")
            }
        })
    }
}

/// Geographic ordering for listing views
pub struct DistanceSorter;

impl DistanceSorter {
    /// See [`haversine_distance_km`]
    pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> crate::Result<f64> {
        haversine_distance_km(a, b)
    }

    /// Compute each entity's distance from `reference` and sort ascending.
    ///
    /// Entities without a usable location come last with `distance_km = None`.
    /// The sort is stable: ties and unknowns keep their input order. An
    /// invalid reference fails with [`TravelQuoteError::InvalidCoordinate`].
    #[tracing::instrument(name = "sort_by_distance", level = "debug", skip(entities), fields(entity_count = entities.len()))]
    pub fn sort_by_distance(
        reference: &GeoPoint,
        entities: &[DistanceCandidate],
    ) -> crate::Result<Vec<DistanceResult>> {
        let reference = reference.validated()?;

        let mut results: Vec<DistanceResult> = entities
            .iter()
            .map(|entity| DistanceResult {
                entity_id: entity.id.clone(),
                distance_km: Self::distance_or_unknown(&reference, entity),
            })
            .collect();

        results.sort_by(Self::compare_results);

        debug!(
            "Sorted {} entities, {} without distance",
            results.len(),
            results.iter().filter(|r| r.distance_km.is_none()).count()
        );

        Ok(results)
    }

    /// Keep entities whose known distance is at most `max_km`.
    ///
    /// Unknown distances are dropped. `max_km` must be a positive number.
    pub fn filter_within_radius(
        results: &[DistanceResult],
        max_km: f64,
    ) -> crate::Result<Vec<DistanceResult>> {
        if !max_km.is_finite() || max_km <= 0.0 {
            return Err(TravelQuoteError::invalid_argument(format!(
                "radius must be a positive number of kilometers, got {max_km}"
            )));
        }

        Ok(results
            .iter()
            .filter(|result| result.distance_km.is_some_and(|km| km <= max_km))
            .cloned()
            .collect())
    }

    /// Sort then filter in one call, as the nearby-listings view does
    pub fn nearby(
        reference: &GeoPoint,
        entities: &[DistanceCandidate],
        max_km: f64,
    ) -> crate::Result<Vec<DistanceResult>> {
        let sorted = Self::sort_by_distance(reference, entities)?;
        Self::filter_within_radius(&sorted, max_km)
    }

    fn distance_or_unknown(reference: &GeoPoint, entity: &DistanceCandidate) -> Option<f64> {
        let point = entity.point?;
        match haversine_distance_km(reference, &point) {
            Ok(distance) => Some(distance),
            Err(e) => {
                warn!("Treating distance of {} as unknown: {}", entity.id, e);
                None
            }
        }
    }

    fn compare_results(a: &DistanceResult, b: &DistanceResult) -> Ordering {
        match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kathmandu() -> GeoPoint {
        GeoPoint::new(27.7172, 85.3240).unwrap()
    }

    fn candidate(id: &str, latitude: f64, longitude: f64) -> DistanceCandidate {
        DistanceCandidate::new(id, Some(GeoPoint::new_unchecked(latitude, longitude)))
    }

    fn ids(results: &[DistanceResult]) -> Vec<&str> {
        results.iter().map(|r| r.entity_id.as_str()).collect()
    }

    #[test]
    fn test_sort_ascending_with_unknowns_last() {
        let entities = vec![
            DistanceCandidate::new("no-location", None),
            candidate("pokhara", 28.2096, 83.9856),
            candidate("broken", 123.0, 85.0),
            candidate("thamel", 27.7154, 85.3123),
            candidate("here", 27.7172, 85.3240),
        ];

        let results = DistanceSorter::sort_by_distance(&kathmandu(), &entities).unwrap();

        assert_eq!(
            ids(&results),
            vec!["here", "thamel", "pokhara", "no-location", "broken"]
        );
        assert_eq!(results[0].distance_km, Some(0.0));
        assert!(results[3].distance_km.is_none());
        assert!(results[4].distance_km.is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let entities = vec![
            candidate("b", 27.7172, 85.3240),
            candidate("a", 27.7172, 85.3240),
            candidate("c", 27.7172, 85.3240),
        ];
        let results = DistanceSorter::sort_by_distance(&kathmandu(), &entities).unwrap();
        assert_eq!(ids(&results), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_invalid_reference() {
        let entities = vec![candidate("here", 27.7172, 85.3240)];
        let result =
            DistanceSorter::sort_by_distance(&GeoPoint::new_unchecked(f64::NAN, 0.0), &entities);
        assert!(matches!(
            result,
            Err(TravelQuoteError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_filter_within_radius() {
        let results = vec![
            DistanceResult {
                entity_id: "near".to_string(),
                distance_km: Some(1.2),
            },
            DistanceResult {
                entity_id: "edge".to_string(),
                distance_km: Some(5.0),
            },
            DistanceResult {
                entity_id: "far".to_string(),
                distance_km: Some(5.001),
            },
            DistanceResult {
                entity_id: "unknown".to_string(),
                distance_km: None,
            },
        ];

        let filtered = DistanceSorter::filter_within_radius(&results, 5.0).unwrap();
        assert_eq!(ids(&filtered), vec!["near", "edge"]);
    }

    #[test]
    fn test_filter_rejects_bad_radius() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = DistanceSorter::filter_within_radius(&[], radius);
            assert!(
                matches!(result, Err(TravelQuoteError::InvalidArgument { .. })),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_nearby() {
        let entities = vec![
            candidate("pokhara", 28.2096, 83.9856),
            candidate("thamel", 27.7154, 85.3123),
            DistanceCandidate::new("no-location", None),
        ];
        let results = DistanceSorter::nearby(&kathmandu(), &entities, 5.0).unwrap();
        assert_eq!(ids(&results), vec!["thamel"]);
    }

    #[test]
    fn test_labels() {
        let near = DistanceResult {
            entity_id: "near".to_string(),
            distance_km: Some(0.85),
        };
        assert_eq!(near.label().as_deref(), Some("850 m"));

        let far = DistanceResult {
            entity_id: "far".to_string(),
            distance_km: Some(142.391),
        };
        assert_eq!(far.label().as_deref(), Some("142.4 km"));
        assert_eq!(far.label_with_scale(3).as_deref(), Some("142.391 km"));

        let display = DisplayConfig {
            distance_scale: 2,
            ..DisplayConfig::default()
        };
        assert_eq!(far.display_label(&display).as_deref(), Some("142.39 km"));

        let unknown = DistanceResult {
            entity_id: "unknown".to_string(),
            distance_km: None,
        };
        assert_eq!(unknown.label(), None);
    }

    #[rstest]
    #[case(0.9994, "999 m")]
    #[case(0.9996, "1.0 km")]
    #[case(0.99999, "1.0 km")]
    #[case(1.0, "1.0 km")]
    #[case(0.0004, "0 m")]
    fn test_labels_near_one_kilometer(#[case] km: f64, #[case] expected: &str) {
        let result = DistanceResult {
            entity_id: "edge".to_string(),
            distance_km: Some(km),
        };
        assert_eq!(result.label().as_deref(), Some(expected));
    }
}
