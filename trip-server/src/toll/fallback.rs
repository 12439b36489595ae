//! Deterministic distance-based toll estimation.
//!
//! Heuristic for long-distance highway trips in Brazil, used when the live
//! toll provider is unavailable or returns no usable cost data: roughly
//! R$12.50 per 100 km, applied only to routes longer than 200 km. This is
//! a documented approximation, not a real toll lookup; its output carries
//! the heuristic provenance flag so consumers can tell the difference.

use crate::cost::round2;
use crate::domain::TollLineItem;

/// Routes at or below this distance are assumed toll-free.
pub const FALLBACK_MIN_DISTANCE_KM: f64 = 200.0;

/// Estimated toll cost per 100 km.
pub const FALLBACK_RATE_PER_100_KM: f64 = 12.5;

/// Share of the estimate assigned to the first synthetic line item.
const FIRST_ITEM_SHARE: f64 = 0.6;

/// Estimate toll cost from distance alone.
///
/// Returns the total cost and exactly two synthetic line items splitting it
/// 60/40 (summing exactly to the total), or zero with no items for short
/// routes.
pub fn fallback_estimate(distance_km: f64) -> (f64, Vec<TollLineItem>) {
    if distance_km.is_nan() || distance_km <= FALLBACK_MIN_DISTANCE_KM {
        return (0.0, Vec::new());
    }

    let cost = round2(distance_km / 100.0 * FALLBACK_RATE_PER_100_KM);
    let first = round2(cost * FIRST_ITEM_SHARE);
    let second = round2(cost - first);

    let items = vec![
        TollLineItem {
            name: "Estimated Toll 1".to_string(),
            cost: first,
        },
        TollLineItem {
            name: "Estimated Toll 2".to_string(),
            cost: second,
        },
    ];

    (cost, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_route_is_toll_free() {
        for distance in [0.0, 50.0, 150.0, 199.99, 200.0] {
            let (cost, items) = fallback_estimate(distance);
            assert_eq!(cost, 0.0, "distance {distance}");
            assert!(items.is_empty());
        }
    }

    #[test]
    fn long_route_uses_the_rate() {
        let (cost, items) = fallback_estimate(430.0);
        assert_eq!(cost, 53.75);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Estimated Toll 1");
        assert_eq!(items[0].cost, 32.25);
        assert_eq!(items[1].name, "Estimated Toll 2");
        assert_eq!(items[1].cost, 21.5);
    }

    #[test]
    fn items_sum_exactly_to_cost() {
        for distance in [200.01, 250.0, 333.33, 430.0, 1234.56, 10000.0] {
            let (cost, items) = fallback_estimate(distance);
            assert_eq!(items.len(), 2);
            let sum = round2(items[0].cost + items[1].cost);
            assert_eq!(sum, cost, "distance {distance}");
        }
    }

    #[test]
    fn split_is_roughly_sixty_forty() {
        let (cost, items) = fallback_estimate(1000.0);
        assert!((items[0].cost / cost - 0.6).abs() < 0.01);
        assert!((items[1].cost / cost - 0.4).abs() < 0.01);
    }

    #[test]
    fn non_finite_distance_degrades_to_zero() {
        let (cost, items) = fallback_estimate(f64::NAN);
        assert_eq!(cost, 0.0);
        assert!(items.is_empty());
    }
}
