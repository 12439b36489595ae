//! Trip cost aggregation.
//!
//! Pure arithmetic over distance, fuel efficiency, fuel price and toll cost.
//! Callers are expected to validate vehicle parameters before invoking, but
//! `fuel_cost` guards the division anyway.

/// Errors from cost aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    /// Fuel efficiency was zero or negative.
    #[error("fuel efficiency must be greater than zero")]
    InvalidVehicleParameters,
}

/// Fuel cost for a trip: `(distance / efficiency) * price`.
pub fn fuel_cost(
    distance_km: f64,
    efficiency_km_per_unit: f64,
    price_per_unit: f64,
) -> Result<f64, CostError> {
    if efficiency_km_per_unit <= 0.0 {
        return Err(CostError::InvalidVehicleParameters);
    }
    Ok((distance_km / efficiency_km_per_unit) * price_per_unit)
}

/// Total trip cost: fuel plus tolls.
pub fn total_cost(fuel_cost: f64, toll_cost: f64) -> f64 {
    fuel_cost + toll_cost
}

/// Round a currency amount to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_cost_formula() {
        // 430 km at 12.5 km/l and 5.50 per liter
        let cost = fuel_cost(430.0, 12.5, 5.50).unwrap();
        assert_eq!(round2(cost), 189.2);
    }

    #[test]
    fn zero_distance_costs_nothing() {
        assert_eq!(fuel_cost(0.0, 12.5, 5.50).unwrap(), 0.0);
        assert_eq!(fuel_cost(0.0, 1.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_positive_efficiency() {
        assert_eq!(
            fuel_cost(100.0, 0.0, 5.0),
            Err(CostError::InvalidVehicleParameters)
        );
        assert_eq!(
            fuel_cost(100.0, -3.0, 5.0),
            Err(CostError::InvalidVehicleParameters)
        );
    }

    #[test]
    fn total_is_exact_sum() {
        assert_eq!(total_cost(189.2, 53.75), 189.2 + 53.75);
        assert_eq!(total_cost(0.0, 0.0), 0.0);
        assert_eq!(total_cost(10.0, 0.0), 10.0);
    }

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(53.754), 53.75);
        assert_eq!(round2(53.755), 53.76);
        assert_eq!(round2(242.95000000000002), 242.95);
    }
}
