//! Generates random locations for demos and randomized tests.

use rand::Rng;

use crate::haversine::DistanceUnit;
use crate::location::{CoordinateStore, Location};

/// Generate `capacity` named locations scattered within `radius` of
/// `center`.
///
/// Locations are named `loc-000`, `loc-001`, ... so that name order
/// matches generation order. Pass a seeded RNG for reproducible sets.
///
/// # Arguments
/// * `center` - The centre of the disc.
/// * `radius` - Maximum great-circle distance from `center`, in `unit`.
/// * `capacity` - The number of locations to generate.
/// * `unit` - The unit `radius` is given in.
/// * `rng` - The source of randomness.
pub fn generate_locations_near<R: Rng + ?Sized>(
    center: &Location,
    radius: f64,
    capacity: usize,
    unit: DistanceUnit,
    rng: &mut R,
) -> CoordinateStore {
    let width = capacity.saturating_sub(1).to_string().len().max(3);
    (0..capacity)
        .map(|i| {
            (
                format!("loc-{:0width$}", i, width = width),
                generate_location_near(center, radius, unit, rng),
            )
        })
        .collect()
}

/// Generate one location uniformly distributed over the spherical cap
/// of the given radius around `center`.
pub fn generate_location_near<R: Rng + ?Sized>(
    center: &Location,
    radius: f64,
    unit: DistanceUnit,
    rng: &mut R,
) -> Location {
    let angular_radius = (radius / unit.earth_radius()).min(std::f64::consts::PI);
    // Uniform over the cap area: cos(d) is uniform in [cos(r), 1].
    let cos_d = 1.0 - rng.gen::<f64>() * (1.0 - angular_radius.cos());
    let d = cos_d.clamp(-1.0, 1.0).acos();
    let bearing = rng.gen_range(0.0..std::f64::consts::TAU);

    let lat1 = center.latitude.into_inner().to_radians();
    let lon1 = center.longitude.into_inner().to_radians();
    let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());

    // Normalize longitude into [-180, 180).
    let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Location::new(lat2.to_degrees(), lon2)
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::haversine::distance;
    use rand::{rngs::StdRng, SeedableRng};

    const SAN_FRANCISCO: (f64, f64) = (37.7749, -122.4194);

    #[test]
    fn test_correct_location_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = Location::from(SAN_FRANCISCO);
        let store = generate_locations_near(&center, 25.0, 500, DistanceUnit::Kilometers, &mut rng);

        assert_eq!(store.len(), 500);
        assert_eq!(store.names().next(), Some("loc-000"));
    }

    #[test]
    fn test_locations_within_radius() {
        let mut rng = StdRng::seed_from_u64(2);
        let center = Location::from(SAN_FRANCISCO);

        for unit in [DistanceUnit::Kilometers, DistanceUnit::Meters] {
            let radius = match unit {
                DistanceUnit::Kilometers => 25.0,
                DistanceUnit::Meters => 25_000.0,
            };
            let store = generate_locations_near(&center, radius, 200, unit, &mut rng);
            for (_, location) in store.iter() {
                let d = distance(&center, location, unit);
                assert!(d <= radius * (1.0 + 1e-6), "{d} > {radius}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_locations() {
        let center = Location::from(SAN_FRANCISCO);
        let first = generate_locations_near(
            &center,
            10.0,
            50,
            DistanceUnit::Kilometers,
            &mut StdRng::seed_from_u64(9),
        );
        let second = generate_locations_near(
            &center,
            10.0,
            50,
            DistanceUnit::Kilometers,
            &mut StdRng::seed_from_u64(9),
        );
        assert_eq!(first, second);
    }
}
