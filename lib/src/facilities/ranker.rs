// lib/src/facilities/ranker.rs

use log::debug;
use triage_models::{Coordinate, Facility, RankedFacility, SeverityTier};

use crate::facilities::geo::haversine_miles;

/// Most facilities returned for one request.
pub const MAX_RANKED_FACILITIES: usize = 3;

/// Facility types acceptable for a requested tier: the tier itself plus one
/// neighbour. The table is not symmetric: trauma requests fall
/// back to ER, but self-care requests never reach past urgent care.
pub const fn admitted_tiers(requested: SeverityTier) -> [SeverityTier; 2] {
    match requested {
        SeverityTier::SelfCare => [SeverityTier::SelfCare, SeverityTier::UrgentCare],
        SeverityTier::UrgentCare => [SeverityTier::UrgentCare, SeverityTier::EmergencyRoom],
        SeverityTier::EmergencyRoom => [SeverityTier::EmergencyRoom, SeverityTier::TraumaCenter],
        SeverityTier::TraumaCenter => [SeverityTier::TraumaCenter, SeverityTier::EmergencyRoom],
    }
}

/// `None` stands for a tier name the service does not know; it admits
/// everything.
pub fn admits(requested: Option<SeverityTier>, facility: &Facility) -> bool {
    match requested {
        Some(tier) => admitted_tiers(tier).contains(&facility.tier),
        None => true,
    }
}

/// Filters `registry` to the tiers compatible with `requested`, measures each
/// facility from `origin`, and returns the nearest few, closest first.
/// Equal distances keep registry order.
pub fn rank_facilities(
    requested: Option<SeverityTier>,
    origin: Coordinate,
    registry: &[Facility],
) -> Vec<RankedFacility> {
    let mut ranked: Vec<RankedFacility> = registry
        .iter()
        .filter(|facility| admits(requested, facility))
        .map(|facility| RankedFacility {
            distance: haversine_miles(origin, facility.location()),
            facility: facility.clone(),
        })
        .collect();

    let admitted = ranked.len();
    // `sort_by` is stable.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(MAX_RANKED_FACILITIES);

    debug!(
        "Ranked {} of {} admitted facilities for tier {:?} at ({}, {})",
        ranked.len(),
        admitted,
        requested,
        origin.lat,
        origin.lng
    );
    ranked
}
