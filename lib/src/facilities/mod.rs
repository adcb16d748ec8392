// lib/src/facilities/mod.rs

//! Facility registry, great-circle distance and tier-aware ranking.

pub mod geo;
pub mod ranker;
pub mod registry;

pub use geo::{haversine_miles, EARTH_RADIUS_MILES};
pub use ranker::{admits, admitted_tiers, rank_facilities, MAX_RANKED_FACILITIES};
pub use registry::FacilityRegistry;
