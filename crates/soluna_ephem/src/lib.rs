//! Sun/Moon position oracle: time scales, observer geometry, and apparent
//! topocentric places.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions and a ΔT estimate
//! - [`Instant`], an absolute time with presentation-only timezone metadata
//! - [`GeoLocation`] with boundary validation
//! - Low-precision Sun and Moon ecliptic series
//! - [`PositionOracle`]: apparent altitude/azimuth with refraction and
//!   parallax corrections
//!
//! Everything here is pure and stateless; the search engine in
//! `soluna_search` treats [`PositionOracle::evaluate`] as an opaque scalar
//! function of time.

pub mod delta_t;
pub mod error;
pub mod geo;
pub mod instant;
pub mod julian;
pub mod moon;
pub mod sun;
pub mod topocentric;

pub use delta_t::delta_t_seconds;
pub use error::EphemError;
pub use geo::{GeoLocation, dip_deg};
pub use instant::Instant;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries};
pub use moon::{MOON_RADIUS_KM, elongation_deg, moon_position};
pub use sun::{AU_KM, EclipticPos, SUN_RADIUS_KM, sun_position};
pub use topocentric::{
    AltitudeSample, Body, OracleConfig, PositionOracle, gmst_deg, refraction_deg,
    semidiameter_deg,
};
