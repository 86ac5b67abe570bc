// sf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Ratio as UomRatio, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

/// Pressure head in meters of water column (mca). Stored as a length.
#[inline]
pub fn mca(v: f64) -> Length {
    m(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    m3ps(v / constants::LITERS_PER_CUBIC_METER)
}

/// Water depth rate in mm/h, as used for application intensity.
#[inline]
pub fn mm_per_h(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v / constants::MM_PER_H_PER_MPS)
}

/// Read a volume rate back in L/s.
#[inline]
pub fn to_lps(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    q.get::<cubic_meter_per_second>() * constants::LITERS_PER_CUBIC_METER
}

/// Read a depth rate back in mm/h.
#[inline]
pub fn to_mm_per_h(v: Velocity) -> f64 {
    use uom::si::velocity::meter_per_second;
    v.get::<meter_per_second>() * constants::MM_PER_H_PER_MPS
}

pub mod constants {
    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

    /// 1 m/s expressed in mm/h.
    pub const MM_PER_H_PER_MPS: f64 = 1000.0 * SECONDS_PER_HOUR;
}
