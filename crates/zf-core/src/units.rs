// zf-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};

// Public canonical unit types (f64)
pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;

/// Offset between the Fahrenheit and Rankine scales.
pub const RANKINE_OFFSET: f64 = 459.67;

/// Atmospheric pressure added to gauge readings [psi].
pub const ATMOSPHERIC_PSI: f64 = 14.7;

/// Whether a supplied pressure is absolute (psia) or gauge (psig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureBasis {
    #[default]
    Absolute,
    Gauge,
}

impl PressureBasis {
    /// Convert a pressure reading on this basis to psia.
    #[inline]
    pub fn to_psia(self, p: f64) -> f64 {
        match self {
            Self::Absolute => p,
            Self::Gauge => psig_to_psia(p),
        }
    }
}

#[inline]
pub fn fahrenheit_to_rankine(t_f: f64) -> f64 {
    t_f + RANKINE_OFFSET
}

#[inline]
pub fn psig_to_psia(p_g: f64) -> f64 {
    p_g + ATMOSPHERIC_PSI
}

#[inline]
pub fn degf(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::psi;
    Pressure::new::<psi>(v)
}

/// Absolute temperature [°R] of a uom temperature.
#[inline]
pub fn to_rankine(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_rankine;
    t.get::<degree_rankine>()
}

/// Temperature [°F] of a uom temperature, the unit the derivation inputs use.
#[inline]
pub fn to_fahrenheit(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    t.get::<degree_fahrenheit>()
}

/// Absolute pressure [psia] of a uom pressure.
#[inline]
pub fn to_psia(p: Pressure) -> f64 {
    use uom::si::pressure::psi;
    p.get::<psi>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scalar_converters() {
        assert!(close(fahrenheit_to_rankine(75.0), 534.67));
        assert_eq!(fahrenheit_to_rankine(-459.67), 0.0);
        assert!(close(psig_to_psia(0.0), 14.7));
        assert!(close(psig_to_psia(2000.0), 2014.7));
    }

    #[test]
    fn pressure_basis() {
        assert_eq!(PressureBasis::default(), PressureBasis::Absolute);
        assert_eq!(PressureBasis::Absolute.to_psia(2010.0), 2010.0);
        assert!(close(PressureBasis::Gauge.to_psia(2010.0), 2024.7));
    }

    #[test]
    fn uom_round_trip() {
        assert!((to_rankine(degf(75.0)) - 534.67).abs() < 1e-9);
        assert!((to_fahrenheit(degf(75.0)) - 75.0).abs() < 1e-9);
        assert!((to_psia(psi(2010.0)) - 2010.0).abs() < 1e-9);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn uom_rankine_matches_scalar_offset(t_f in -400.0f64..1000.0) {
                let direct = fahrenheit_to_rankine(t_f);
                prop_assert!((to_rankine(degf(t_f)) - direct).abs() < 1e-8);
            }
        }
    }
}
