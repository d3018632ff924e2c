use crate::quantity::{
    cost::Cost,
    emission::{EmissionFactor, KilogramsCo2},
    rate::KilowattHourRate,
};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

implement_mul!(KilowattHours, KilowattHourRate, Cost);
implement_mul!(KilowattHours, EmissionFactor, KilogramsCo2);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_rate() {
        assert_abs_diff_eq!((KilowattHours(100.0) * KilowattHourRate(8.0)).0, 800.0);
        assert_abs_diff_eq!((KilowattHourRate(8.0) * KilowattHours(100.0)).0, 800.0);
    }

    #[test]
    fn test_mul_emission_factor() {
        assert_abs_diff_eq!((KilowattHours(100.0) * EmissionFactor(0.7)).0, 70.0);
    }
}
