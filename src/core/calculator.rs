//! Energy, cost and emission formulas.
//!
//! Everything here is a pure function over already validated input.
//! Savings are monthly unless noted otherwise.

use crate::{
    core::appliance::Appliance,
    quantity::{
        cost::Cost,
        emission::{EmissionFactor, KilogramsCo2},
        energy::KilowattHours,
        power::Watts,
        rate::KilowattHourRate,
        time::{Hours, Months},
    },
};

/// Fixed month length, not calendar-aware.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// `E_daily = Σ(P × N × T × D / 7) / 1000`
pub fn daily_energy<'a, I>(appliances: I) -> KilowattHours
where
    I: IntoIterator<Item = &'a Appliance>,
{
    appliances.into_iter().map(Appliance::daily_energy).sum()
}

pub fn monthly_energy(daily: KilowattHours) -> KilowattHours {
    daily * DAYS_PER_MONTH
}

pub fn monthly_cost(monthly: KilowattHours, tariff: KilowattHourRate) -> Cost {
    monthly * tariff
}

pub fn monthly_co2(monthly: KilowattHours, emission_factor: EmissionFactor) -> KilogramsCo2 {
    monthly * emission_factor
}

/// `ΔE = ((P_old − P_led) × N × T / 1000) × 30`
///
/// A replacement drawing more power than the original saves nothing.
pub fn lighting_swap_delta(
    old_power: Watts,
    led_power: Watts,
    quantity: u32,
    hours_per_day: Hours,
) -> KilowattHours {
    let saved_power = (old_power - led_power).max(Watts::ZERO);
    saved_power * f64::from(quantity) * hours_per_day * DAYS_PER_MONTH
}

/// `ΔE = E_AC × (k × ΔT)`, a linear approximation of the thermostat setback.
pub fn ac_setpoint_delta(
    ac_monthly: KilowattHours,
    delta_celsius: f64,
    coefficient_per_degree: f64,
) -> KilowattHours {
    ac_monthly * (coefficient_per_degree * delta_celsius)
}

/// `ΔE = (P_s × t × N / 1000) × 30`
pub fn standby_cut_delta(standby_power: Watts, hours_per_day: Hours, n_devices: usize) -> KilowattHours {
    #[expect(clippy::cast_precision_loss)]
    let n_devices = n_devices as f64;
    standby_power * hours_per_day * n_devices * DAYS_PER_MONTH
}

/// `ΔE = (E_old − E_new) / 12`, from annual consumptions.
pub fn appliance_upgrade_delta(old_yearly: KilowattHours, new_yearly: KilowattHours) -> KilowattHours {
    (old_yearly - new_yearly).max(KilowattHours::ZERO) / 12.0
}

/// Months until the monthly savings cover the retrofit cost.
///
/// There is no finite payback without positive savings.
#[must_use]
pub fn payback(retrofit_cost: Cost, monthly_savings: Cost) -> Option<Months> {
    (monthly_savings > Cost::ZERO).then(|| Months(retrofit_cost / monthly_savings))
}
