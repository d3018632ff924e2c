quantity!(
    /// Electricity tariff, currency per kilowatt-hour.
    KilowattHourRate, suffix: "₹/kWh", precision: 2
);
