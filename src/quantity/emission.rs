quantity!(
    /// Grid emission factor, kilograms of CO2 per kilowatt-hour.
    EmissionFactor, suffix: "kg/kWh", precision: 2
);

quantity!(KilogramsCo2, suffix: "kg CO₂", precision: 2);
