use crate::{
    core::appliance::Appliance,
    quantity::{power::Watts, time::Hours},
};

/// Ready-made appliance packs for a new household file.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Preset {
    /// A fully equipped home.
    #[default]
    Demo,

    #[value(name = "basic-1bhk")]
    Basic1Bhk,

    #[value(name = "basic-2bhk")]
    Basic2Bhk,
}

/// `(type, power, quantity, hours per day, days per week, star label)`
type Entry = (&'static str, f64, u32, f64, f64, Option<&'static str>);

const DEMO: &[Entry] = &[
    ("bulb", 60.0, 5, 6.0, 7.0, None),
    ("fan", 70.0, 3, 8.0, 7.0, None),
    ("AC", 1200.0, 1, 3.0, 6.0, None),
    ("fridge", 120.0, 1, 24.0, 7.0, Some("3-star")),
    ("tv", 90.0, 1, 3.0, 7.0, None),
    ("router", 10.0, 1, 24.0, 7.0, None),
    ("laptop", 60.0, 1, 4.0, 6.0, None),
    ("wm", 500.0, 1, 0.7, 4.0, None),
    ("geyser", 2000.0, 1, 0.5, 5.0, None),
    ("microwave", 1200.0, 1, 0.3, 5.0, None),
];

const BASIC_1BHK: &[Entry] = &[
    ("bulb", 60.0, 6, 5.0, 7.0, None),
    ("fan", 70.0, 2, 8.0, 7.0, None),
    ("fridge", 110.0, 1, 24.0, 7.0, Some("3-star")),
    ("tv", 80.0, 1, 3.0, 7.0, None),
];

const BASIC_2BHK: &[Entry] = &[
    ("bulb", 60.0, 10, 6.0, 7.0, None),
    ("fan", 70.0, 4, 8.0, 7.0, None),
    ("AC", 1200.0, 1, 3.0, 6.0, None),
    ("fridge", 120.0, 1, 24.0, 7.0, Some("3-star")),
    ("router", 10.0, 1, 24.0, 7.0, None),
];

impl Preset {
    const fn entries(self) -> &'static [Entry] {
        match self {
            Self::Demo => DEMO,
            Self::Basic1Bhk => BASIC_1BHK,
            Self::Basic2Bhk => BASIC_2BHK,
        }
    }

    /// Appliances identified as `<type>-<position>`, counting from one.
    #[must_use]
    pub fn appliances(self) -> Vec<Appliance> {
        self.entries()
            .iter()
            .zip(1_u32..)
            .map(|(&(kind, power, quantity, hours_per_day, days_per_week, star_label), position)| {
                let appliance = Appliance::new(format!("{}-{position}", kind.to_lowercase()), kind, Watts(power))
                    .with_quantity(quantity)
                    .with_hours_per_day(Hours(hours_per_day))
                    .with_days_per_week(days_per_week);
                match star_label {
                    Some(star_label) => appliance.with_star_label(star_label),
                    None => appliance,
                }
            })
            .collect()
    }
}
