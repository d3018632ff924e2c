quantity!(Hours, suffix: "h", precision: 1);

quantity!(
    /// Calendar-agnostic months, used for payback periods.
    Months, suffix: "mo", precision: 1
);
