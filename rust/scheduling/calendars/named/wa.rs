//! Define the Washington State legal holiday calendar used for real estate contract deadlines.
//!
//! The table is a simplified list of fixed `(month, day)` pairs applied to every year. Floating
//! observances (MLK Day, Presidents Day, Memorial Day, Labor Day, Thanksgiving) are pinned to
//! their 2025 dates rather than derived from an nth-weekday rule.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "New Year's Day"),
    (1, 20, "Martin Luther King Jr. Day"),
    (2, 17, "Presidents Day"),
    (5, 26, "Memorial Day"),
    (7, 4, "Independence Day"),
    (9, 1, "Labor Day"),
    (11, 27, "Thanksgiving Day"),
    (12, 25, "Christmas Day"),
];
