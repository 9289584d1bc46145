//! Hand-authored likelihoods of the reference instrument.
//!
//! Strong and weak values are independent conditional likelihoods and do
//! not sum to 1. Slider answers ("1".."10") are absent on purpose and fall
//! through to the neutral default.

/// `(token, strong, weak)`.
pub const REFERENCE_LIKELIHOODS: &[(&str, f64, f64)] = &[
    // Frequency
    ("Never", 0.1, 0.7),
    ("Rarely", 0.2, 0.6),
    ("Sometimes", 0.4, 0.4),
    ("Often", 0.7, 0.2),
    ("Always", 0.9, 0.1),
    // Intensity
    ("Not at all", 0.1, 0.8),
    ("Slightly", 0.3, 0.6),
    ("Moderately", 0.5, 0.4),
    ("Very", 0.7, 0.3),
    ("Extremely", 0.9, 0.1),
    // Quality
    ("Poor", 0.8, 0.2),
    ("Fair", 0.6, 0.4),
    ("Good", 0.4, 0.6),
    ("Very Good", 0.2, 0.8),
    ("Excellent", 0.1, 0.9),
    // Binary
    ("Yes", 0.9, 0.1),
    ("No", 0.1, 0.9),
    // Attitude
    ("Positive", 0.1, 0.9),
    ("Neutral", 0.5, 0.5),
    ("Negative", 0.8, 0.2),
];
