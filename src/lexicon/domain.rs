//! Mental-health lexicon.
//!
//! Valences here override the general lexicon. Severe clinical terms carry
//! stronger negative weight than a general-purpose lexicon gives them, and a
//! few effort words ("trying", "fighting") are nudged positive.

pub(super) const DOMAIN_LEXICON: &[(&str, f64)] = &[
    // Negative mental-health terms
    ("depressed", -3.0),
    ("depression", -3.0),
    ("anxiety", -2.5),
    ("anxious", -2.5),
    ("suicidal", -4.0),
    ("suicide", -4.0),
    ("self-harm", -3.5),
    ("hopeless", -3.0),
    ("worthless", -3.5),
    ("empty", -2.5),
    ("exhausted", -2.0),
    ("overwhelmed", -2.5),
    ("struggling", -2.0),
    ("tired", -1.5),
    ("alone", -2.0),
    ("lonely", -2.5),
    ("stuck", -2.0),
    ("numb", -2.5),
    ("breakdown", -3.0),
    ("crying", -2.0),
    ("panic", -3.0),
    ("attack", -1.5),
    ("hurt", -2.0),
    ("pain", -2.0),
    ("hell", -2.5),
    ("nightmare", -2.5),
    ("blame", -2.0),
    ("killing", -3.0),
    ("hate", -3.0),
    ("miserable", -3.0),
    ("failure", -3.0),
    // Positive mental-health terms
    ("healing", 2.5),
    ("therapy", 1.5),
    ("recovering", 2.0),
    ("support", 2.0),
    ("better", 2.0),
    ("hope", 2.5),
    ("improving", 2.0),
    ("progress", 2.0),
    ("strength", 2.5),
    ("proud", 3.0),
    ("peaceful", 2.5),
    ("calm", 2.0),
    ("gratitude", 3.0),
    ("thankful", 2.5),
    ("blessed", 2.0),
    ("okay", 1.0),
    // Effort and struggle modifiers
    ("trying", 0.5),
    ("battle", -1.0),
    ("fighting", 0.5),
];
