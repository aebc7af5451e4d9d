//! Random space facts shown once at startup

use rand::Rng;

/// Label placed before every fact
pub const FACT_LABEL: &str = "Space Fact: ";

/// The fixed fact pool
pub const SPACE_FACTS: [&str; 7] = [
    "A day on Venus is longer than a year on Venus.",
    "There are more stars in the universe than grains of sand on Earth.",
    "Neutron stars can spin up to 600 times per second!",
    "Saturn could float in water because it’s mostly made of gas.",
    "Light from the Sun takes about 8 minutes to reach Earth.",
    "The footprints on the Moon will stay there for millions of years.",
    "There’s a planet made entirely of diamonds called 55 Cancri e.",
];

/// Pick one fact uniformly at random and prefix it with the label
pub fn random_fact<R: Rng>(rng: &mut R) -> String {
    let idx = rng.random_range(0..SPACE_FACTS.len());
    format!("{}{}", FACT_LABEL, SPACE_FACTS[idx])
}

/// Pick a fact using the thread-local generator
pub fn show_random_fact() -> String {
    random_fact(&mut rand::rng())
}
