//! Randomized scene parameters
//!
//! Each poster draws one art style, location, texture and text placement from
//! fixed candidate lists, plus a subject count of one or two characters.

use rand::Rng;

pub const ART_STYLES: &[&str] = &[
    "Pop Surrealism (Mark Ryden style)",
    "Vintage 90s CGI (Bryce 3D style)",
    "Knitted Plush Photography",
    "Grimy Industrial Claymation",
    "Neon Noir Felt Art",
    "Fuzzy Pastel Goth",
    "Hyper-realistic Velvet Render",
    "Diorama Photography",
];

pub const LOCATIONS: &[&str] = &[
    "a floating cosmic supermarket",
    "a melting playground at sunset",
    "an empty birthday party room",
    "a velvet forest with giant mushrooms",
    "inside a giant washing machine",
    "a desert made of candy",
    "a cloudy void with floating geometry",
    "a dimly lit 1980s office",
    "a swamp made of glitter",
];

pub const TEXTURES: &[&str] = &[
    "matted fur and glass",
    "shiny vinyl and velvet",
    "distressed felt",
    "translucent plastic",
    "patchwork fabric",
    "ceramic and fuzz",
];

pub const TEXT_INTEGRATION_STYLES: &[&str] = &[
    "stamped on the character's t-shirt",
    "written on a sloppy cardboard sign held by the character",
    "floating as glowing 3D neon letters behind the character",
    "embroidered onto the character's belly",
    "written in frosting on a cake",
    "on a speech bubble coming from the character",
];

pub const MIN_SUBJECTS: u8 = 1;
pub const MAX_SUBJECTS: u8 = 2;

/// Pick one candidate uniformly at random.
///
/// # Panics
///
/// Panics if `candidates` is empty. The built-in lists never are.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, candidates: &[&'a str]) -> &'a str {
    candidates[rng.gen_range(0..candidates.len())]
}

/// One request's worth of scene parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParameters {
    pub art_style: &'static str,
    pub location: &'static str,
    pub texture: &'static str,
    pub text_style: &'static str,
    pub subject_count: u8,
}

impl GenerationParameters {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            art_style: pick(rng, ART_STYLES),
            location: pick(rng, LOCATIONS),
            texture: pick(rng, TEXTURES),
            text_style: pick(rng, TEXT_INTEGRATION_STYLES),
            subject_count: rng.gen_range(MIN_SUBJECTS..=MAX_SUBJECTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sampled_values_come_from_candidate_sets() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let params = GenerationParameters::sample(&mut rng);
            assert!(ART_STYLES.contains(&params.art_style));
            assert!(LOCATIONS.contains(&params.location));
            assert!(TEXTURES.contains(&params.texture));
            assert!(TEXT_INTEGRATION_STYLES.contains(&params.text_style));
            assert!((MIN_SUBJECTS..=MAX_SUBJECTS).contains(&params.subject_count));
        }
    }

    #[test]
    fn test_both_subject_counts_occur() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts: HashSet<u8> = (0..100)
            .map(|_| GenerationParameters::sample(&mut rng).subject_count)
            .collect();

        assert_eq!(counts, HashSet::from([1, 2]));
    }

    #[test]
    fn test_same_seed_gives_same_parameters() {
        let a = GenerationParameters::sample(&mut StdRng::seed_from_u64(1234));
        let b = GenerationParameters::sample(&mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(99);
        let seen: HashSet<&str> = (0..500).map(|_| pick(&mut rng, TEXTURES)).collect();
        assert_eq!(seen.len(), TEXTURES.len());
    }

    #[test]
    fn test_pick_single_candidate() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick(&mut rng, &["only"]), "only");
    }
}
