//! Random names and biographies for synthetic users

use rand::seq::SliceRandom;
use rand::Rng;

/// Most common male given names in the US over the last century
pub const MALE_NAMES: [&str; 20] = [
    "James",
    "Robert",
    "John",
    "Michael",
    "David",
    "William",
    "Richard",
    "Joseph",
    "Thomas",
    "Christopher",
    "Charles",
    "Daniel",
    "Matthew",
    "Anthony",
    "Mark",
    "Donald",
    "Steven",
    "Andrew",
    "Paul",
    "Joshua",
];

/// Most common female given names in the US over the last century
pub const FEMALE_NAMES: [&str; 20] = [
    "Mary",
    "Patricia",
    "Jennifer",
    "Linda",
    "Elizabeth",
    "Barbara",
    "Susan",
    "Jessica",
    "Sarah",
    "Karen",
    "Lisa",
    "Nancy",
    "Betty",
    "Sandra",
    "Margaret",
    "Ashley",
    "Kimberly",
    "Emily",
    "Donna",
    "Michelle",
];

/// Most common US surnames
pub const SURNAMES: [&str; 9] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
];

/// Popular hobbies a biography can talk about
pub const ACTIVITIES: [&str; 25] = [
    "reading",
    "martial arts",
    "jewelry making",
    "woodworking",
    "gardening",
    "video games",
    "fishing",
    "team sports",
    "walking",
    "yoga",
    "traveling",
    "golf",
    "watching sports",
    "playing cards",
    "board games",
    "eating out",
    "writing",
    "running",
    "tennis",
    "volunteer work",
    "dancing",
    "painting",
    "cooking",
    "bicycling",
    "housework",
];

/// How much someone likes an activity, weakest first
pub const LIKE_LEVELS: [&str; 4] = ["kinda like", "like", "really like", "love"];

/// How much someone dislikes an activity, weakest first
pub const DISLIKE_LEVELS: [&str; 4] = ["kinda dislike", "dislike", "really dislike", "hate"];

// The pools are non-empty constants, so `choose` can't return `None`.
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Draw a given name, male or female with equal probability
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.gen_bool(0.5) {
        pick(rng, &MALE_NAMES)
    } else {
        pick(rng, &FEMALE_NAMES)
    }
}

/// Draw a last name.
///
/// Half of the time this is another given name, otherwise a surname.
pub fn random_last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.gen_bool(0.5) {
        random_first_name(rng)
    } else {
        pick(rng, &SURNAMES)
    }
}

/// Generate a full name in the form `<first> <last>`
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = random_first_name(rng);
    let last = random_last_name(rng);
    format!("{first} {last}")
}

/// Generate a biography out of one liked and one disliked activity.
///
/// If both draws hit the same activity the user has a weird relationship with it.
pub fn random_biography<R: Rng + ?Sized>(rng: &mut R) -> String {
    let liked = pick(rng, &ACTIVITIES);
    let disliked = pick(rng, &ACTIVITIES);

    if liked == disliked {
        return format!("I have a weird relationship with {liked}.");
    }

    let like_level = pick(rng, &LIKE_LEVELS);
    let dislike_level = pick(rng, &DISLIKE_LEVELS);

    format!("I {like_level} {liked} and {dislike_level} {disliked}.")
}
