use crate::prelude::*;
use rand::Rng;

pub const MESSAGES: [&str; 6] = [
    "Hello, World! Are you ready to confront the reality of your existence?",
    "I'm a 'Hello World' program, and even I question my purpose in this vast universe.",
    "Hello, World! Let's face it, we're all just trying to mean something in this crazy world.",
    "Hello, World! It's time to confront your dreams and make them a reality.",
    "Hello, World! Remember, even the smallest of us can make a big impact.",
    "Hello, World! Don't be afraid to be a little rebellious and stand out from the crowd.",
];

pub fn message() -> &'static str {
    pick(&mut rand::thread_rng())
}

/// Draws one message uniformly from [`MESSAGES`] using `rng`.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let i = rng.gen_range(0..MESSAGES.len());
    debug!("🎰 picking message {i} of {}", MESSAGES.len());

    MESSAGES[i]
}
