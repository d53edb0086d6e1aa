use rand::Rng;

#[rustfmt::skip]
pub const EMOJIS: [&str; 39] = [
    "😺", "📘", "📚", "📑", "😊", "😎", "👻", "🤖", "😸", "😽", "💨", "💬", "💭",
    "👋", "👌", "👏", "🙌", "🙆", "🐕", "🐈", "🦁", "🐷", "🦔", "🐥", "🐡", "🐙",
    "🍣", "🕌", "🌟", "🔥", "🌊", "🎃", "✨", "🎉", "⛳", "🔖", "📝", "🗂", "📌",
];

pub fn pick_random_emoji<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EMOJIS[rng.gen_range(0..EMOJIS.len())]
}
