use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

/// Random bytes in a generated slug. Rendered as hex, so the slug is twice as long.
const GENERATED_SLUG_BYTES: usize = 7;

lazy_static! {
    static ref SLUG_PATTERN: Regex =
        Regex::new(r"^[0-9a-z\-_]{12,50}$").expect("slug pattern should be a valid regex");
}

/// Generates a random slug of lowercase hex characters.
pub fn generate_slug<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; GENERATED_SLUG_BYTES] = rng.gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// A slug is 12 to 50 characters of `a-z`, `0-9`, `-` and `_`.
pub fn validate_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

pub fn slug_error_message(slug: &str) -> String {
    format!(
        "slugの値（{slug}）が不正です。小文字の半角英数字（a-z0-9）、ハイフン（-）、アンダースコア（_）の12〜50字の組み合わせにしてください"
    )
}
