use nanoid::nanoid;

/// Alphabet for post identifiers (no ambiguous glyphs).
const POST_ID_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const POST_ID_LENGTH: usize = 12;

/// Generates a new post identifier. Renderers use it as a stable element key.
pub fn generate_post_id() -> String {
    nanoid!(POST_ID_LENGTH, POST_ID_ALPHABET)
}
