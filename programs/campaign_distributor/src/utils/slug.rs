use anchor_lang::solana_program::hash::hash;

/// Derives the campaign slug from its title
///
/// Lowercases, turns each run of whitespace into a single `_` and drops
/// anything outside `[a-z0-9_-]`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

pub fn slug_hash(slug: &str) -> [u8; 32] {
    hash(slug.as_bytes()).to_bytes()
}

/// Campaign PDA seed for a title
pub fn campaign_seed(title: &str) -> [u8; 32] {
    slug_hash(&slugify(title))
}
