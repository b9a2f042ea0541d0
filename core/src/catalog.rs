use crate::rng::rand_index;

const BACKGROUND_SALT: u32 = 0xBA5E;

/// One selectable background image. The catalog itself is configuration
/// owned by the shell; the engine only picks from whatever slice it is
/// handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    pub label: &'static str,
    pub slug: &'static str,
    pub src: &'static str,
}

pub fn background_by_slug(
    catalog: &'static [BackgroundImage],
    slug: &str,
) -> Option<&'static BackgroundImage> {
    let trimmed = slug.trim();
    catalog
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

/// Uniform pick for a round; every tile of that round slices the chosen
/// image. Empty catalog yields None.
pub fn pick_background(
    catalog: &'static [BackgroundImage],
    seed: u32,
) -> Option<&'static BackgroundImage> {
    if catalog.is_empty() {
        return None;
    }
    catalog.get(rand_index(seed, BACKGROUND_SALT, catalog.len()))
}
