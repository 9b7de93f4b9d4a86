use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::style::Color;

/// Settings value that picks a palette at random on each start.
pub const RANDOM_THEME_ID: &str = "random";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceColors {
    pub fill: Color,
    pub text: Color,
}

/// A board palette. Passed holidays use `completed`, the rest `upcoming`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub completed: PieceColors,
    pub upcoming: PieceColors,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

static THEMES: [Theme; 5] = [
    Theme {
        id: "lofi-beige",
        name: "Lofi Beige",
        description: "Calm beige and brown tones with a minimalist aesthetic",
        background: rgb(0xf5e9d9),
        foreground: rgb(0x8b6e5a),
        border: rgb(0xc5b7a7),
        completed: PieceColors { fill: rgb(0xb9a18f), text: rgb(0xf5efe7) },
        upcoming: PieceColors { fill: rgb(0xe0d5c5), text: rgb(0x7d6e5f) },
    },
    Theme {
        id: "galaxy",
        name: "Galaxy Lofi",
        description: "Indigo and lavender tones with subtle star accents",
        background: rgb(0x151c3b),
        foreground: rgb(0xffffff),
        border: rgb(0x4f5387),
        completed: PieceColors { fill: rgb(0x8e87d2), text: rgb(0xffffff) },
        upcoming: PieceColors { fill: rgb(0x4f5387), text: rgb(0xffffff) },
    },
    Theme {
        id: "retro",
        name: "Retro Lofi",
        description: "Nostalgic pink, mint and navy tones with a vintage pixel look",
        background: rgb(0x0c1f36),
        foreground: rgb(0xf8f5dc),
        border: rgb(0xff5a87),
        completed: PieceColors { fill: rgb(0xff5a87), text: rgb(0xf8f5dc) },
        upcoming: PieceColors { fill: rgb(0x142c45), text: rgb(0xf8f5dc) },
    },
    Theme {
        id: "snow",
        name: "Snow",
        description: "Ice blue and silver white tones with a crisp, minimal look",
        background: rgb(0xf0f5f9),
        foreground: rgb(0x364f6b),
        border: rgb(0xd0e0ee),
        completed: PieceColors { fill: rgb(0x70a3c4), text: rgb(0xffffff) },
        upcoming: PieceColors { fill: rgb(0xdce7f0), text: rgb(0x5a7896) },
    },
    Theme {
        id: "sakura",
        name: "Sakura",
        description: "Cherry blossom pink and soft gray tones",
        background: rgb(0xfbf1f3),
        foreground: rgb(0x595560),
        border: rgb(0xf0dfe6),
        completed: PieceColors { fill: rgb(0xe792a8), text: rgb(0xffffff) },
        upcoming: PieceColors { fill: rgb(0xf0dfe6), text: rgb(0x807986) },
    },
];

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &THEMES
    }

    /// Case-insensitive; a leading `theme-` is ignored.
    pub fn find(id: &str) -> Option<Theme> {
        let id = id.trim().to_lowercase();
        let id = id.strip_prefix("theme-").unwrap_or(id.as_str());
        THEMES.iter().find(|t| t.id == id).copied()
    }

    /// Like [`Theme::find`] but unknown ids get the default theme.
    pub fn by_id(id: &str) -> Theme {
        Theme::find(id).unwrap_or_default()
    }

    /// Resolves a settings value: `random` picks any palette, anything else goes
    /// through [`Theme::by_id`].
    pub fn resolve(id: &str) -> Theme {
        if is_random(id) {
            Theme::random()
        } else {
            Theme::by_id(id)
        }
    }

    pub fn random() -> Theme {
        Theme::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Theme {
        THEMES.choose(rng).copied().unwrap_or_default()
    }

    pub fn next(&self) -> Theme {
        let idx = THEMES.iter().position(|t| t.id == self.id).unwrap_or(0);
        THEMES[(idx + 1) % THEMES.len()]
    }
}

pub fn is_random(id: &str) -> bool {
    id.trim().eq_ignore_ascii_case(RANDOM_THEME_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rgb_splits_channels() {
        assert_eq!(rgb(0xf5e9d9), Color::Rgb(0xf5, 0xe9, 0xd9));
    }

    #[test]
    fn test_default_is_lofi_beige() {
        assert_eq!(Theme::default().id, "lofi-beige");
    }

    #[test]
    fn test_find_accepts_prefix_and_case() {
        assert_eq!(Theme::find("galaxy").unwrap().name, "Galaxy Lofi");
        assert_eq!(Theme::find("theme-galaxy").unwrap().name, "Galaxy Lofi");
        assert_eq!(Theme::find("RETRO").unwrap().id, "retro");
        assert!(Theme::find("neon").is_none());
    }

    #[test]
    fn test_by_id_falls_back_to_default() {
        assert_eq!(Theme::by_id("neon"), Theme::default());
        assert_eq!(Theme::by_id("sakura").id, "sakura");
    }

    #[test]
    fn test_next_wraps_around() {
        let mut t = Theme::default();
        for _ in 0..Theme::all().len() {
            t = t.next();
        }
        assert_eq!(t, Theme::default());
        assert_eq!(Theme::default().next().id, "galaxy");
    }

    #[test]
    fn test_theme_ids_unique() {
        let mut ids: Vec<_> = Theme::all().iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Theme::all().len());
    }

    #[test]
    fn test_random_with_returns_a_known_theme() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let t = Theme::random_with(&mut rng);
            assert!(Theme::all().contains(&t));
        }
    }

    #[test]
    fn test_random_with_covers_every_theme() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: Vec<_> = (0..200).map(|_| Theme::random_with(&mut rng).id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Theme::all().len());
    }

    #[test]
    fn test_resolve_random_and_named() {
        assert!(is_random("random"));
        assert!(is_random(" RANDOM "));
        assert!(!is_random("retro"));
        assert!(Theme::all().contains(&Theme::resolve("random")));
        assert_eq!(Theme::resolve("snow").id, "snow");
        assert_eq!(Theme::resolve("neon"), Theme::default());
    }
}
