//! Static asset addressing, per-image fallback chains and the marquee strip
//! geometry.

pub const ICON_PLACEHOLDER: &str = "/next.svg";
pub const PHOTO_FALLBACK: &str = "/photos/fallback.svg";
pub const AVATAR: &str = "/avatar.svg";

pub const ABOUT_TECHS: [&str; 11] = [
    "python",
    "flask",
    "fastapi",
    "keras",
    "numpy",
    "pandas",
    "postgresql",
    "tensorflow",
    "tailwind",
    "github",
    "vscode",
];

pub const PROJECT_TECHS: [&str; 11] = [
    "python",
    "flask",
    "fastapi",
    "keras",
    "numpy",
    "pandas",
    "tailwind",
    "github",
    "vscode",
    "postgresql",
    "tensorflow",
];

pub const PHOTOS: [&str; 5] = [
    "/photos/warsaw.jpg",
    "/photos/vistula.jpg",
    "/photos/hackathon.jpg",
    "/photos/workspace.jpg",
    "/photos/kickboxing.jpg",
];

/// Deployment path segment every asset and link is served under.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct BasePath(String);

impl BasePath {
    /// Normalises to either `""` or `"/segment"` without a trailing slash.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Self(String::new());
        }

        Self(format!("/{trimmed}"))
    }

    /// Value baked in when the wasm bundle is built.
    pub fn from_build() -> Self {
        Self::new(option_env!("NEO_ORBIT_BASE_PATH").unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn asset(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }

    /// Strips the prefix from a request path. Paths outside the prefix yield
    /// `None`.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.0.is_empty() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Ordered candidate sources for one image element. Each load failure moves
/// to the next candidate; failures on the last one are no-ops, so repeated
/// error events on the same element cannot loop.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FallbackChain {
    candidates: Vec<String>,
    cursor: usize,
}

impl FallbackChain {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// `/tech/<name>.svg`, then `.png`, then the generic placeholder.
    pub fn tech_icon(base: &BasePath, name: &str) -> Self {
        Self::new(vec![
            base.asset(&format!("/tech/{name}.svg")),
            base.asset(&format!("/tech/{name}.png")),
            base.asset(ICON_PLACEHOLDER),
        ])
    }

    pub fn photo(base: &BasePath, src: &str) -> Self {
        Self::new(vec![base.asset(src), base.asset(PHOTO_FALLBACK)])
    }

    pub fn current(&self) -> &str {
        self.candidates
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn attempt(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor + 1 >= self.candidates.len()
    }

    /// Returns whether the source changed.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }

        self.cursor += 1;
        true
    }
}

/// Where a marquee puts the space between icons.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ItemSpacing {
    /// Every icon carries its own trailing margin, the last one included.
    Trailing(f64),
    /// Flex `gap`: space only between neighbours, none after the last icon.
    #[cfg(test)]
    Between(f64),
}

impl ItemSpacing {
    fn px(self) -> f64 {
        match self {
            Self::Trailing(px) => px,
            #[cfg(test)]
            Self::Between(px) => px,
        }
    }
}

pub const MARQUEE_SPACING_PX: f64 = 24.0;

/// An icon sequence rendered `copies` times back to back and translated by
/// `100 / copies` percent of the track per cycle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MarqueeTrack {
    pub copies: usize,
    pub duration_secs: f64,
    pub spacing: ItemSpacing,
}

impl MarqueeTrack {
    pub fn new(copies: usize, duration_secs: f64) -> Self {
        Self {
            copies: copies.max(2),
            duration_secs,
            spacing: ItemSpacing::Trailing(MARQUEE_SPACING_PX),
        }
    }

    #[cfg(test)]
    pub fn with_spacing(self, spacing: ItemSpacing) -> Self {
        Self { spacing, ..self }
    }

    /// Start and end `translateX` offsets in percent of the track.
    pub fn keyframes(&self) -> (f64, f64) {
        (0.0, -100.0 / self.copies as f64)
    }

    /// Rendered width of the whole track for one sequence of icon widths.
    pub fn track_width_px(&self, item_widths: &[f64]) -> f64 {
        let items = item_widths.len() * self.copies;
        let icons: f64 = item_widths.iter().sum::<f64>() * self.copies as f64;
        let spaces = match self.spacing {
            ItemSpacing::Trailing(_) => items,
            #[cfg(test)]
            ItemSpacing::Between(_) => items.saturating_sub(1),
        };
        icons + spaces as f64 * self.spacing.px()
    }

    /// Distance from the first icon of one copy to the first icon of the next.
    pub fn copy_pitch_px(&self, item_widths: &[f64]) -> f64 {
        item_widths.iter().sum::<f64>() + item_widths.len() as f64 * self.spacing.px()
    }

    /// How far the end frame lands from the start of the next copy. Any
    /// non-zero value is a visible jump when the animation restarts.
    pub fn seam_offset_px(&self, item_widths: &[f64]) -> f64 {
        let (start, end) = self.keyframes();
        let travelled = (start - end) / 100.0 * self.track_width_px(item_widths);
        travelled - self.copy_pitch_px(item_widths)
    }

    pub fn is_seamless(&self, item_widths: &[f64]) -> bool {
        self.seam_offset_px(item_widths).abs() < 1e-6
    }

    pub fn keyframes_css(&self, name: &str) -> String {
        let (start, end) = self.keyframes();
        let spacing = match self.spacing {
            ItemSpacing::Trailing(px) => format!(".{name} > * {{ margin-right: {px}px; }}"),
            #[cfg(test)]
            ItemSpacing::Between(px) => format!(".{name} {{ gap: {px}px; }}"),
        };
        format!(
            "@keyframes {name} {{ from {{ transform: translateX({start}%); }} to {{ transform: translateX({end:.6}%); }} }}\n\
             .{name} {{ animation: {name} {duration}s linear infinite; }}\n\
             .{name}:hover {{ animation-play-state: paused; }}\n\
             {spacing}",
            duration = self.duration_secs,
        )
    }

    /// The icon list repeated `copies` times.
    pub fn repeat<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(items.len() * self.copies);
        for _ in 0..self.copies {
            out.extend_from_slice(items);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalised() {
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("PortfolioORBIT/").as_str(), "/PortfolioORBIT");
        assert_eq!(BasePath::new(" /PortfolioORBIT ").as_str(), "/PortfolioORBIT");
    }

    #[test]
    fn prefix_applies_to_every_asset() {
        let base = BasePath::new("/PortfolioORBIT");
        assert_eq!(base.asset("/tech/python.svg"), "/PortfolioORBIT/tech/python.svg");
        assert_eq!(base.asset("cv/Yaroslav_Mudryk_CV_EN.pdf"), "/PortfolioORBIT/cv/Yaroslav_Mudryk_CV_EN.pdf");
        assert_eq!(BasePath::default().asset("/tech/python.svg"), "/tech/python.svg");
    }

    #[test]
    fn strip_respects_segment_boundaries() {
        let base = BasePath::new("/PortfolioORBIT");
        assert_eq!(base.strip("/PortfolioORBIT/about/"), Some("/about/"));
        assert_eq!(base.strip("/PortfolioORBIT"), Some("/"));
        assert_eq!(base.strip("/PortfolioORBITX/about"), None);
        assert_eq!(base.strip("/about"), None);
        assert_eq!(BasePath::default().strip("/about"), Some("/about"));
    }

    #[test]
    fn icon_chain_tries_svg_then_png_then_placeholder() {
        let base = BasePath::new("/p");
        let mut chain = FallbackChain::tech_icon(&base, "keras");
        assert_eq!(chain.current(), "/p/tech/keras.svg");

        assert!(chain.advance());
        assert_eq!(chain.current(), "/p/tech/keras.png");

        assert!(chain.advance());
        assert_eq!(chain.current(), "/p/next.svg");
        assert!(chain.is_exhausted());

        assert!(!chain.advance());
        assert!(!chain.advance());
        assert_eq!(chain.current(), "/p/next.svg");
        assert_eq!(chain.attempt(), 2);
    }

    #[test]
    fn chains_are_independent_per_image() {
        let base = BasePath::default();
        let mut first = FallbackChain::tech_icon(&base, "numpy");
        let second = FallbackChain::tech_icon(&base, "numpy");
        first.advance();

        assert_eq!(first.attempt(), 1);
        assert_eq!(second.attempt(), 0);
    }

    #[test]
    fn photo_chain_falls_back_once() {
        let mut chain = FallbackChain::photo(&BasePath::default(), PHOTOS[0]);
        assert!(chain.advance());
        assert_eq!(chain.current(), PHOTO_FALLBACK);
        assert!(!chain.advance());
    }

    const ICON_WIDTHS: [f64; 4] = [48.0, 40.0, 56.0, 48.0];

    #[test]
    fn doubled_track_loops_without_a_seam() {
        let track = MarqueeTrack::new(2, 40.0);
        assert_eq!(track.keyframes(), (0.0, -50.0));
        assert!(track.is_seamless(&ICON_WIDTHS));

        let css = track.keyframes_css("neo-marquee");
        assert!(css.contains("translateX(0%)"));
        assert!(css.contains("translateX(-50.000000%)"));
        assert!(css.contains("40s linear infinite"));
        assert!(css.contains(".neo-marquee > * { margin-right: 24px; }"));
        assert!(!css.contains("gap"));
    }

    #[test]
    fn single_copy_is_promoted_to_two() {
        let track = MarqueeTrack::new(1, 30.0);
        assert_eq!(track.copies, 2);
        assert!(track.is_seamless(&ICON_WIDTHS));
    }

    #[test]
    fn gap_between_icons_only_jumps_at_reset() {
        let track = MarqueeTrack::new(2, 30.0).with_spacing(ItemSpacing::Between(24.0));
        assert!(!track.is_seamless(&ICON_WIDTHS));
        // Half a gap short per cycle with two copies.
        assert!((track.seam_offset_px(&ICON_WIDTHS) + 12.0).abs() < 1e-9);
        assert!(track.keyframes_css("m").contains(".m { gap: 24px; }"));

        let tight = MarqueeTrack::new(2, 30.0).with_spacing(ItemSpacing::Between(0.0));
        assert!(tight.is_seamless(&ICON_WIDTHS));
    }

    #[test]
    fn trailing_spacing_is_seamless_for_any_copy_count() {
        for copies in 2..6 {
            let track = MarqueeTrack::new(copies, 30.0);
            assert!(track.is_seamless(&ICON_WIDTHS), "copies = {copies}");
            assert!(track.is_seamless(&[48.0; 11]), "copies = {copies}");
        }
    }

    #[test]
    fn track_repeats_the_sequence() {
        let track = MarqueeTrack::new(3, 10.0);
        let (start, end) = track.keyframes();
        assert!((end - start + 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(track.repeat(&["a", "b"]), vec!["a", "b", "a", "b", "a", "b"]);
    }
}
