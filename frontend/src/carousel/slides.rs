/// One promotional entry in the carousel rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub id: u8,
    pub title: &'static str,
    pub emoji: &'static str,
    /// Gradient tag resolved by `theme::gradient`.
    pub theme: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        id: 1,
        title: "Earn",
        emoji: "💰",
        theme: "from-primary to-accent",
    },
    Slide {
        id: 2,
        title: "Share",
        emoji: "🎁",
        theme: "from-accent to-primary",
    },
    Slide {
        id: 3,
        title: "Grow",
        emoji: "📈",
        theme: "from-secondary via-primary to-accent",
    },
    Slide {
        id: 4,
        title: "Celebrate",
        emoji: "🎉",
        theme: "from-primary via-accent to-secondary",
    },
];
