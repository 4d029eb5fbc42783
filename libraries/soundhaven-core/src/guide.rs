//! Onboarding guide carousel

/// One page of the onboarding guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

/// The fixed onboarding slides, in order
pub const GUIDE_SLIDES: [GuideSlide; 9] = [
    GuideSlide {
        image: "/guide/welcome.png",
        title: "WELCOME TO SOUNDHAVEN",
        caption: "A different way to discover music.",
    },
    GuideSlide {
        image: "/guide/cards.png",
        title: "CHOOSE ONE CARD",
        caption: "3 cards a day. Choose just one.",
    },
    GuideSlide {
        image: "/guide/flip.png",
        title: "FLIP AND LISTEN",
        caption: "Discover a hidden gem.",
    },
    GuideSlide {
        image: "/guide/add.png",
        title: "ADD TO PLAYLIST",
        caption: "Play it. Love it. Add it.",
    },
    GuideSlide {
        image: "/guide/daily.png",
        title: "NEW CARDS EVERY DAY",
        caption: "Cards refresh every 24 hours.",
    },
    GuideSlide {
        image: "/guide/curation.png",
        title: "HANDPICKED MUSIC",
        caption: "Selected from books and trusted communities.",
    },
    GuideSlide {
        image: "/guide/playlist.png",
        title: "YOUR SPOTIFY PLAYLIST",
        caption: "Your daily discoveries, saved in your SoundHaven playlist.",
    },
    GuideSlide {
        image: "/guide/vault.png",
        title: "HAVEN VAULT",
        caption: "Revisit every card you've flipped.",
    },
    GuideSlide {
        image: "/guide/start.png",
        title: "READY?",
        caption: "Let's begin your journey.",
    },
];

/// Paging state of the onboarding guide.
///
/// The guide counts as finished once every slide has been shown at least
/// once; `next`/`prev` report that transition a single time.
#[derive(Debug, Clone)]
pub struct GuideCarousel {
    slides: &'static [GuideSlide],
    index: usize,
    visited: Vec<bool>,
    finished: bool,
}

impl Default for GuideCarousel {
    fn default() -> Self {
        Self::new(&GUIDE_SLIDES)
    }
}

impl GuideCarousel {
    /// Create a carousel over `slides`, showing the first one
    pub fn new(slides: &'static [GuideSlide]) -> Self {
        let mut visited = vec![false; slides.len()];
        if let Some(first) = visited.first_mut() {
            *first = true;
        }
        let finished = visited.iter().all(|v| *v);

        Self {
            slides,
            index: 0,
            visited,
            finished,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&GuideSlide> {
        self.slides.get(self.index)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.slides.len()
    }

    /// Whether every slide has been visited
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one slide. Returns true if this step finished the guide.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.go_to(self.index + 1)
        } else {
            false
        }
    }

    /// Go back one slide. Returns true if this step finished the guide.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.go_to(self.index - 1)
        } else {
            false
        }
    }

    fn go_to(&mut self, index: usize) -> bool {
        self.index = index;
        self.visited[index] = true;

        if !self.finished && self.visited.iter().all(|v| *v) {
            self.finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_slide() {
        let guide = GuideCarousel::default();
        assert_eq!(guide.index(), 0);
        assert_eq!(guide.len(), 9);
        assert_eq!(guide.current().unwrap().title, "WELCOME TO SOUNDHAVEN");
        assert!(!guide.has_prev());
        assert!(!guide.is_finished());
    }

    #[test]
    fn test_clamps_at_edges() {
        let mut guide = GuideCarousel::default();
        assert!(!guide.prev());
        assert_eq!(guide.index(), 0);

        for _ in 0..20 {
            guide.next();
        }
        assert_eq!(guide.index(), 8);
        assert!(!guide.has_next());
    }

    #[test]
    fn test_finishes_exactly_once() {
        let mut guide = GuideCarousel::default();
        let mut finish_events = 0;

        for _ in 0..8 {
            if guide.next() {
                finish_events += 1;
            }
        }
        assert!(guide.is_finished());

        // Walking back and forth does not finish again
        for _ in 0..4 {
            if guide.prev() {
                finish_events += 1;
            }
        }
        if guide.next() {
            finish_events += 1;
        }

        assert_eq!(finish_events, 1);
    }

    #[test]
    fn test_single_slide_is_finished_immediately() {
        static ONE: [GuideSlide; 1] = [GuideSlide {
            image: "a.png",
            title: "ONLY",
            caption: "Just one.",
        }];

        let mut guide = GuideCarousel::new(&ONE);
        assert!(guide.is_finished());
        assert!(!guide.next());
    }
}
