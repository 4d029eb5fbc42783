//! Plain-text views

use soundhaven_core::{Card, CardState, DailySession, GuideCarousel, Vault};
use std::fmt::Write;

/// Today's cards, numbered from 1, followed by the countdown
pub fn cards_view(session: &DailySession, countdown: &str) -> String {
    let mut out = String::new();

    if session.cards().is_empty() {
        out.push_str("No cards today.\n");
    }

    for (index, card) in session.cards().iter().enumerate() {
        let marker = match session.card_state(index) {
            Some(CardState::Open) => "[open]",
            Some(CardState::Committed) => "[chosen]",
            Some(CardState::Locked) => "[locked]",
            Some(CardState::Selectable) | None => "[ ]",
        };

        // Cards stay face down until chosen
        let label = match session.card_state(index) {
            Some(CardState::Open) | Some(CardState::Committed) => {
                format!("{} - {}", card.title, card.artist)
            }
            _ => "?".to_string(),
        };

        let _ = writeln!(out, "{:>2}. {:<9}{}", index + 1, marker, label);
    }

    let _ = writeln!(out, "\nNew cards in {}", countdown);
    out
}

/// Detail of a flipped card
pub fn card_detail(card: &Card, added: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "by {}", card.artist);
    if !card.description.is_empty() {
        let _ = writeln!(out, "\n{}", card.description);
    }
    let _ = writeln!(out, "\n{}", card.track_uri);
    out.push_str(if added {
        "Added to your playlist\n"
    } else {
        "Not in your playlist yet (run `soundhaven add`)\n"
    });
    out
}

/// Past discoveries, newest last as the log orders them
pub fn vault_view(vault: &Vault) -> String {
    let items = vault.items();
    if items.is_empty() {
        return "Your vault is empty.\n".to_string();
    }

    let mut out = String::new();
    for (n, item) in items.iter().enumerate() {
        let heart = if vault.is_added(&item.card.track_uri) {
            "♥"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{:>3}. {} {}  {} - {}",
            n + 1,
            heart,
            item.entry.created_at.format("%Y-%m-%d"),
            item.card.title,
            item.card.artist
        );
    }
    out
}

/// The current guide slide with a position indicator
pub fn guide_slide(carousel: &GuideCarousel) -> String {
    let Some(slide) = carousel.current() else {
        return String::new();
    };

    let dots: String = (0..carousel.len())
        .map(|i| if i == carousel.index() { '●' } else { '○' })
        .collect();

    format!("{}\n{}\n\n{}\n", slide.title, slide.caption, dots)
}
