use leptos::logging::warn;
use leptos::*;

pub const MAX_STARS: i32 = 5;
const FILLED: char = '★';
const EMPTY: char = '☆';

/// `rating` filled stars followed by empty ones up to five. Out of range ratings
/// are clamped so the string is always five glyphs long.
pub fn star_display(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_STARS);
    if filled != rating {
        warn!("[STARS] rating {} outside 0..={}, clamped to {}", rating, MAX_STARS, filled);
    }
    let filled = filled as usize;
    let mut stars = String::with_capacity(MAX_STARS as usize * FILLED.len_utf8());
    stars.extend(std::iter::repeat(FILLED).take(filled));
    stars.extend(std::iter::repeat(EMPTY).take(MAX_STARS as usize - filled));
    stars
}

#[component]
pub fn StarRating(rating: i32) -> impl IntoView {
    view! {
        <span class="text-yellow-500 star-rating" title=format!("{} out of {}", rating.clamp(0, MAX_STARS), MAX_STARS)>
            { star_display(rating) }
        </span>
    }
}
