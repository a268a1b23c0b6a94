pub mod restaurant_card;
pub mod review_card;
pub mod star_rating;
pub mod toaster;
