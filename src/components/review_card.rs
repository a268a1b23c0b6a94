use leptos::*;
use std::rc::Rc;

use crate::backend::storage::StorageResolver;
use crate::components::star_rating::StarRating;
use crate::models::Review;

pub const REVIEW_IMAGES_BUCKET: &str = "review_images";

/// Public URLs for a review's images, in the order they were uploaded.
pub fn thumbnail_urls(review: &Review, storage: &dyn StorageResolver) -> Vec<String> {
    review
        .image_keys()
        .iter()
        .map(|key| storage.public_url(REVIEW_IMAGES_BUCKET, key))
        .collect()
}

#[component]
pub fn ReviewCard(review: Review, storage: Rc<dyn StorageResolver>) -> impl IntoView {
    let thumbnails = thumbnail_urls(&review, storage.as_ref());
    let author = review.author_name().to_string();

    view! {
        <div class="card review-card">
            <div class="card-content pt-6">
                <div class="flex items-center gap-2 mb-2">
                    <span class="font-semibold review-author">{ author }</span>
                    <StarRating rating=review.rating />
                </div>
                <p class="text-gray-600">{ review.content }</p>
                { (!thumbnails.is_empty()).then(|| view! {
                    <div class="flex gap-2 mt-4 review-images">
                        { thumbnails.into_iter().enumerate().map(|(index, url)| view! {
                            <img
                                src=url
                                alt=format!("Review image {}", index + 1)
                                class="w-24 h-24 object-cover rounded"
                            />
                        }).collect_view() }
                    </div>
                }) }
            </div>
        </div>
    }
}
