/// Landing page: newest restaurants and the latest reviews.
/// Both lists are fetched once when the page mounts and never refreshed.
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;

use crate::backend::query::{Direction, Query, Select};
use crate::backend::{fetch_rows, Backend, DataService};
use crate::components::{restaurant_card::RestaurantCard, review_card::ReviewCard};
use crate::models::restaurant::restaurant_path;
use crate::models::{latest_first, Restaurant, Review, Timestamped};
use crate::toast::{Notifier, Toast, ToastQueue};

pub const FEATURED_RESTAURANT_LIMIT: usize = 6;
pub const LATEST_REVIEW_LIMIT: usize = 3;

pub fn featured_restaurants_query() -> Query {
    Query::table("restaurants")
        .order_by("created_at", Direction::Descending)
        .limit(FEATURED_RESTAURANT_LIMIT)
}

pub fn latest_reviews_query() -> Query {
    Query::table("reviews")
        .select(Select::all().with_relation("profiles", &["username", "avatar_url"]))
        .order_by("created_at", Direction::Descending)
        .limit(LATEST_REVIEW_LIMIT)
}

/// The two lists the page renders.
#[derive(Clone, Copy)]
pub struct HomeState {
    pub restaurants: RwSignal<Vec<Restaurant>>,
    pub latest_reviews: RwSignal<Vec<Review>>,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            restaurants: create_rw_signal(Vec::new()),
            latest_reviews: create_rw_signal(Vec::new()),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Cleared when the page is torn down; late fetch results check it before committing.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed,
    /// The page went away before the fetch finished.
    Discarded,
}

#[derive(Clone)]
pub struct HomeLoader<N> {
    data: Rc<dyn DataService>,
    notifier: N,
    state: HomeState,
    mounted: MountFlag,
}

impl<N: Notifier> HomeLoader<N> {
    pub fn new(data: Rc<dyn DataService>, notifier: N, state: HomeState, mounted: MountFlag) -> Self {
        Self {
            data,
            notifier,
            state,
            mounted,
        }
    }

    pub async fn load_featured_restaurants(&self) -> LoadOutcome {
        self.load_into(featured_restaurants_query(), self.state.restaurants, "restaurants")
            .await
    }

    pub async fn load_latest_reviews(&self) -> LoadOutcome {
        self.load_into(latest_reviews_query(), self.state.latest_reviews, "reviews")
            .await
    }

    async fn load_into<T>(&self, query: Query, slot: RwSignal<Vec<T>>, resource: &str) -> LoadOutcome
    where
        T: DeserializeOwned + Timestamped + 'static,
    {
        let result = fetch_rows::<T>(self.data.as_ref(), &query).await;

        if !self.mounted.is_mounted() {
            match &result {
                Ok(_) => log!("[HOME] Page unmounted, dropping {}", resource),
                Err(err) => error!("[HOME] Error fetching {} after unmount: {}", resource, err),
            }
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(rows) => {
                let rows = latest_first(rows, query.row_limit().unwrap_or(usize::MAX));
                let count = rows.len();
                if slot.try_set(rows).is_some() {
                    log!("[HOME] {} state already disposed", resource);
                    return LoadOutcome::Discarded;
                }
                log!("[HOME] Loaded {} {}", count, resource);
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                error!("[HOME] Error fetching {}: {}", resource, err);
                self.notifier
                    .notify(Toast::destructive("Error", format!("Failed to load {}", resource)));
                LoadOutcome::Failed
            }
        }
    }
}

#[component]
pub fn HomePage(backend: Backend, notifier: ToastQueue) -> impl IntoView {
    let state = HomeState::new();
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    let loader = HomeLoader::new(backend.data.clone(), notifier, state, mounted);
    // Reads no signals, so this runs exactly once, after the first render.
    create_effect(move |_| {
        let restaurants = loader.clone();
        spawn_local(async move {
            restaurants.load_featured_restaurants().await;
        });
        let reviews = loader.clone();
        spawn_local(async move {
            reviews.load_latest_reviews().await;
        });
    });

    let navigate = use_navigate();
    let open_restaurant = Callback::new(move |id: String| {
        navigate(&restaurant_path(&id), Default::default());
    });
    let storage = backend.storage.clone();

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="hero bg-gradient-to-r from-orange-500 to-red-600 text-white py-20">
                <div class="container mx-auto px-4">
                    <h1 class="text-5xl font-bold mb-4">{ "Find Your Next Favorite Spot" }</h1>
                    <p class="text-xl opacity-90">{ "Discover and share the best restaurants in your area" }</p>
                </div>
            </div>

            <section class="container mx-auto px-4 py-12 featured-restaurants">
                <h2 class="text-3xl font-bold mb-8">{ "Featured Restaurants" }</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || state.restaurants.get()
                        key=|restaurant| restaurant.id.clone()
                        children=move |restaurant| view! {
                            <RestaurantCard restaurant=restaurant on_select=open_restaurant />
                        }
                    />
                </div>
            </section>

            <section class="container mx-auto px-4 py-12 bg-white latest-reviews">
                <h2 class="text-3xl font-bold mb-8">{ "Latest Reviews" }</h2>
                <div class="space-y-6">
                    <For
                        each=move || state.latest_reviews.get()
                        key=|review| review.id.clone()
                        children=move |review| view! {
                            <ReviewCard review=review storage=storage.clone() />
                        }
                    />
                </div>
            </section>
        </div>
    }
}
