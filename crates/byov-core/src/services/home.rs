//! Home page view model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::feed::FeedState;
use super::navigation::NavLink;
use super::preview::PostPreview;
use crate::domain::AuthState;

pub const TITLE: &str = "Discover Verses";
pub const TAGLINE: &str =
    "A cozy rainforest sanctuary for writers and readers to share beautiful writing";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FeedView {
    Loading {
        message: &'static str,
    },
    Empty {
        message: &'static str,
        call_to_action: NavLink,
    },
    Posts {
        previews: Vec<PostPreview>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Shown to signed-in viewers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<NavLink>,
    pub feed: FeedView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HomePage {
    pub fn build(feed: &FeedState, auth: &AuthState, now: DateTime<Utc>) -> Self {
        let signed_in = auth.is_signed_in();

        let view = if feed.loading {
            FeedView::Loading {
                message: "Loading verses...",
            }
        } else if feed.posts.is_empty() {
            let call_to_action = if signed_in {
                NavLink::new("Create a Verse", "/create")
            } else {
                NavLink::new("Sign Up to Write", "/signup")
            };
            FeedView::Empty {
                message: "No verses yet. Be the first to share!",
                call_to_action,
            }
        } else {
            FeedView::Posts {
                previews: feed
                    .posts
                    .iter()
                    .map(|post| PostPreview::render(post, now))
                    .collect(),
            }
        };

        Self {
            title: TITLE,
            tagline: TAGLINE,
            call_to_action: signed_in.then(|| NavLink::new("Start Writing", "/create")),
            feed: view,
            error: feed.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post_fixture;

    #[test]
    fn test_loading() {
        let page = HomePage::build(&FeedState::loading(), &AuthState::anonymous(), Utc::now());
        assert!(matches!(page.feed, FeedView::Loading { .. }));
        assert_eq!(page.call_to_action, None);
    }

    #[test]
    fn test_failed_feed_shows_empty_state() {
        let page = HomePage::build(
            &FeedState::failed("store unavailable"),
            &AuthState::anonymous(),
            Utc::now(),
        );

        match page.feed {
            FeedView::Empty { call_to_action, .. } => assert_eq!(call_to_action.href, "/signup"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(page.error.as_deref(), Some("store unavailable"));
    }

    #[test]
    fn test_posts_render_previews() {
        let feed = FeedState::ready(vec![post_fixture("a"), post_fixture("b")]);
        let page = HomePage::build(&feed, &AuthState::anonymous(), Utc::now());

        match page.feed {
            FeedView::Posts { previews } => {
                assert_eq!(previews.len(), 2);
                assert_eq!(previews[0].href, "/post/a");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let page = HomePage::build(&FeedState::ready(Vec::new()), &AuthState::anonymous(), Utc::now());

        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["feed"]["status"], "empty");
        assert_eq!(json["feed"]["callToAction"]["href"], "/signup");
        assert!(json.get("call_to_action").is_none());
    }
}
