//! Case-insensitive substring predicates applied to whole collections.
//!
//! Every predicate takes the query already lowercased so a collection is
//! filtered with a single fold of the needle.

use crate::models::{AlbumRecord, PostRecord, UserRecord};

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Title or body.
pub fn post_matches(post: &PostRecord, needle: &str) -> bool {
    contains_folded(&post.title, needle) || contains_folded(&post.body, needle)
}

/// Name, email, or username.
pub fn user_matches(user: &UserRecord, needle: &str) -> bool {
    contains_folded(&user.name, needle)
        || contains_folded(&user.email, needle)
        || contains_folded(&user.username, needle)
}

/// Title only.
pub fn album_matches(album: &AlbumRecord, needle: &str) -> bool {
    contains_folded(&album.title, needle)
}
