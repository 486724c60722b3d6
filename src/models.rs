use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single search hit, normalized across every upstream collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Fetch time, not a real publication date. The upstream has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Lowercase plural (`posts`) for list results, capitalized singular
    /// (`Post`) for single-item lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Upstream resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Posts,
    Users,
    Albums,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Posts, Self::Users, Self::Albums];

    /// Parse the lowercase plural form. Anything else is unknown.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "posts" => Some(Self::Posts),
            "users" => Some(Self::Users),
            "albums" => Some(Self::Albums),
            _ => None,
        }
    }

    /// Category label attached to list search results.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Users => "users",
            Self::Albums => "albums",
        }
    }

    /// Category label attached to single-item lookups.
    #[must_use]
    pub const fn detail_label(&self) -> &'static str {
        match self {
            Self::Posts => "Post",
            Self::Users => "User",
            Self::Albums => "Album",
        }
    }

    /// Upstream path segment.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        self.as_str()
    }

    /// Human-readable name for the UI.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Users => "Users",
            Self::Albums => "Albums",
        }
    }

    /// Match either label form (`posts` or `Post`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::parse(label).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|category| category.detail_label() == label)
        })
    }
}

/// Which collections a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Only(Category),
}

impl SearchScope {
    /// Interpret a category parameter.
    ///
    /// Absent, empty, or `"all"` covers every collection. Unrecognized
    /// values fall back to posts.
    #[must_use]
    pub fn from_param(category: Option<&str>) -> Self {
        match category {
            None | Some("" | "all") => Self::All,
            Some(other) => Self::Only(Category::parse(other).unwrap_or(Category::Posts)),
        }
    }
}

/// Raw post as returned by `/posts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Raw user as returned by `/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// Raw album as returned by `/albums`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
}

/// Current wall-clock time in the format shown as `publishedAt`.
#[must_use]
pub fn fetch_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn resource_url(base_url: &str, category: Category, id: u64) -> String {
    format!("{base_url}/{}/{id}", category.collection())
}

impl SearchResult {
    /// List-form result for a post.
    #[must_use]
    pub fn from_post(post: &PostRecord, base_url: &str) -> Self {
        Self::post(post, base_url, Category::Posts.as_str())
    }

    /// List-form result for a user.
    #[must_use]
    pub fn from_user(user: &UserRecord, base_url: &str) -> Self {
        Self::user(
            user,
            base_url,
            format!("{} - {}", user.email, user.phone),
            Category::Users.as_str(),
        )
    }

    /// List-form result for an album.
    #[must_use]
    pub fn from_album(album: &AlbumRecord, base_url: &str) -> Self {
        Self::album(album, base_url, Category::Albums.as_str())
    }

    /// Detail-form result for a post.
    #[must_use]
    pub fn post_detail(post: &PostRecord, base_url: &str) -> Self {
        Self::post(post, base_url, Category::Posts.detail_label())
    }

    /// Detail-form result for a user, with address and company appended.
    #[must_use]
    pub fn user_detail(user: &UserRecord, base_url: &str) -> Self {
        let description = format!(
            "{} - {}\n\nAddress: {}, {}\nCompany: {}",
            user.email, user.phone, user.address.street, user.address.city, user.company.name
        );
        Self::user(user, base_url, description, Category::Users.detail_label())
    }

    /// Detail-form result for an album.
    #[must_use]
    pub fn album_detail(album: &AlbumRecord, base_url: &str) -> Self {
        Self::album(album, base_url, Category::Albums.detail_label())
    }

    fn post(post: &PostRecord, base_url: &str, category: &str) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            description: post.body.clone(),
            author: Some(format!("User {}", post.user_id)),
            published_at: Some(fetch_timestamp()),
            url: Some(resource_url(base_url, Category::Posts, post.id)),
            category: Some(category.to_string()),
        }
    }

    fn user(user: &UserRecord, base_url: &str, description: String, category: &str) -> Self {
        Self {
            id: user.id.to_string(),
            title: user.name.clone(),
            description,
            author: Some(user.username.clone()),
            published_at: Some(fetch_timestamp()),
            url: Some(resource_url(base_url, Category::Users, user.id)),
            category: Some(category.to_string()),
        }
    }

    fn album(album: &AlbumRecord, base_url: &str, category: &str) -> Self {
        Self {
            id: album.id.to_string(),
            title: album.title.clone(),
            description: format!("Album of user {}", album.user_id),
            author: Some(format!("User {}", album.user_id)),
            published_at: Some(fetch_timestamp()),
            url: Some(resource_url(base_url, Category::Albums, album.id)),
            category: Some(category.to_string()),
        }
    }

    /// Category parsed from either label form.
    #[must_use]
    pub fn category_kind(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::from_label)
    }
}
