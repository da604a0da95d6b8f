use crate::post::Post;

/// The slice of a post the search widget needs: link key plus the text
/// fields matched against the query.
#[derive(Clone, PartialEq, Debug)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl PostSummary {
    pub fn from_post(post: &Post) -> Self {
        PostSummary {
            slug: post.slug.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            tags: post.tags.clone(),
        }
    }

    /// At most the first three tags are shown on a result row.
    pub fn visible_tags(&self) -> &[String] {
        let count = self.tags.len().min(3);
        &self.tags[..count]
    }
}

/// Search-as-you-type over the full post list. One instance per rendered
/// page; owns its query string and open flag, receives the post list once
/// at mount time and never re-fetches.
pub struct SearchWidget {
    posts: Vec<PostSummary>,
    query: String,
    open: bool,
}

impl SearchWidget {
    pub fn new(posts: Vec<PostSummary>) -> Self {
        SearchWidget {
            posts,
            query: String::new(),
            open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn on_query_change(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn on_focus(&mut self) {
        self.open = true;
    }

    /// Outside click - the invisible overlay caught it.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// The clear ("X") button next to the input.
    pub fn clear(&mut self) {
        self.query.clear();
        self.open = false;
    }

    /// Picking a result closes the panel and yields the link to follow.
    pub fn select(&mut self, slug: &str) -> String {
        self.query.clear();
        self.open = false;
        format!("/blog/{}", slug)
    }

    /// The results panel shows only while the input is focused and the query
    /// is non-blank. A blank query never lists "all posts".
    pub fn is_panel_visible(&self) -> bool {
        self.open && !self.query.trim().is_empty()
    }

    /// The full-viewport click catcher sits under the panel exactly when the
    /// panel shows; otherwise it must not block the page.
    pub fn overlay_active(&self) -> bool {
        self.is_panel_visible()
    }

    /// Case-insensitive substring filter over title, description and tags.
    /// Original post order is kept; there is no ranking.
    pub fn results(&self) -> Vec<&PostSummary> {
        if self.query.trim().is_empty() {
            return vec![];
        }

        let lower_query = self.query.to_lowercase();
        self.posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&lower_query)
                    || post.description.to_lowercase().contains(&lower_query)
                    || post.tags.iter().any(|tag| tag.to_lowercase().contains(&lower_query))
            })
            .collect()
    }
}
