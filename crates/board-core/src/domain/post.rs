use serde::{Deserialize, Serialize};

use super::{Audit, Comment, Tag};

/// Post aggregate - owns its comments and tags.
///
/// An id of `0` marks an entity the store has not assigned a surrogate id
/// to yet; repositories return saved entities with positive ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub comments: Vec<Comment>,
    pub tags: Vec<Tag>,
    pub audit: Audit,
}

impl Post {
    /// Create a new post with its initial tag set, in the given order.
    pub fn new(
        created_by: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        tag_names: Vec<String>,
    ) -> Self {
        let audit = Audit::new(created_by);
        let tags = tag_names
            .into_iter()
            .map(|name| Tag::new(name, audit.created_by.clone()))
            .collect();
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            comments: Vec::new(),
            tags,
            audit,
        }
    }

    pub fn created_by(&self) -> &str {
        &self.audit.created_by
    }

    /// Tag names in insertion/replacement order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    /// Overwrite title and content, replace the tag set if it changed, and
    /// stamp the update. Ownership must already have been checked by the
    /// caller.
    pub fn apply_update(
        &mut self,
        title: String,
        content: String,
        tag_names: Vec<String>,
        updated_by: String,
    ) {
        self.title = title;
        self.content = content;
        self.replace_tags(tag_names);
        self.audit.record_update(updated_by);
    }

    /// Full replace, not a diff: if the ordered name sequence differs in
    /// any way (including reordering), every existing tag is discarded and
    /// the set is rebuilt in the requested order with fresh identities.
    /// New tags are stamped with the post's original creator.
    fn replace_tags(&mut self, tag_names: Vec<String>) {
        if self.tag_names().eq(tag_names.iter().map(String::as_str)) {
            return;
        }
        let created_by = self.audit.created_by.clone();
        self.tags = tag_names
            .into_iter()
            .map(|name| {
                let mut tag = Tag::new(name, created_by.clone());
                tag.post_id = self.id;
                tag
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_tags(names: &[&str]) -> Post {
        let mut post = Post::new(
            "alice",
            "title",
            "content",
            names.iter().map(|s| s.to_string()).collect(),
        );
        // Simulate store-assigned ids so a rebuild is observable.
        post.id = 1;
        for (i, tag) in post.tags.iter_mut().enumerate() {
            tag.id = i as i64 + 1;
            tag.post_id = 1;
        }
        post
    }

    #[test]
    fn identical_tag_sequence_is_a_noop() {
        let mut post = post_with_tags(&["a", "b"]);
        let ids: Vec<i64> = post.tags.iter().map(|t| t.id).collect();

        post.apply_update(
            "t".into(),
            "c".into(),
            vec!["a".into(), "b".into()],
            "alice".into(),
        );

        assert_eq!(post.tags.iter().map(|t| t.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn reordered_tag_sequence_rebuilds_the_set() {
        let mut post = post_with_tags(&["a", "b"]);

        post.apply_update(
            "t".into(),
            "c".into(),
            vec!["b".into(), "a".into()],
            "alice".into(),
        );

        let names: Vec<&str> = post.tag_names().collect();
        assert_eq!(names, vec!["b", "a"]);
        // Rebuilt tags lose their stored identity.
        assert!(post.tags.iter().all(|t| t.id == 0));
        assert!(post.tags.iter().all(|t| t.audit.created_by == "alice"));
    }

    #[test]
    fn update_overwrites_fields_and_stamps_audit() {
        let mut post = post_with_tags(&[]);
        post.apply_update("new title".into(), "new content".into(), vec![], "alice".into());

        assert_eq!(post.title, "new title");
        assert_eq!(post.content, "new content");
        assert_eq!(post.audit.updated_by.as_deref(), Some("alice"));
    }
}
