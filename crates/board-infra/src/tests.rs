//! Service-level tests: the real services from `board-core` wired to the
//! in-memory adapters.

use std::sync::Arc;

use board_core::DomainError;
use board_core::domain::Like;
use board_core::policy::ExactMatch;
use board_core::ports::{BaseRepository, CommentRepository, CounterStore, TagRepository};
use board_core::query::{PageRequest, PostSearchCriteria};
use board_core::service::{
    CommentService, CreateComment, CreatePost, LikeService, PostService, UpdateComment, UpdatePost,
    like_count_key,
};

use crate::counter::InMemoryCounterStore;
use crate::memory::{
    InMemoryCommentRepository, InMemoryLikeRepository, InMemoryPostRepository, InMemoryStore,
    InMemoryTagRepository,
};

struct Fixture {
    posts: PostService,
    comments: CommentService,
    likes: Arc<LikeService>,
    post_repo: Arc<InMemoryPostRepository>,
    comment_repo: Arc<InMemoryCommentRepository>,
    tag_repo: Arc<InMemoryTagRepository>,
    like_repo: Arc<InMemoryLikeRepository>,
    counter: Arc<InMemoryCounterStore>,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryStore::new());
    let post_repo = Arc::new(InMemoryPostRepository::new(store.clone()));
    let comment_repo = Arc::new(InMemoryCommentRepository::new(store.clone()));
    let tag_repo = Arc::new(InMemoryTagRepository::new(store.clone()));
    let like_repo = Arc::new(InMemoryLikeRepository::new(store));
    let counter = Arc::new(InMemoryCounterStore::new());
    let policy = Arc::new(ExactMatch);

    let likes = Arc::new(LikeService::new(
        like_repo.clone(),
        post_repo.clone(),
        counter.clone(),
    ));
    let posts = PostService::new(post_repo.clone(), likes.clone(), policy.clone());
    let comments = CommentService::new(comment_repo.clone(), post_repo.clone(), policy);

    Fixture {
        posts,
        comments,
        likes,
        post_repo,
        comment_repo,
        tag_repo,
        like_repo,
        counter,
    }
}

fn create_req(title: &str, content: &str, created_by: &str, tags: &[&str]) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        content: content.to_string(),
        created_by: created_by.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn update_req(title: &str, content: &str, updated_by: &str, tags: &[&str]) -> UpdatePost {
    UpdatePost {
        title: title.to_string(),
        content: content.to_string(),
        updated_by: updated_by.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

mod post_lifecycle {
    use super::*;

    #[tokio::test]
    async fn create_returns_positive_id_and_get_round_trips() {
        let f = fixture();

        let id = f
            .posts
            .create_post(create_req("t1", "c1", "u1", &[]))
            .await
            .unwrap();
        assert!(id > 0);

        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.title, "t1");
        assert_eq!(detail.content, "c1");
        assert_eq!(detail.created_by, "u1");
        assert!(detail.tags.is_empty());
        assert!(detail.comments.is_empty());
        assert_eq!(detail.like_count, 0);
    }

    #[tokio::test]
    async fn create_persists_initial_tags_in_order() {
        let f = fixture();

        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &["tag1", "tag2"]))
            .await
            .unwrap();

        let tags = f.tag_repo.find_by_post_id(id).await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "tag1");
        assert_eq!(tags[1].name, "tag2");
        assert!(tags.iter().all(|t| t.audit.created_by == "u1"));
    }

    #[tokio::test]
    async fn get_missing_post_fails() {
        let f = fixture();
        let err = f.posts.get_post(99).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound { id: 99 }));
    }

    #[tokio::test]
    async fn update_by_creator_round_trips() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("title", "content", "spark", &[]))
            .await
            .unwrap();

        let updated_id = f
            .posts
            .update_post(id, update_req("update title", "update content", "spark", &[]))
            .await
            .unwrap();
        assert_eq!(updated_id, id);

        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.title, "update title");
        assert_eq!(detail.content, "update content");

        let stored = f.post_repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.audit.updated_by.as_deref(), Some("spark"));
        assert!(stored.audit.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_by_other_identity_is_rejected_and_changes_nothing() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("title", "content", "spark", &["a"]))
            .await
            .unwrap();

        let err = f
            .posts
            .update_post(id, update_req("x", "y", "intruder", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotUpdatable { .. }));

        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.title, "title");
        assert_eq!(detail.content, "content");
        assert_eq!(detail.tags, vec!["a"]);
    }

    #[tokio::test]
    async fn update_missing_post_fails() {
        let f = fixture();
        let err = f
            .posts
            .update_post(7, update_req("t", "c", "u", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound { id: 7 }));
    }

    #[tokio::test]
    async fn delete_by_other_identity_is_rejected() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "spark", &[]))
            .await
            .unwrap();

        let err = f.posts.delete_post(id, "intruder").await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotDeletable { .. }));
        assert!(f.posts.get_post(id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_by_creator_cascades_comments_and_tags() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "spark", &["a", "b"]))
            .await
            .unwrap();
        f.comments
            .create_comment(
                id,
                CreateComment {
                    content: "hello".into(),
                    created_by: "other".into(),
                },
            )
            .await
            .unwrap();

        let deleted = f.posts.delete_post(id, "spark").await.unwrap();
        assert_eq!(deleted, id);

        assert!(matches!(
            f.posts.get_post(id).await.unwrap_err(),
            DomainError::PostNotFound { .. }
        ));
        assert!(f.comment_repo.find_by_post_id(id).await.unwrap().is_empty());
        assert!(f.tag_repo.find_by_post_id(id).await.unwrap().is_empty());
    }
}

mod tag_replacement {
    use super::*;

    #[tokio::test]
    async fn identical_sequence_keeps_tag_identities() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &["a", "b"]))
            .await
            .unwrap();
        let before: Vec<i64> = f
            .tag_repo
            .find_by_post_id(id)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();

        f.posts
            .update_post(id, update_req("t2", "c2", "u1", &["a", "b"]))
            .await
            .unwrap();

        let after: Vec<i64> = f
            .tag_repo
            .find_by_post_id(id)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn reordered_sequence_rebuilds_with_new_identities() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &["a", "b"]))
            .await
            .unwrap();
        let before: Vec<i64> = f
            .tag_repo
            .find_by_post_id(id)
            .await
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();

        f.posts
            .update_post(id, update_req("t", "c", "u1", &["b", "a"]))
            .await
            .unwrap();

        let after = f.tag_repo.find_by_post_id(id).await.unwrap();
        let names: Vec<&str> = after.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(after.iter().all(|t| !before.contains(&t.id)));
    }

    #[tokio::test]
    async fn grow_then_reorder_scenario() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &["x", "y"]))
            .await
            .unwrap();

        f.posts
            .update_post(id, update_req("t", "c", "u1", &["x", "y", "z"]))
            .await
            .unwrap();
        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.tags.len(), 3);
        assert_eq!(detail.tags.last().map(String::as_str), Some("z"));

        f.posts
            .update_post(id, update_req("t", "c", "u1", &["z", "y", "x"]))
            .await
            .unwrap();
        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.tags, vec!["z", "y", "x"]);
    }
}

mod comment_lifecycle {
    use super::*;

    #[tokio::test]
    async fn comment_scenario() {
        let f = fixture();
        let post_id = f
            .posts
            .create_post(create_req("t1", "c1", "u1", &[]))
            .await
            .unwrap();

        let comment_id = f
            .comments
            .create_comment(
                post_id,
                CreateComment {
                    content: "hello".into(),
                    created_by: "u2".into(),
                },
            )
            .await
            .unwrap();
        assert!(comment_id > 0);

        let err = f
            .comments
            .update_comment(
                comment_id,
                UpdateComment {
                    content: "hi".into(),
                    updated_by: "u3".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CommentNotUpdatable { .. }));

        f.comments
            .update_comment(
                comment_id,
                UpdateComment {
                    content: "hi".into(),
                    updated_by: "u2".into(),
                },
            )
            .await
            .unwrap();

        let detail = f.posts.get_post(post_id).await.unwrap();
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].content, "hi");
        assert_eq!(detail.comments[0].created_by, "u2");
    }

    #[tokio::test]
    async fn comment_on_missing_post_fails() {
        let f = fixture();
        let err = f
            .comments
            .create_comment(
                1,
                CreateComment {
                    content: "hello".into(),
                    created_by: "u2".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound { id: 1 }));
    }

    #[tokio::test]
    async fn update_missing_comment_fails() {
        let f = fixture();
        let err = f
            .comments
            .update_comment(
                9,
                UpdateComment {
                    content: "hi".into(),
                    updated_by: "u2".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CommentNotFound { id: 9 }));
    }

    #[tokio::test]
    async fn delete_is_ownership_gated() {
        let f = fixture();
        let post_id = f
            .posts
            .create_post(create_req("t", "c", "u1", &[]))
            .await
            .unwrap();
        let comment_id = f
            .comments
            .create_comment(
                post_id,
                CreateComment {
                    content: "hello".into(),
                    created_by: "u2".into(),
                },
            )
            .await
            .unwrap();

        let err = f
            .comments
            .delete_comment(comment_id, "u3")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CommentNotDeletable { .. }));

        f.comments.delete_comment(comment_id, "u2").await.unwrap();
        assert!(
            f.comment_repo
                .find_by_id(comment_id)
                .await
                .unwrap()
                .is_none()
        );
    }
}

mod likes {
    use super::*;

    #[tokio::test]
    async fn like_on_missing_post_fails() {
        let f = fixture();
        let err = f.likes.create_like(3, "u1").await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound { id: 3 }));
    }

    #[tokio::test]
    async fn count_after_n_likes_is_n() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &[]))
            .await
            .unwrap();

        for _ in 0..3 {
            let like_id = f.likes.create_like(id, "u2").await.unwrap();
            assert!(like_id > 0);
        }

        assert_eq!(f.likes.count_like(id).await.unwrap(), 3);
        // Second read hits the populated counter.
        assert_eq!(f.likes.count_like(id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn duplicate_likes_by_same_identity_are_kept() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &[]))
            .await
            .unwrap();

        f.likes.create_like(id, "u2").await.unwrap();
        f.likes.create_like(id, "u2").await.unwrap();

        assert_eq!(f.likes.count_like(id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn cold_counter_is_populated_from_the_repository() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &[]))
            .await
            .unwrap();

        // Rows inserted behind the service's back: the counter knows nothing.
        f.like_repo.save(Like::new(id, "u2")).await.unwrap();
        f.like_repo.save(Like::new(id, "u3")).await.unwrap();
        assert_eq!(f.counter.get(&like_count_key(id)).await, None);

        assert_eq!(f.likes.count_like(id).await.unwrap(), 2);
        assert_eq!(f.counter.get(&like_count_key(id)).await, Some(2));

        // Populate-on-miss only: further out-of-band rows are not seen.
        f.like_repo.save(Like::new(id, "u4")).await.unwrap();
        assert_eq!(f.likes.count_like(id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn detail_projection_uses_the_cached_count() {
        let f = fixture();
        let id = f
            .posts
            .create_post(create_req("t", "c", "u1", &[]))
            .await
            .unwrap();
        f.likes.create_like(id, "u2").await.unwrap();

        let detail = f.posts.get_post(id).await.unwrap();
        assert_eq!(detail.like_count, 1);
    }
}

mod search {
    use super::*;

    async fn seed(f: &Fixture) -> Vec<i64> {
        let mut ids = Vec::new();
        for (title, created_by, tags) in [
            ("alpha one", "spark1", vec!["tag1", "tag2"]),
            ("alpha two", "spark1", vec!["tag1"]),
            ("beta one", "spark2", vec!["tag1", "tag5"]),
            ("beta two", "spark2", vec!["tag5"]),
            ("gamma", "spark2", vec![]),
        ] {
            let id = f
                .posts
                .create_post(create_req(title, "content", created_by, &tags))
                .await
                .unwrap();
            ids.push(id);
        }
        ids
    }

    fn criteria(
        title: Option<&str>,
        created_by: Option<&str>,
        tag: Option<&str>,
    ) -> PostSearchCriteria {
        PostSearchCriteria {
            title: title.map(str::to_string),
            created_by: created_by.map(str::to_string),
            tag: tag.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn no_filters_returns_everything_in_store_order() {
        let f = fixture();
        let ids = seed(&f).await;

        let page = f
            .posts
            .find_page_by(PageRequest::new(0, 10), PostSearchCriteria::default())
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        let got: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(got, ids);
    }

    #[tokio::test]
    async fn title_filter_is_a_substring_match() {
        let f = fixture();
        seed(&f).await;

        let page = f
            .posts
            .find_page_by(PageRequest::new(0, 10), criteria(Some("alpha"), None, None))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.title.contains("alpha")));
    }

    #[tokio::test]
    async fn creator_filter_is_exact() {
        let f = fixture();
        seed(&f).await;

        let page = f
            .posts
            .find_page_by(PageRequest::new(0, 10), criteria(None, Some("spark1"), None))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.created_by == "spark1"));
    }

    #[tokio::test]
    async fn tag_filter_returns_owners_newest_first() {
        let f = fixture();
        let ids = seed(&f).await;

        let page = f
            .posts
            .find_page_by(PageRequest::new(0, 10), criteria(None, None, Some("tag1")))
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        let got: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(got, vec![ids[2], ids[1], ids[0]]);
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let f = fixture();
        seed(&f).await;

        let page = f
            .posts
            .find_page_by(
                PageRequest::new(0, 10),
                criteria(Some("one"), Some("spark2"), Some("tag5")),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "beta one");
    }

    #[tokio::test]
    async fn summary_carries_the_first_tag() {
        let f = fixture();
        let ids = seed(&f).await;

        let page = f
            .posts
            .find_page_by(PageRequest::new(0, 10), PostSearchCriteria::default())
            .await
            .unwrap();

        let first = page.items.iter().find(|p| p.id == ids[0]).unwrap();
        assert_eq!(first.first_tag.as_deref(), Some("tag1"));
        let last = page.items.iter().find(|p| p.id == ids[4]).unwrap();
        assert_eq!(last.first_tag, None);
    }

    #[tokio::test]
    async fn pagination_slices_and_reports_totals() {
        let f = fixture();
        let ids = seed(&f).await;

        let first = f
            .posts
            .find_page_by(PageRequest::new(0, 2), PostSearchCriteria::default())
            .await
            .unwrap();
        assert_eq!(first.total, 5);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].id, ids[0]);

        let last = f
            .posts
            .find_page_by(PageRequest::new(2, 2), PostSearchCriteria::default())
            .await
            .unwrap();
        assert_eq!(last.total, 5);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, ids[4]);
    }
}
