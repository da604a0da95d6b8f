use std::time::Duration;

use chrono::{DateTime, Utc};

const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// A comment lives only in this widget instance's memory. Nothing is sent
/// anywhere and nothing survives a page reload.
#[derive(Clone, PartialEq, Debug)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// The editable form fields. Name, email and comment are all required
/// before a submission goes through.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl CommentForm {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.comment.trim().is_empty()
    }
}

/// Per-page comment form. Submission stalls for a fixed delay to model the
/// network round trip the real widget would make; while pending, the submit
/// control is disabled so at most one submission is in flight.
pub struct CommentWidget {
    post_slug: String,
    comments: Vec<Comment>,
    submitting: bool,
    form: CommentForm,
    delay: Duration,
}

impl CommentWidget {
    pub fn new(post_slug: &str) -> Self {
        Self::with_delay(post_slug, SUBMIT_DELAY)
    }

    pub fn with_delay(post_slug: &str, delay: Duration) -> Self {
        CommentWidget {
            post_slug: post_slug.to_string(),
            comments: vec![],
            submitting: false,
            form: CommentForm::default(),
            delay,
        }
    }

    pub fn post_slug(&self) -> &str {
        &self.post_slug
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn form(&self) -> &CommentForm {
        &self.form
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.form.email = email.to_string();
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.form.comment = comment.to_string();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The submit button is disabled while a submission is pending or a
    /// required field is still blank.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.form.is_complete()
    }

    /// Appends one comment after the simulated delay and resets the form.
    /// Returns the new comment, or None when the submission was refused
    /// (already pending, or required fields missing). There is no way to
    /// cancel once started.
    pub async fn submit(&mut self) -> Option<Comment> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        tokio::time::sleep(self.delay).await;

        let now = Utc::now();
        let comment = Comment {
            id: now.timestamp_millis().to_string(),
            author: self.form.name.clone(),
            content: self.form.comment.clone(),
            date: now,
        };

        self.comments.push(comment.clone());
        self.form = CommentForm::default();
        self.submitting = false;

        Some(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_widget() -> CommentWidget {
        CommentWidget::with_delay("getting-started-with-astro", Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_submit_appends_and_resets() {
        let mut w = test_widget();
        w.set_name("Alice");
        w.set_email("a@x.com");
        w.set_comment("Hi");

        let added = w.submit().await;
        assert!(added.is_some());

        assert_eq!(w.comments().len(), 1);
        let comment = &w.comments()[0];
        assert_eq!(comment.author, "Alice");
        assert_eq!(comment.content, "Hi");
        assert!(!comment.id.is_empty());

        // Form cleared, widget idle again
        assert_eq!(w.form(), &CommentForm::default());
        assert!(!w.is_submitting());
    }

    #[tokio::test]
    async fn test_comments_append_in_order() {
        let mut w = test_widget();

        w.set_name("Alice");
        w.set_email("a@x.com");
        w.set_comment("First");
        w.submit().await;

        w.set_name("Bob");
        w.set_email("b@x.com");
        w.set_comment("Second");
        w.submit().await;

        let authors: Vec<&str> = w.comments().iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_required_fields_block_submission() {
        let mut w = test_widget();
        w.set_name("Alice");
        w.set_comment("Hi");
        // No email
        assert!(!w.can_submit());
        assert!(w.submit().await.is_none());
        assert!(w.comments().is_empty());
    }

    #[tokio::test]
    async fn test_pending_submission_disables_resubmit() {
        let mut w = test_widget();
        w.set_name("Alice");
        w.set_email("a@x.com");
        w.set_comment("Hi");

        // While pending the submit control reports disabled
        w.submitting = true;
        assert!(!w.can_submit());
        assert!(w.submit().await.is_none());
        assert!(w.comments().is_empty());

        w.submitting = false;
        w.submit().await;
        assert_eq!(w.comments().len(), 1);
    }
}
