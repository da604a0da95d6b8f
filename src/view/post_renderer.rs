use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::format_date;

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    head: &'a str,
    slug: &'a str,
    author: &'a str,
    category: &'a str,
    tags: Vec<ViewTag<'a>>,
    date: String,
    has_reading_time: bool,
    reading_time: u32,
    post_title: &'a str,
    post_content: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post, head: &str, body_html: &str) -> String {
        let tags: Vec<ViewTag> = post.tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
        self.template.render(&ViewItem {
            head,
            slug: post.slug.as_str(),
            author: post.author.as_str(),
            category: post.category.as_str(),
            tags,
            date: format_date(&post.publish_date),
            has_reading_time: post.reading_time.is_some(),
            reading_time: post.reading_time.unwrap_or(0),
            post_title: post.title.as_str(),
            post_content: body_html,
        })
    }
}
