use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::format_date;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    head: &'a str,
    post_list: Vec<PostItem>,
}

#[derive(ramhorns::Content)]
struct PostItem {
    link: String,
    title: String,
    description: String,
    date: String,
    category: String,
    tags: Vec<ListTag>,
}

#[derive(ramhorns::Content)]
struct ListTag {
    tag: String,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, posts: &[Post], head: &str) -> String {
        let post_list = posts
            .iter()
            .map(|post| PostItem {
                link: format!("/blog/{}", post.slug),
                title: post.title.clone(),
                description: post.description.clone(),
                date: format_date(&post.publish_date),
                category: post.category.clone(),
                tags: post.tags.iter().map(|t| ListTag { tag: t.clone() }).collect(),
            })
            .collect();

        self.template.render(&ListPage {
            head,
            post_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::test_data::{MINIMAL_POST, POST_DATA};

    use super::*;

    #[test]
    fn render_list() {
        let template_src = r##"{{#post_list}}ITEM=[{{link}}|{{title}}|{{date}}|{{category}}]
{{/post_list}}"##;
        let renderer = ListRenderer::new(template_src).unwrap();

        let posts = vec![
            Post::from_string("getting-started-with-astro", &PathBuf::from("a/index.md"), POST_DATA).unwrap(),
            Post::from_string("a-minimal-post", &PathBuf::from("b.md"), MINIMAL_POST).unwrap(),
        ];

        let res = renderer.render(&posts, "");
        assert_eq!(res, r##"ITEM=[/blog/getting-started-with-astro|Getting started with Astro|2024-04-22|Tutorials]
ITEM=[/blog/a-minimal-post|A minimal post|2024-01-15|General]
"##);
    }
}
