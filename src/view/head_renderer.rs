use std::io;
use std::io::ErrorKind;

use ramhorns::Template;
use serde_json::Value;

use crate::seo::SeoTags;

#[derive(ramhorns::Content)]
struct MetaTag {
    property: String,
    content: String,
}

#[derive(ramhorns::Content)]
struct HeadView<'a> {
    title: &'a str,
    description: &'a str,
    canonical: &'a str,
    meta: Vec<MetaTag>,
    structured_data: Vec<StructuredDataView>,
}

#[derive(ramhorns::Content)]
struct StructuredDataView {
    json: String,
}

/// Renders an SEO tag bundle plus JSON-LD blocks into a head fragment.
/// The tag set is flattened into property/content pairs so the template
/// stays a single loop.
pub struct HeadRenderer<'a> {
    pub template: Template<'a>,
}

impl HeadRenderer<'_> {
    pub fn new(head_tpl_src: &str) -> io::Result<HeadRenderer> {
        let template = match Template::new(head_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing head template: {}", e)));
            }
        };

        Ok(HeadRenderer {
            template,
        })
    }

    pub fn render(&self, tags: &SeoTags, structured_data: &[Value]) -> String {
        let mut meta = vec![];
        let og = &tags.open_graph;

        push_meta(&mut meta, "og:title", &og.title);
        push_meta(&mut meta, "og:description", &og.description);
        push_meta(&mut meta, "og:url", &og.url);
        push_meta(&mut meta, "og:site_name", &og.site_name);
        for image in og.images.iter() {
            push_meta(&mut meta, "og:image", image);
        }
        push_meta(&mut meta, "og:locale", &og.locale);
        push_meta(&mut meta, "og:type", &og.content_type);
        if let Some(ref published) = og.published_time {
            push_meta(&mut meta, "article:published_time", published);
        }
        if let Some(ref modified) = og.modified_time {
            push_meta(&mut meta, "article:modified_time", modified);
        }
        for tag in og.tags.iter() {
            push_meta(&mut meta, "article:tag", tag);
        }

        let tw = &tags.twitter;
        push_meta(&mut meta, "twitter:card", &tw.card);
        push_meta(&mut meta, "twitter:title", &tw.title);
        push_meta(&mut meta, "twitter:description", &tw.description);
        if let Some(ref image) = tw.image {
            push_meta(&mut meta, "twitter:image", image);
        }
        if let Some(ref creator) = tw.creator {
            push_meta(&mut meta, "twitter:creator", creator);
        }

        let structured_data = structured_data
            .iter()
            .map(|value| StructuredDataView { json: value.to_string() })
            .collect();

        self.template.render(&HeadView {
            title: tags.title.as_str(),
            description: tags.description.as_str(),
            canonical: tags.canonical.as_str(),
            meta,
            structured_data,
        })
    }
}

fn push_meta(meta: &mut Vec<MetaTag>, property: &str, content: &str) {
    meta.push(MetaTag {
        property: property.to_string(),
        content: content.to_string(),
    });
}
