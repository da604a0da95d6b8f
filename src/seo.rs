use serde_json::{json, Value};

use crate::config::SiteConfig;

/// Per-page inputs to the tag builder. Every field is optional; absent values
/// resolve through the site defaults, never through an error.
#[derive(Default, Clone)]
pub struct SeoProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub content_type: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<String>,
    pub locale: String,
    pub content_type: String,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub creator: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

pub enum DocumentType {
    Article,
    WebSite,
    Blog,
}

/// Inputs for the `Article` structured-data block. The caller supplies the
/// headline, description, image and publish date; the modification date
/// defaults to the publish date and the author to the site author.
pub struct ArticleData {
    pub headline: String,
    pub description: String,
    pub image: String,
    pub date_published: String,
    pub date_modified: Option<String>,
    pub author: Option<String>,
}

pub fn generate_seo_tags(site: &SiteConfig, props: &SeoProps, current_url: Option<&str>) -> SeoTags {
    let title = props.title.as_deref().unwrap_or(&site.title);
    let description = props.description.as_deref().unwrap_or(&site.description);
    let image = props.image.as_deref().or(site.og_image.as_deref());
    let content_type = props.content_type.as_deref().unwrap_or("website");

    // The site's own title stands alone; every other page gets the suffix
    let full_title = if title == site.title {
        title.to_string()
    } else {
        format!("{} | {}", title, site.title)
    };

    // With no page image and no site share image there is nothing to emit
    let full_image = image.filter(|img| !img.is_empty()).map(|img| {
        if img.starts_with("http") {
            img.to_string()
        } else {
            format!("{}{}", site.url, img)
        }
    });

    let page_url = current_url.unwrap_or(&site.url).to_string();

    SeoTags {
        title: full_title.clone(),
        description: description.to_string(),
        canonical: page_url.clone(),
        open_graph: OpenGraph {
            title: full_title.clone(),
            description: description.to_string(),
            url: page_url,
            site_name: site.title.clone(),
            images: full_image.clone().into_iter().collect(),
            locale: "en_US".to_string(),
            content_type: content_type.to_string(),
            published_time: props.published_time.clone(),
            modified_time: props.modified_time.clone(),
            tags: props.tags.clone(),
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: full_title,
            description: description.to_string(),
            image: full_image,
            creator: site.twitter_handle.clone(),
        },
    }
}

pub fn generate_structured_data(site: &SiteConfig, doc_type: DocumentType, article: Option<&ArticleData>) -> Value {
    match doc_type {
        DocumentType::Article => {
            let Some(data) = article else {
                return json!({
                    "@context": "https://schema.org",
                    "@type": "Article",
                });
            };
            let date_modified = data.date_modified.as_deref().unwrap_or(&data.date_published);
            let author = data.author.as_deref().unwrap_or(&site.author);
            json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": data.headline,
                "description": data.description,
                "image": data.image,
                "datePublished": data.date_published,
                "dateModified": date_modified,
                "author": {
                    "@type": "Person",
                    "name": author,
                },
                "publisher": {
                    "@type": "Organization",
                    "name": site.title,
                },
            })
        }
        DocumentType::WebSite => json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": site.title,
            "description": site.description,
            "url": site.url,
        }),
        DocumentType::Blog => json!({
            "@context": "https://schema.org",
            "@type": "Blog",
        }),
    }
}
