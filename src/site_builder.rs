use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use spdlog::info;

use crate::config::Config;
use crate::post::Post;
use crate::post_list::load_posts;
use crate::post_render::render_body;
use crate::seo::{generate_seo_tags, generate_structured_data, ArticleData, DocumentType, SeoProps};
use crate::text_utils::format_date;
use crate::view::head_renderer::HeadRenderer;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::sitemap_renderer::{Sitemap, SitemapEntry};

pub struct BuildReport {
    pub post_count: usize,
    pub page_count: usize,
}

fn read_template(template_dir: &Path, name: &str) -> io::Result<String> {
    let path = template_dir.join(name);
    match fs::read_to_string(&path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error opening template {}: {}", path.display(), e))),
    }
}

fn post_seo_props(post: &Post) -> SeoProps {
    SeoProps {
        title: Some(post.title.clone()),
        description: Some(post.description.clone()),
        image: post.image.clone(),
        content_type: Some("article".to_string()),
        published_time: Some(format_date(&post.publish_date)),
        modified_time: None,
        tags: post.tags.clone(),
    }
}

/// Renders every post page, the index page and the sitemap into the
/// output directory.
pub fn build_site(config: &Config) -> io::Result<BuildReport> {
    let site = &config.site;
    let posts = load_posts(&config.paths.posts_dir)?;

    let head_tpl = read_template(&config.paths.template_dir, "head.tpl")?;
    let view_tpl = read_template(&config.paths.template_dir, "view.tpl")?;
    let list_tpl = read_template(&config.paths.template_dir, "list.tpl")?;
    let head_renderer = HeadRenderer::new(&head_tpl)?;
    let post_renderer = PostRenderer::new(&view_tpl)?;
    let list_renderer = ListRenderer::new(&list_tpl)?;

    let out_dir = &config.paths.output_dir;
    let mut page_count = 0;

    for post in posts.iter() {
        let page_url = format!("{}/blog/{}/", site.url.trim_end_matches('/'), post.slug);
        let tags = generate_seo_tags(site, &post_seo_props(post), Some(&page_url));

        let article = ArticleData {
            headline: post.title.clone(),
            description: post.description.clone(),
            image: tags.twitter.image.clone().unwrap_or_default(),
            date_published: format_date(&post.publish_date),
            date_modified: None,
            author: Some(post.author.clone()),
        };
        let structured = generate_structured_data(site, DocumentType::Article, Some(&article));

        let head = head_renderer.render(&tags, &[structured]);
        let body = render_body(&post.body)?;
        let page = post_renderer.render(post, &head, &body);

        let post_dir = out_dir.join("blog").join(&post.slug);
        fs::create_dir_all(&post_dir)?;
        fs::write(post_dir.join("index.html"), page)?;
        page_count += 1;

        info!("Rendered post {}", post.slug);
    }

    // Index page
    let tags = generate_seo_tags(site, &SeoProps::default(), None);
    let structured = vec![
        generate_structured_data(site, DocumentType::WebSite, None),
        generate_structured_data(site, DocumentType::Blog, None),
    ];
    let head = head_renderer.render(&tags, &structured);
    let index_page = list_renderer.render(&posts, &head);
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join("index.html"), index_page)?;
    page_count += 1;

    write_sitemap(config, &posts)?;

    info!("Site build finished: {} posts, {} pages", posts.len(), page_count);

    Ok(BuildReport {
        post_count: posts.len(),
        page_count,
    })
}

fn write_sitemap(config: &Config, posts: &[Post]) -> io::Result<()> {
    let mut entries = vec![];
    if let Some(newest) = posts.first() {
        entries.push(SitemapEntry {
            path: "/".to_string(),
            lastmod: newest.publish_date,
        });
    }
    for post in posts {
        entries.push(SitemapEntry {
            path: format!("/blog/{}", post.slug),
            lastmod: post.publish_date,
        });
    }

    let sitemap = Sitemap { base_url: config.site.url.as_str() };
    let xml = match sitemap.render(&entries) {
        Ok(xml) => xml,
        Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, format!("Error rendering sitemap: {}", e))),
    };

    fs::write(config.paths.output_dir.join("sitemap.xml"), xml)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{Paths, SiteConfig};
    use crate::test_data::{MINIMAL_POST, POST_DATA};

    use super::*;

    const HEAD_TPL: &str = r##"<title>{{title}}</title>{{#meta}}<meta property="{{property}}" content="{{content}}"/>{{/meta}}{{#structured_data}}<script type="application/ld+json">{{{json}}}</script>{{/structured_data}}"##;
    const VIEW_TPL: &str = r##"<html><head>{{{head}}}</head><body><h1>{{post_title}}</h1>{{{post_content}}}</body></html>"##;
    const LIST_TPL: &str = r##"<html><head>{{{head}}}</head><body>{{#post_list}}<a href="{{link}}">{{title}}</a>{{/post_list}}</body></html>"##;

    fn test_config(root: &PathBuf) -> Config {
        Config {
            site: SiteConfig {
                title: "My Blog".to_string(),
                description: "Posts".to_string(),
                url: "https://example.com".to_string(),
                author: "Me".to_string(),
                twitter_handle: None,
                og_image: Some("/og.jpg".to_string()),
            },
            paths: Paths {
                posts_dir: root.join("posts"),
                template_dir: root.join("templates"),
                output_dir: root.join("public"),
            },
            log: None,
        }
    }

    #[test]
    fn test_build_site() -> io::Result<()> {
        let root = std::env::temp_dir().join("islet-build-test");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("posts/getting-started-with-astro"))?;
        fs::write(root.join("posts/getting-started-with-astro/index.md"), POST_DATA)?;
        fs::write(root.join("posts/a-minimal-post.md"), MINIMAL_POST)?;
        fs::create_dir_all(root.join("templates"))?;
        fs::write(root.join("templates/head.tpl"), HEAD_TPL)?;
        fs::write(root.join("templates/view.tpl"), VIEW_TPL)?;
        fs::write(root.join("templates/list.tpl"), LIST_TPL)?;

        let config = test_config(&root);
        let report = build_site(&config)?;
        assert_eq!(report.post_count, 2);
        assert_eq!(report.page_count, 3);

        let post_page = fs::read_to_string(root.join("public/blog/getting-started-with-astro/index.html"))?;
        assert!(post_page.contains("<title>Getting started with Astro | My Blog</title>"));
        assert!(post_page.contains("Static sites are fast"));
        // The build-note HTML comment must not survive rendering
        assert!(!post_page.contains("never reach the rendered page"));

        let index_page = fs::read_to_string(root.join("public/index.html"))?;
        assert!(index_page.contains(r#"<a href="/blog/getting-started-with-astro">"#));
        assert!(index_page.contains("<title>My Blog</title>"));

        let sitemap = fs::read_to_string(root.join("public/sitemap.xml"))?;
        assert!(sitemap.contains("<loc>https://example.com/blog/a-minimal-post/</loc>"));

        fs::remove_dir_all(&root)?;
        Ok(())
    }
}
