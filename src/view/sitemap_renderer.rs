use std::io::Cursor;

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::text_utils::format_date;

/* Example
<?xml version="1.0" encoding="UTF-8" ?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/</loc>
    <lastmod>2024-04-22</lastmod>
  </url>
  <url>
    <loc>https://example.com/blog/getting-started-with-astro/</loc>
    <lastmod>2024-04-22</lastmod>
  </url>
</urlset>
*/

pub struct SitemapEntry {
    pub path: String,
    pub lastmod: NaiveDate,
}

pub struct Sitemap<'a> {
    pub base_url: &'a str,
}

impl<'a> Sitemap<'a> {
    pub fn render(&self, entries: &[SitemapEntry]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        // <?xml version="1.0" encoding="UTF-8" ?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"));
        writer.write_event(Event::Start(urlset))?;

        for entry in entries {
            // <url>
            writer.write_event(Event::Start(BytesStart::new("url")))?;

            // <loc>https://example.com/blog/some-post/</loc>
            let loc = full_link(self.base_url, entry.path.as_str());
            push_text(&mut writer, "loc", loc.as_str())?;

            // <lastmod>2024-04-22</lastmod>
            push_text(&mut writer, "lastmod", format_date(&entry.lastmod).as_str())?;

            // </url>
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        // </urlset>
        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn full_link(base_url: &str, path: &str) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);

    let path = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };

    if path == "/" {
        return format!("{}/", base_url);
    }
    format!("{}{}", base_url, path)
}
