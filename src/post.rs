use fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fmt, fs, io};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::text_utils::parse_date;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_AUTHOR: &str = "Astro Team";

/// A single blog entry, loaded and validated at build time.
/// `slug` is the link key and must be unique across the whole site.
pub struct Post {
    pub file_name: PathBuf,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub author: String,
    pub reading_time: Option<u32>,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, author={}, category={}\ntitle={}\ndescription={}",
               self.slug,
               self.publish_date,
               self.author,
               self.category,
               self.title,
               self.description,
        )
    }
}

/// Example of post
/// [DESCRIPTION]: # (Everything you need to start a content-driven site)
/// [DATE]: # (2024-04-22)
/// [TAGS]: # (astro tutorial)
/// [CATEGORY]: # (Tutorials)
///
/// # Getting started with Astro
impl Post {
    pub fn from(slug: &str, file_name: &PathBuf) -> io::Result<Post> {
        let lines = fs::read_to_string(file_name)?;

        Self::from_string(slug, file_name, &lines)
    }

    pub fn from_string(slug: &str, file_name: &PathBuf, content: &str) -> io::Result<Post> {
        let mut lines = content.lines();

        let mut description: Option<String> = None;
        let mut date: Option<String> = None;
        let mut tags: String = "".to_string();
        let mut category: Option<String> = None;
        let mut image: Option<String> = None;
        let mut author: Option<String> = None;
        let mut reading_time: Option<String> = None;
        let title: String;

        let mut maybe_line = lines.next();

        // Skip optional HTML comment in the beginning
        let mut start_with_comment = false;

        loop {
            if let Some(line) = maybe_line {
                let line = line.trim();

                // Empty lines are ok
                if line.is_empty() {
                    maybe_line = lines.next();
                    continue;
                }

                if line == "<!--" {
                    maybe_line = lines.next();
                    start_with_comment = true;
                }
                break;
            } else {
                break;
            }
        }

        loop {
            if let Some(line) = maybe_line {
                if line.is_empty() {
                    maybe_line = lines.next();
                    continue;
                }

                let (key, val) = match Self::extract_header(line) {
                    None => break,
                    Some((k, v)) => (k, v),
                };

                match key {
                    "DESCRIPTION" => description = Some(val.to_string()),
                    "DATE" => date = Some(val.to_string()),
                    "TAGS" => tags = val.to_string(),
                    "CATEGORY" => category = Some(val.to_string()),
                    "IMAGE" => image = Some(val.to_string()),
                    "AUTHOR" => author = Some(val.to_string()),
                    "READING_TIME" => reading_time = Some(val.to_string()),
                    _ => {}
                }
            } else {
                break;
            }
            maybe_line = lines.next();
        }

        if start_with_comment {
            // Let's find the end of the comment
            loop {
                if let Some(line) = maybe_line {
                    let line = line.trim();

                    // Empty lines are ok.
                    if line.is_empty() {
                        maybe_line = lines.next();
                        continue;
                    }

                    if line == "-->" {
                        break;
                    }
                } else {
                    return Err(invalid_record(file_name, "End of comment in the header is missing"));
                }

                maybe_line = lines.next();
            }
        }

        // After the header, comes the title
        loop {
            if let Some(line) = maybe_line {
                if line.starts_with("# ") {
                    title = line[2..line.len()].to_string();
                    break;
                }
            } else {
                return Err(invalid_record(file_name, "Missing required title"));
            }
            maybe_line = lines.next();
        }

        let mut body = String::new();
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }

        // Required fields fail the record; optional ones fall back to defaults
        let description = match description {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(invalid_record(file_name, "Missing required description")),
        };

        let date_str = match date {
            Some(d) => d,
            None => return Err(invalid_record(file_name, "Missing required publish date")),
        };
        let publish_date = match parse_date(&date_str) {
            Ok(d) => d,
            Err(e) => return Err(invalid_record(file_name, &e)),
        };

        let reading_time = match reading_time {
            None => None,
            Some(rt) => match rt.trim().parse::<u32>() {
                Ok(minutes) => Some(minutes),
                Err(_) => return Err(invalid_record(file_name, &format!("Invalid reading time {}", rt))),
            },
        };

        let tags = Self::extract_tags(&tags);

        Ok(Post {
            file_name: file_name.clone(),
            slug: slug.to_string(),
            title,
            description,
            publish_date,
            tags,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image,
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            reading_time,
            body,
        })
    }

    fn extract_header(line: &str) -> Option<(&str, &str)> {
        lazy_static! {
            static ref HEADER_REGEX : Regex = Regex::new(
                r"\[(?P<key>\w+)\]: # \((?P<value>.+)\)"
            ).unwrap();
        }

        let res = HEADER_REGEX.captures(line).and_then(|cap| {
            let key = cap.name("key").map(|key| key.as_str());
            let val = cap.name("value").map(|key| key.as_str());
            match (key, val) {
                (Some(key), Some(val)) => Some((key, val)),
                _ => None
            }
        });

        res
    }

    fn extract_tags(tags_str: &str) -> Vec<String> {
        // Duplicates are kept - tags are display data, not a set
        tags_str.split(' ')
            .filter(|x| !x.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

fn invalid_record(file_name: &PathBuf, msg: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", msg, file_name.to_str().unwrap()))
}

#[cfg(test)]
mod tests {
    use crate::test_data::{MINIMAL_POST, POST_DATA};

    use super::*;

    #[test]
    fn test_extract_header() {
        let res = Post::extract_header("[DESCRIPTION]: # (Everything you need to start)");
        assert_eq!(res, Some(("DESCRIPTION", "Everything you need to start")));
        let res = Post::extract_header("[DATE]: # (2024-04-22)");
        assert_eq!(res, Some(("DATE", "2024-04-22")));
        let res = Post::extract_header("[TAGS]: # (astro tutorial)");
        assert_eq!(res, Some(("TAGS", "astro tutorial")));

        let res = Post::extract_header("[AUTHOR]: (thiago)");
        assert!(res.is_none());
    }

    #[test]
    fn test_from_string() {
        let file_name = PathBuf::from("posts/getting-started-with-astro/index.md");
        let post = Post::from_string("getting-started-with-astro", &file_name, POST_DATA).unwrap();
        assert_eq!(post.slug, "getting-started-with-astro");
        assert_eq!(post.title, "Getting started with Astro");
        assert_eq!(post.description, "Everything you need to start a content-driven site");
        assert_eq!(post.publish_date, NaiveDate::from_ymd_opt(2024, 4, 22).unwrap());
        assert_eq!(post.tags, ["astro", "tutorial", "astro"]);
        assert_eq!(post.category, "Tutorials");
        assert_eq!(post.image.as_deref(), Some("/images/astro-cover.jpg"));
        assert_eq!(post.author, "Alice");
        assert_eq!(post.reading_time, Some(7));
        assert!(post.body.contains("Static sites are fast"));
    }

    #[test]
    fn test_schema_defaults() {
        let file_name = PathBuf::from("posts/minimal.md");
        let post = Post::from_string("minimal", &file_name, MINIMAL_POST).unwrap();
        assert_eq!(post.tags, Vec::<String>::new());
        assert_eq!(post.category, DEFAULT_CATEGORY);
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert!(post.image.is_none());
        assert!(post.reading_time.is_none());
    }

    #[test]
    fn test_missing_title_fails() {
        let data = "[DESCRIPTION]: # (desc)\n[DATE]: # (2024-04-22)\n\nNo title here\n";
        let file_name = PathBuf::from("posts/broken.md");
        let res = Post::from_string("broken", &file_name, data);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_description_fails() {
        let data = "[DATE]: # (2024-04-22)\n\n# A title\n\nBody\n";
        let file_name = PathBuf::from("posts/broken.md");
        let res = Post::from_string("broken", &file_name, data);
        assert!(res.is_err());
    }

    #[test]
    fn test_bad_date_fails() {
        let data = "[DESCRIPTION]: # (desc)\n[DATE]: # (soon)\n\n# A title\n";
        let file_name = PathBuf::from("posts/broken.md");
        let res = Post::from_string("broken", &file_name, data);
        assert!(res.is_err());
    }

    #[test]
    fn test_extract_tags() {
        let tags_str = "one two three   four";
        let tags = Post::extract_tags(tags_str);
        assert_eq!(tags, ["one", "two", "three", "four"]);
    }
}
