use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::post::Post;

/// Scans the content store. Posts live either as loose `.md` files or as one
/// directory per post with an index file inside; the slug is the file stem or
/// the directory name.
pub struct PostList {
    pub root_dir: PathBuf,
    pub post_file: String,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type() {
                if !file_type.is_file() {
                    continue;
                }
                let file_name = entry.file_name();
                if let Some(file_name) = file_name.to_str() {
                    if file_name.ends_with(".md") {
                        posts.push(entry.path());
                    }
                }
            }
        }
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<(PathBuf, String)>> {
        // Per directory, we should have a file called index.md
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        // Filtering only the dirs with a post inside
        let post_dirs = Self::filter_dirs(&self.post_file, dirs)?;
        Ok(post_dirs)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        let entries = fs::read_dir(posts_dir)?;
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type() {
                if file_type.is_dir() {
                    dirs.push(entry.path());
                }
            }
        }
        Ok(dirs)
    }

    fn filter_dirs(post_file: &str, dirs: Vec<PathBuf>) -> io::Result<Vec<(PathBuf, String)>> {
        let mut post_dirs = vec![];
        for dir in dirs {
            if let Some(file_name) = Self::contains_file(&dir, post_file)? {
                post_dirs.push((dir, file_name));
            }
        }
        Ok(post_dirs)
    }

    fn contains_file(dir: &PathBuf, base_name: &str) -> io::Result<Option<String>> {
        let entries = fs::read_dir(dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let file_name = entry.file_name().to_str().unwrap().to_string();
                if file_name == base_name {
                    return Ok(Some(file_name));
                }
            }
        }

        Ok(None)
    }
}

fn slug_of(path: &Path) -> io::Result<String> {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => Ok(stem.to_string()),
        None => Err(io::Error::new(ErrorKind::InvalidData, format!("Invalid post path {}", path.display()))),
    }
}

/// Loads and validates the whole content store. A record failing validation
/// fails the load; duplicate slugs fail the load as well since the slug is
/// the link key.
pub fn load_posts(posts_dir: &Path) -> io::Result<Vec<Post>> {
    let post_list = PostList {
        root_dir: posts_dir.to_path_buf(),
        post_file: "index.md".to_string(),
    };

    let mut sources: Vec<(String, PathBuf)> = vec![];
    for file in post_list.retrieve_files()? {
        sources.push((slug_of(&file)?, file));
    }
    for (dir, file_name) in post_list.retrieve_dirs()? {
        let slug = slug_of(&dir)?;
        sources.push((slug, dir.join(file_name)));
    }

    let mut seen = HashSet::new();
    let mut posts = vec![];
    for (slug, path) in sources {
        if !seen.insert(slug.clone()) {
            return Err(io::Error::new(ErrorKind::InvalidData, format!("Duplicate post slug {}", slug)));
        }
        posts.push(Post::from(&slug, &path)?);
    }

    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use crate::test_data::{MINIMAL_POST, POST_DATA};

    use super::*;

    fn write_store(root: &Path) {
        fs::create_dir_all(root.join("getting-started-with-astro")).unwrap();
        fs::write(root.join("getting-started-with-astro/index.md"), POST_DATA).unwrap();
        fs::write(root.join("a-minimal-post.md"), MINIMAL_POST).unwrap();
    }

    #[test]
    fn test_load_posts() -> io::Result<()> {
        let root = std::env::temp_dir().join("islet-post-list-test");
        let _ = fs::remove_dir_all(&root);
        write_store(&root);

        let posts = load_posts(&root)?;
        assert_eq!(posts.len(), 2);
        // Newest first
        assert_eq!(posts[0].slug, "getting-started-with-astro");
        assert_eq!(posts[1].slug, "a-minimal-post");

        fs::remove_dir_all(&root)?;
        Ok(())
    }

    #[test]
    fn test_post_file_name_must_match_exactly() -> io::Result<()> {
        let root = std::env::temp_dir().join("islet-post-exact-test");
        let _ = fs::remove_dir_all(&root);

        // A leftover backup next to the real post must not be picked up,
        // and a directory holding only near-misses has no post at all
        fs::create_dir_all(root.join("real-post"))?;
        fs::write(root.join("real-post/index.md"), MINIMAL_POST)?;
        fs::write(root.join("real-post/index.md.bak"), "not a post")?;
        fs::create_dir_all(root.join("stale-post"))?;
        fs::write(root.join("stale-post/old-index.md"), "not a post")?;

        let posts = load_posts(&root)?;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "real-post");
        assert_eq!(posts[0].file_name, root.join("real-post/index.md"));

        fs::remove_dir_all(&root)?;
        Ok(())
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let root = std::env::temp_dir().join("islet-post-dup-test");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("a-minimal-post")).unwrap();
        fs::write(root.join("a-minimal-post/index.md"), MINIMAL_POST).unwrap();
        fs::write(root.join("a-minimal-post.md"), MINIMAL_POST).unwrap();

        let res = load_posts(&root);
        assert!(res.is_err());

        fs::remove_dir_all(&root).unwrap();
    }
}
