use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

/// Site-wide identity, read once at startup and immutable afterwards.
/// Consumed by the SEO tag builder and the renderers.
#[derive(Deserialize, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub twitter_handle: Option<String>,
    pub og_image: Option<String>,
}

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: Paths,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
        template_dir: parse_path(cfg.paths.template_dir),
        output_dir: parse_path(cfg.paths.output_dir),
    };

    Ok(cfg)
}
