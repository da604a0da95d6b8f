use std::ops::Index;

use chrono::NaiveDate;
use regex::Regex;
use unidecode::unidecode;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    // Time of day is accepted and discarded - posts are dated by calendar day
    let patt = r#"(\d{4})-(\d{0,2})-(\d{0,2})( \d{0,2}:\d{0,2}:\d{0,2}(\.\d{0,3})?)?"#;
    let re = Regex::new(patt).unwrap();
    let Some(caps) = re.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    // We are using the regex approach to make it more flexible
    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;

    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => Ok(date),
        None => Err(format!("Date {} is out of range", buf)),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Turns a post title into a link-safe slug, e.g.
/// "Getting Started with Astro" -> "getting-started-with-astro"
pub fn slugify(title: &str) -> String {
    let ascii = unidecode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let date = parse_date("2024-04-22").unwrap();
        assert_eq!(format_date(&date), "2024-04-22");
    }

    #[test]
    fn test_parse_date_with_time() {
        let date = parse_date("2017-09-10 10:42:32.123").unwrap();
        assert_eq!(format_date(&date), "2017-09-10");

        let date = parse_date("2017-09-10 10:42:32").unwrap();
        assert_eq!(format_date(&date), "2017-09-10");
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("2024-13-45").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started with Astro"), "getting-started-with-astro");
        assert_eq!(slugify("  Rust & WebAssembly!  "), "rust-webassembly");
        assert_eq!(slugify("Café Décor"), "cafe-decor");
        assert_eq!(slugify(""), "");
    }
}
