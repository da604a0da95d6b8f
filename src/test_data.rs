#[cfg(test)]
pub const POST_DATA: &str = r##"[DESCRIPTION]: # (Everything you need to start a content-driven site)
[DATE]: # (2024-04-22)
[TAGS]: # (astro tutorial astro)
[CATEGORY]: # (Tutorials)
[IMAGE]: # (/images/astro-cover.jpg)
[AUTHOR]: # (Alice)
[READING_TIME]: # (7)

# Getting started with Astro

Static sites are fast because there is nothing left to compute at request
time. This post walks through setting up a content collection, writing a
first entry, and shipping it.

<!-- A build note that should never reach the rendered page -->

The rest of the post goes here.
"##;

#[cfg(test)]
pub const MINIMAL_POST: &str = r##"[DESCRIPTION]: # (The smallest valid post)
[DATE]: # (2024-01-15)

# A minimal post

Just a body.
"##;
