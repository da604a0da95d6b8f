pub mod comments;
pub mod config;
pub mod logger;
pub mod post;
pub mod post_list;
pub mod post_render;
pub mod search;
pub mod seo;
pub mod site_builder;
pub mod text_utils;
pub mod view;

mod test_data;
