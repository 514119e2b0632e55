//! Per-platform search query templates and domain filters.
//!
//! `{k}` in a template is replaced by the user's keyword. Templates run in
//! order; the first ones target the platform's video pages directly, the
//! later ones are broader phrasings that rely on the URL gatekeeper to weed
//! out non-video pages.

use clipscout_core::Platform;

const KEYWORD: &str = "{k}";

const KUAISHOU_QUERIES: &[&str] = &[
    "{k} site:kuaishou.com/short-video",
    "{k} site:www.kuaishou.com/video",
    "{k} site:v.kuaishou.com",
    "快手 {k} 视频",
    "{k} 快手 作品",
];

const DOUYIN_QUERIES: &[&str] = &[
    "{k} site:douyin.com/video",
    "{k} site:v.douyin.com",
    "抖音 {k} 视频",
];

const BILIBILI_QUERIES: &[&str] = &[
    "{k} site:bilibili.com/video",
    "{k} site:b23.tv",
    "哔哩哔哩 {k} 视频",
];

const YOUTUBE_QUERIES: &[&str] = &["{k} site:youtube.com/shorts", "{k} shorts"];

const XIAOHONGSHU_QUERIES: &[&str] = &[
    "{k} site:xiaohongshu.com/explore",
    "{k} site:xhslink.com",
    "小红书 {k} 视频笔记",
];

/// Query templates for `platform`, most specific first.
#[must_use]
pub fn query_templates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Kuaishou => KUAISHOU_QUERIES,
        Platform::Douyin => DOUYIN_QUERIES,
        Platform::Bilibili => BILIBILI_QUERIES,
        Platform::Youtube => YOUTUBE_QUERIES,
        Platform::Xiaohongshu => XIAOHONGSHU_QUERIES,
    }
}

/// Domains the search provider is restricted to for `platform`.
#[must_use]
pub fn include_domains(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Kuaishou => &["kuaishou.com"],
        Platform::Douyin => &["douyin.com", "iesdouyin.com"],
        Platform::Bilibili => &["bilibili.com", "b23.tv"],
        Platform::Youtube => &["youtube.com", "youtu.be"],
        Platform::Xiaohongshu => &["xiaohongshu.com", "xhslink.com"],
    }
}

/// Expands every template for `platform` with `keyword`.
#[must_use]
pub fn build_queries(platform: Platform, keyword: &str) -> Vec<String> {
    let keyword = keyword.trim();
    query_templates(platform)
        .iter()
        .map(|template| template.replace(KEYWORD, keyword))
        .collect()
}
