//! Platform-specific allow/deny path patterns.
//!
//! Patterns are plain substrings matched against the canonical URL. Deny
//! patterns cover corporate pages, listings and profile pages that share the
//! platform's domain; allow patterns identify individual video pages and the
//! platform's short-link hosts.

use clipscout_core::Platform;

/// Allow and deny substrings for one platform.
#[derive(Debug, Clone, Copy)]
pub struct UrlRules {
    pub allow: &'static [&'static str],
    pub deny: &'static [&'static str],
}

const KUAISHOU: UrlRules = UrlRules {
    allow: &["kuaishou.com/short-video", "v.kuaishou.com"],
    deny: &[
        "kuaishou.com/about",
        "kuaishou.com/contact",
        "kuaishou.com/privacy",
        "kuaishou.com/terms",
        "ir.kuaishou.com",
        "activity.kuaishou.com",
        "ai.kuaishou.com",
        "kling.kuaishou.com",
        "www.kuaishou.com/search",
        "www.kuaishou.com/profile",
    ],
};

const DOUYIN: UrlRules = UrlRules {
    allow: &["douyin.com/video/", "v.douyin.com", "iesdouyin.com/share/video"],
    deny: &[
        "douyin.com/about",
        "douyin.com/agreements",
        "douyin.com/privacy",
        "douyin.com/search",
        "douyin.com/user",
        "creator.douyin.com",
        "open.douyin.com",
        "live.douyin.com",
    ],
};

const BILIBILI: UrlRules = UrlRules {
    allow: &["bilibili.com/video/", "b23.tv/"],
    deny: &[
        "space.bilibili.com",
        "search.bilibili.com",
        "live.bilibili.com",
        "account.bilibili.com",
        "bilibili.com/blackboard",
        "bilibili.com/read",
        "bilibili.com/protocal",
    ],
};

// Watch pages carry the video id in the query string, which canonicalization
// removes, so only path-addressed shorts and short links are admitted.
const YOUTUBE: UrlRules = UrlRules {
    allow: &["youtube.com/shorts/", "youtu.be/"],
    deny: &[
        "youtube.com/about",
        "youtube.com/channel",
        "youtube.com/results",
        "youtube.com/t/",
        "youtube.com/@",
        "support.google.com",
    ],
};

const XIAOHONGSHU: UrlRules = UrlRules {
    allow: &[
        "xiaohongshu.com/explore/",
        "xiaohongshu.com/discovery/item/",
        "xhslink.com/",
    ],
    deny: &[
        "xiaohongshu.com/user/profile",
        "xiaohongshu.com/search_result",
        "xiaohongshu.com/protocols",
        "xiaohongshu.com/about",
    ],
};

/// Built-in URL rules for `platform`.
#[must_use]
pub fn rules_for(platform: Platform) -> UrlRules {
    match platform {
        Platform::Kuaishou => KUAISHOU,
        Platform::Douyin => DOUYIN,
        Platform::Bilibili => BILIBILI,
        Platform::Youtube => YOUTUBE,
        Platform::Xiaohongshu => XIAOHONGSHU,
    }
}
