//! Plain-text rendering of extraction results for terminal output.

use clipscout_core::{VideoRecord, UNKNOWN};

/// Descriptions longer than this many characters are shortened.
const MAX_TEXT_CHARS: usize = 200;

/// Renders `records` as a numbered, human-readable block.
///
/// Empty and [`UNKNOWN`] fields are omitted, as are zero counts.
#[must_use]
pub fn format_results(records: &[VideoRecord]) -> String {
    if records.is_empty() {
        return "找到 0 个结果:\n".to_owned();
    }

    let mut output = vec![format!("找到 {} 个结果:\n", records.len())];

    for (i, record) in records.iter().enumerate() {
        output.push(format!("\n{}. 平台: {}", i + 1, record.platform));

        if let Some(title) = present(&record.title) {
            output.push(format!("   标题: {title}"));
        }
        if let Some(author) = present(&record.author) {
            output.push(format!("   作者: {author}"));
        }
        let url = record.url.trim();
        if !url.is_empty() {
            output.push(format!("   链接: {url}"));
        }
        if let Some(text) = present(&record.text) {
            output.push(format!("   描述: {}", truncate_text(text)));
        }

        for (label, count) in [
            ("播放量", record.play_count),
            ("点赞数", record.like_count),
            ("评论数", record.comment_count),
            ("分享数", record.share_count),
        ] {
            if count > 0 {
                output.push(format!("   {label}: {}", group_thousands(count)));
            }
        }

        if let Some(publish_time) = present(&record.publish_time) {
            output.push(format!("   发布时间: {publish_time}"));
        }
        if !record.tags.is_empty() {
            output.push(format!("   标签: {}", record.tags.join(", ")));
        }
    }

    output.join("\n")
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed != UNKNOWN).then_some(trimmed)
}

fn truncate_text(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_CHARS {
        let head: String = text.chars().take(MAX_TEXT_CHARS - 3).collect();
        format!("{head}...")
    } else {
        text.to_owned()
    }
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use clipscout_core::Platform;

    use super::*;

    fn make_record() -> VideoRecord {
        VideoRecord {
            platform: Platform::Kuaishou,
            title: "猫咪的一天".to_owned(),
            url: "https://v.kuaishou.com/cat".to_owned(),
            text: "记录猫咪日常".to_owned(),
            author: "喵星人".to_owned(),
            play_count: 25_000,
            like_count: 1_234_567,
            comment_count: 0,
            share_count: 999,
            publish_time: "2024-05-01".to_owned(),
            tags: vec!["猫咪".to_owned(), "宠物".to_owned()],
        }
    }

    #[test]
    fn empty_results() {
        assert_eq!(format_results(&[]), "找到 0 个结果:\n");
    }

    #[test]
    fn full_record_layout() {
        let rendered = format_results(&[make_record()]);
        let expected = "找到 1 个结果:\n\n\n\
                        1. 平台: kuaishou\n   \
                        标题: 猫咪的一天\n   \
                        作者: 喵星人\n   \
                        链接: https://v.kuaishou.com/cat\n   \
                        描述: 记录猫咪日常\n   \
                        播放量: 25,000\n   \
                        点赞数: 1,234,567\n   \
                        分享数: 999\n   \
                        发布时间: 2024-05-01\n   \
                        标签: 猫咪, 宠物";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn unknown_and_empty_fields_omitted() {
        let mut record = make_record();
        record.title = UNKNOWN.to_owned();
        record.author = UNKNOWN.to_owned();
        record.text = String::new();
        record.publish_time = String::new();
        record.tags.clear();
        record.play_count = 0;
        record.like_count = 0;
        record.share_count = 0;
        let rendered = format_results(&[record]);
        assert_eq!(
            rendered,
            "找到 1 个结果:\n\n\n1. 平台: kuaishou\n   链接: https://v.kuaishou.com/cat"
        );
    }

    #[test]
    fn records_are_numbered_from_one() {
        let rendered = format_results(&[make_record(), make_record()]);
        assert!(rendered.starts_with("找到 2 个结果:\n"));
        assert!(rendered.contains("\n1. 平台: kuaishou"));
        assert!(rendered.contains("\n2. 平台: kuaishou"));
    }

    #[test]
    fn long_text_truncated_with_ellipsis() {
        let mut record = make_record();
        record.text = "字".repeat(250);
        let rendered = format_results(&[record]);
        let line = rendered
            .lines()
            .find(|l| l.starts_with("   描述: "))
            .unwrap();
        let body = line.trim_start_matches("   描述: ");
        assert_eq!(body.chars().count(), 200);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn text_at_limit_is_kept() {
        let text = "字".repeat(200);
        assert_eq!(truncate_text(&text), text);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(300_000_000), "300,000,000");
    }
}
