// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// 路径排除模式
///
/// 命中任意一条的URL不是内容页面：静态资源、订阅源、
/// 站点地图、后台路径以及标签/分类/作者/搜索聚合页
static EXCLUDED_PATH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\.(jpg|jpeg|png|gif|pdf|zip|doc|docx|xml|txt)$",
        r"/(sitemap|feed|rss|atom|api|admin|login|wp-content)/",
        r"/(tag|category|author|search)/",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid exclusion pattern"))
    .collect()
});

/// 规范化URL
///
/// 小写、强制https、去掉路径末尾斜杠、丢弃查询串与片段。
/// 无法解析的输入退化为小写并去尾斜杠。
pub fn normalize_url(url: &str) -> String {
    let lowered = url.to_lowercase();

    match Url::parse(&lowered) {
        Ok(mut parsed) => {
            let _ = parsed.set_scheme("https");
            parsed.set_query(None);
            parsed.set_fragment(None);

            let trimmed = parsed.path().trim_end_matches('/').to_string();
            if trimmed.is_empty() {
                parsed.set_path("/");
            } else {
                parsed.set_path(&trimmed);
            }

            parsed.to_string()
        }
        Err(_) => lowered.trim_end_matches('/').to_string(),
    }
}

/// 校验URL是否可能是内容页面
///
/// # 返回值
///
/// * `Some(true)` - 结构有效且未命中排除模式
/// * `Some(false)` - 路径命中排除模式
/// * `None` - 无法解析、非http(s)或主机名不完整
pub fn validate_url(url: &str) -> Option<bool> {
    let parsed = Url::parse(url).ok()?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let host = parsed.host_str()?;
    if !host.contains('.') {
        return None;
    }

    let path = parsed.path().to_lowercase();
    for pattern in EXCLUDED_PATH_PATTERNS.iter() {
        if pattern.is_match(&path) {
            return Some(false);
        }
    }

    Some(true)
}
