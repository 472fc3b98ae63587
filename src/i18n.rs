//! Localized UI strings.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(format!("unknown language '{}' (expected en or zh)", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub source: &'static str,
    pub mode: &'static str,
    pub filter: &'static str,
    pub sort: &'static str,
    pub exec: &'static str,
    pub old: &'static str,
    pub new: &'static str,
    pub time: &'static str,
    pub lang: &'static str,
    pub confirm: &'static str,
    pub pending: &'static str,
    pub total: &'static str,
    pub filtered: &'static str,
    pub page: &'static str,
    pub done: &'static str,
    pub nothing: &'static str,
}

static EN: Strings = Strings {
    title: "Pro Rename",
    source: "Data Source",
    mode: "Rename Mode",
    filter: "Ext Filter",
    sort: "Sort",
    exec: "START PROCESS",
    old: "Original Name",
    new: "Preview",
    time: "Modified Time",
    lang: "Language",
    confirm: "Perform batch renaming on the filtered files?",
    pending: "waiting for import files...",
    total: "Total",
    filtered: "Filtered",
    page: "Page",
    done: "Done!",
    nothing: "No files to rename.",
};

static ZH: Strings = Strings {
    title: "Pro Rename",
    source: "数据源",
    mode: "重命名模式",
    filter: "扩展名过滤",
    sort: "排序",
    exec: "开始处理",
    old: "原文件名",
    new: "预览",
    time: "修改时间",
    lang: "语言切换",
    confirm: "确定对筛选出的文件执行批量重命名？",
    pending: "等待导入数据...",
    total: "总文件数",
    filtered: "已筛选",
    page: "页",
    done: "完成！",
    nothing: "没有需要重命名的文件。",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

/// `Total: N | Filtered: M`, or the pending notice before anything is imported
pub fn status_line(strings: &Strings, total: usize, filtered: usize) -> String {
    if total == 0 {
        strings.pending.to_string()
    } else {
        format!(
            "{}: {} | {}: {}",
            strings.total, total, strings.filtered, filtered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ZH ".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_status_line() {
        let en = Locale::En.strings();
        assert_eq!(status_line(en, 0, 0), "waiting for import files...");
        assert_eq!(status_line(en, 12, 4), "Total: 12 | Filtered: 4");

        let zh = Locale::Zh.strings();
        assert_eq!(status_line(zh, 3, 3), "总文件数: 3 | 已筛选: 3");
    }

    #[test]
    fn test_locales_differ() {
        assert_ne!(Locale::En.strings().confirm, Locale::Zh.strings().confirm);
        assert_eq!(Locale::En.to_string(), "en");
    }
}
